use std::fs;

use expense_tracker::errors::ExpenseError;
use expense_tracker::expenses::Category;
use expense_tracker::storage::RecordStore;
use tempfile::tempdir;

#[test]
fn full_book_round_trips_through_disk() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("expenses.json");

    {
        let mut store = RecordStore::open(&path).expect("open fresh store");
        store
            .add_record("2025-01-10", Category::Food, "groceries", 54.20)
            .unwrap();
        store
            .add_record("2025-01-12", Category::Transport, "train pass", 30.0)
            .unwrap();
        store.set_budget(400.0).unwrap();
        store.set_goal(75.0).unwrap();
    }

    let reopened = RecordStore::open(&path).expect("reopen store");
    assert_eq!(reopened.records().len(), 2);
    assert_eq!(reopened.records()[0].name, "groceries");
    assert_eq!(reopened.records()[1].category, Category::Transport);
    assert_eq!(reopened.book().budget, 400.0);
    assert_eq!(reopened.book().goal, 75.0);
}

#[test]
fn legacy_record_sequence_is_wrapped_on_load() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("expenses.json");
    fs::write(
        &path,
        r#"[
            {"date": "2024-11-05", "category": "Food", "name": "lunch", "amount": 12.0},
            {"date": "2024-11-06", "name": "misc", "amount": 3.0}
        ]"#,
    )
    .unwrap();

    let store = RecordStore::open(&path).expect("legacy document loads");
    assert_eq!(store.records().len(), 2);
    assert_eq!(store.book().budget, 0.0);
    assert_eq!(store.book().goal, 0.0);
    // The record with no category defaults rather than failing the load.
    assert_eq!(store.records()[1].category, Category::Other);
}

#[test]
fn migration_is_persisted_in_the_current_schema() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("expenses.json");
    fs::write(&path, r#"[{"date": "2024-11-05", "amount": 1.0}]"#).unwrap();

    {
        let mut store = RecordStore::open(&path).unwrap();
        store.set_budget(100.0).unwrap();
    }

    let raw = fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert!(value.is_object(), "saved document should be the v2 object");
    assert_eq!(value["budget"], 100.0);
    assert_eq!(value["goal"], 0.0);
    assert_eq!(value["expenses"].as_array().map(Vec::len), Some(1));
}

#[test]
fn add_then_delete_restores_the_prior_sequence() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("expenses.json");
    let mut store = RecordStore::open(&path).unwrap();
    store
        .add_record("2025-02-01", Category::Food, "bread", 2.0)
        .unwrap();
    store
        .add_record("2025-02-02", Category::Utilities, "power", 60.0)
        .unwrap();
    let before: Vec<String> = store.records().iter().map(|r| r.name.clone()).collect();

    store
        .add_record("2025-02-03", Category::Other, "oops", 1.0)
        .unwrap();
    let removed = store.delete_record(3).unwrap();
    assert_eq!(removed.name, "oops");

    let after: Vec<String> = store.records().iter().map(|r| r.name.clone()).collect();
    assert_eq!(before, after);
}

#[test]
fn out_of_range_delete_leaves_disk_and_memory_untouched() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("expenses.json");
    let mut store = RecordStore::open(&path).unwrap();
    store
        .add_record("2025-02-01", Category::Food, "bread", 2.0)
        .unwrap();
    let snapshot = fs::read_to_string(&path).unwrap();

    for position in [0, 2] {
        let err = store.delete_record(position).unwrap_err();
        assert!(matches!(err, ExpenseError::OutOfRange { .. }));
    }

    assert_eq!(store.records().len(), 1);
    assert_eq!(fs::read_to_string(&path).unwrap(), snapshot);
}

#[test]
fn corrupt_document_aborts_open() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("expenses.json");
    fs::write(&path, "\"just a string\"").unwrap();
    let err = RecordStore::open(&path).unwrap_err();
    assert!(matches!(err, ExpenseError::CorruptStore { .. }));

    fs::write(&path, "{\"expenses\": [{\"amount\": ").unwrap();
    let err = RecordStore::open(&path).unwrap_err();
    assert!(matches!(err, ExpenseError::CorruptStore { .. }));
}
