use std::collections::BTreeMap;
use std::fmt;

use crate::expenses::ExpenseRecord;

/// A record excluded from month aggregation because its date failed to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    /// 1-based position of the record in the book.
    pub position: usize,
    pub date: String,
    pub name: String,
}

impl fmt::Display for SkippedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "skipping entry #{} `{}`: bad date `{}`",
            self.position, self.name, self.date
        )
    }
}

/// Month totals sorted ascending by `YYYY-MM` key, plus diagnostics for the
/// records that could not be dated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonthlySummary {
    pub totals: Vec<(String, f64)>,
    pub skipped: Vec<SkippedRecord>,
}

/// Folds the records into per-month totals. A malformed date never aborts
/// the aggregation; the offending record lands in the diagnostics list and
/// the remaining records are still summed.
pub fn monthly_totals(records: &[ExpenseRecord]) -> MonthlySummary {
    let mut totals: BTreeMap<String, f64> = BTreeMap::new();
    let mut skipped = Vec::new();

    for (index, record) in records.iter().enumerate() {
        match record.month_key() {
            Some(month) => *totals.entry(month).or_insert(0.0) += record.amount,
            None => skipped.push(SkippedRecord {
                position: index + 1,
                date: record.date.clone(),
                name: record.name.clone(),
            }),
        }
    }

    MonthlySummary {
        // Lexicographic order of "YYYY-MM" keys is chronological order.
        totals: totals.into_iter().collect(),
        skipped,
    }
}
