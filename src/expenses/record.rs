use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Category;

const DATE_FORMAT: &str = "%Y-%m-%d";
const MONTH_FORMAT: &str = "%Y-%m";

/// A single expense entry as persisted in the store.
///
/// The date is kept as the raw stored text: legacy documents may carry dates
/// that no longer parse, and those records must still load, display, and sum.
/// Only month aggregation needs a calendar date, and it skips what it cannot
/// parse.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseRecord {
    pub date: String,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub name: String,
    pub amount: f64,
}

impl ExpenseRecord {
    pub fn new(
        date: impl Into<String>,
        category: Category,
        name: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            date: date.into(),
            category,
            name: name.into(),
            amount,
        }
    }

    /// The record's calendar date, when it parses as `YYYY-MM-DD`.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT).ok()
    }

    /// Year-month portion of the date, or `None` when the date is malformed.
    pub fn month_key(&self) -> Option<String> {
        self.calendar_date()
            .map(|date| date.format(MONTH_FORMAT).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_key_extracts_year_and_month() {
        let record = ExpenseRecord::new("2025-03-14", Category::Food, "lunch", 9.5);
        assert_eq!(record.month_key().as_deref(), Some("2025-03"));
    }

    #[test]
    fn month_key_is_none_for_malformed_dates() {
        let record = ExpenseRecord::new("14/03/2025", Category::Food, "lunch", 9.5);
        assert_eq!(record.month_key(), None);
        let record = ExpenseRecord::new("2025-13-40", Category::Food, "lunch", 9.5);
        assert_eq!(record.month_key(), None);
    }

    #[test]
    fn legacy_record_defaults_category_and_name() {
        let record: ExpenseRecord =
            serde_json::from_str(r#"{"date": "2024-01-02", "amount": 3.0}"#).unwrap();
        assert_eq!(record.category, Category::Other);
        assert_eq!(record.name, "");
        assert_eq!(record.amount, 3.0);
    }
}
