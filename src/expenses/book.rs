use serde::{Deserialize, Serialize};

use super::ExpenseRecord;

/// The full persisted store: expense records in entry order plus the budget
/// and savings-goal scalars.
///
/// A scalar of 0 means "unset" and disables the related threshold logic; it
/// never signals an error. The record list serializes under the `expenses`
/// key, the document's storage-boundary name.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ExpenseBook {
    #[serde(rename = "expenses", default)]
    pub records: Vec<ExpenseRecord>,
    #[serde(default)]
    pub budget: f64,
    #[serde(default)]
    pub goal: f64,
}

impl ExpenseBook {
    pub fn push(&mut self, record: ExpenseRecord) {
        self.records.push(record);
    }

    /// Removes and returns the record at `index` (0-based). Bounds are the
    /// caller's responsibility; the record store validates 1-based positions.
    pub fn remove(&mut self, index: usize) -> ExpenseRecord {
        self.records.remove(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn total_spent(&self) -> f64 {
        self.records.iter().map(|record| record.amount).sum()
    }
}
