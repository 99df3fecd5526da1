//! Persistence backend and the store that owns the in-memory book.

pub mod json_store;

pub use json_store::JsonStore;

use std::path::Path;

use tracing::info;

use crate::errors::{ExpenseError, Result};
use crate::expenses::{Category, ExpenseBook, ExpenseRecord};

/// Owns the in-memory expense book together with its persistence backend.
///
/// Every mutation writes the full book back to disk, budget and goal
/// included; a save that dropped the scalars would silently lose them.
#[derive(Debug)]
pub struct RecordStore {
    book: ExpenseBook,
    storage: JsonStore,
}

impl RecordStore {
    /// Opens the store at `path`, loading the existing document or starting
    /// empty when none is present.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let storage = JsonStore::new(path.as_ref());
        let book = storage.load()?;
        info!(
            path = %storage.path().display(),
            records = book.len(),
            "opened expense store"
        );
        Ok(Self { book, storage })
    }

    pub fn book(&self) -> &ExpenseBook {
        &self.book
    }

    pub fn records(&self) -> &[ExpenseRecord] {
        &self.book.records
    }

    pub fn path(&self) -> &Path {
        self.storage.path()
    }

    /// Appends a record and persists the full book.
    pub fn add_record(
        &mut self,
        date: impl Into<String>,
        category: Category,
        name: impl Into<String>,
        amount: f64,
    ) -> Result<()> {
        let record = ExpenseRecord::new(date, category, name, amount);
        info!(category = %record.category, amount = record.amount, "adding expense");
        self.book.push(record);
        self.storage.save(&self.book)
    }

    /// Removes the record at the given 1-based position, persists, and
    /// returns the removed record. An out-of-range position mutates nothing
    /// and writes nothing.
    pub fn delete_record(&mut self, position: usize) -> Result<ExpenseRecord> {
        let len = self.book.len();
        if position == 0 || position > len {
            return Err(ExpenseError::OutOfRange { position, len });
        }
        let removed = self.book.remove(position - 1);
        self.storage.save(&self.book)?;
        info!(name = %removed.name, amount = removed.amount, "deleted expense");
        Ok(removed)
    }

    /// Updates the budget scalar and persists the full book.
    pub fn set_budget(&mut self, amount: f64) -> Result<()> {
        self.book.budget = amount;
        self.storage.save(&self.book)
    }

    /// Updates the savings-goal scalar and persists the full book.
    pub fn set_goal(&mut self, amount: f64) -> Result<()> {
        self.book.goal = amount;
        self.storage.save(&self.book)
    }
}
