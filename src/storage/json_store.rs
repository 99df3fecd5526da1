use std::{
    fs,
    path::{Path, PathBuf},
};

use serde_json::Value;
use tracing::debug;

use crate::errors::{ExpenseError, Result};
use crate::expenses::{ExpenseBook, ExpenseRecord};

/// JSON-backed persistence for a single expense document.
///
/// The storage location is injected at construction; there is no process-wide
/// default path.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the stored book.
    ///
    /// A missing file yields the default (empty) book. A root-level array is
    /// the legacy (v1) schema, a bare record sequence, and is migrated by
    /// wrapping it with zeroed budget and goal. A root-level object is the
    /// current (v2) schema. Anything else, or a document that is not JSON at
    /// all, is a fatal corruption error.
    pub fn load(&self) -> Result<ExpenseBook> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no expense file yet, starting empty");
            return Ok(ExpenseBook::default());
        }
        let data = fs::read_to_string(&self.path)?;
        let root: Value = serde_json::from_str(&data).map_err(|source| self.corrupt(source))?;
        match root {
            Value::Array(_) => {
                let records: Vec<ExpenseRecord> =
                    serde_json::from_value(root).map_err(|source| self.corrupt(source))?;
                debug!(count = records.len(), "migrated legacy expense sequence");
                Ok(ExpenseBook {
                    records,
                    budget: 0.0,
                    goal: 0.0,
                })
            }
            Value::Object(_) => {
                serde_json::from_value(root).map_err(|source| self.corrupt(source))
            }
            other => Err(self.corrupt(serde::de::Error::custom(format!(
                "expected an object or a record sequence, found {}",
                json_kind(&other)
            )))),
        }
    }

    /// Serializes the entire book, staging to a temporary file and renaming
    /// it over the previous document.
    pub fn save(&self, book: &ExpenseBook) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(book)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn corrupt(&self, source: serde_json::Error) -> ExpenseError {
        ExpenseError::CorruptStore {
            path: self.path.clone(),
            source,
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
