use std::path::PathBuf;

use thiserror::Error;

/// Error type that captures store, validation, and persistence failures.
///
/// A missing expense file is not an error (the store starts empty), and a
/// record with an unparseable date is reported as a diagnostic during month
/// aggregation rather than through this type.
#[derive(Debug, Error)]
pub enum ExpenseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("expense file `{path}` is corrupt: {source}")]
    CorruptStore {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid category selection `{0}`")]
    InvalidCategory(String),
    #[error("amount `{0}` is not a number")]
    InvalidAmount(String),
    #[error("position {position} is out of range (1..={len})")]
    OutOfRange { position: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, ExpenseError>;
