//! Expense domain models and boundary validation helpers.

pub mod book;
pub mod category;
pub mod record;

pub use book::ExpenseBook;
pub use category::Category;
pub use record::ExpenseRecord;

use crate::errors::{ExpenseError, Result};

/// Parses a user-supplied amount. Anything that reads as a number is
/// accepted, negative and zero included; there is no upper bound.
pub fn parse_amount(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    trimmed
        .parse::<f64>()
        .map_err(|_| ExpenseError::InvalidAmount(trimmed.to_string()))
}
