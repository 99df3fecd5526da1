//! Interactive menu collaborator: prompts, tables, and console charts. The
//! core store and report modules stay free of any console concern.

mod chart;
mod commands;
mod menu;
mod output;
mod prompt;
mod table;

use thiserror::Error;

use crate::errors::ExpenseError;

pub use menu::run;

/// User-facing CLI error wrapper.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] ExpenseError),
    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}
