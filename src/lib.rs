#![doc(test(attr(deny(warnings))))]

//! Expense Tracker provides the record store, aggregation, and budget
//! progress primitives behind a small interactive expense-tracking CLI.

pub mod cli;
pub mod config;
pub mod errors;
pub mod expenses;
pub mod reports;
pub mod storage;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        init_tracing();
        tracing::info!("Expense Tracker tracing initialized.");
    });
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter =
        EnvFilter::from_default_env().add_directive("expense_tracker=info".parse().unwrap());

    fmt().with_env_filter(filter).init();
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
