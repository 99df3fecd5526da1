//! Stateless aggregation and progress computations over the expense book.

pub mod monthly;
pub mod progress;
pub mod summary;

pub use monthly::{monthly_totals, MonthlySummary, SkippedRecord};
pub use progress::{check_progress, BudgetStatus, ProgressReport, SavingsStatus};
pub use summary::{
    category_totals, overall_total, overspend_flags, DEFAULT_OVERSPEND_PERCENT,
};
