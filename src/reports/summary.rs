use crate::expenses::{Category, ExpenseRecord};

/// Share of the budget past which a single category counts as overspending.
pub const DEFAULT_OVERSPEND_PERCENT: f64 = 20.0;

/// Per-category totals, in the order categories first appear in the records.
pub fn category_totals(records: &[ExpenseRecord]) -> Vec<(Category, f64)> {
    let mut totals: Vec<(Category, f64)> = Vec::new();
    for record in records {
        match totals
            .iter_mut()
            .find(|(category, _)| *category == record.category)
        {
            Some((_, sum)) => *sum += record.amount,
            None => totals.push((record.category, record.amount)),
        }
    }
    totals
}

/// Sum of every record's amount.
pub fn overall_total(records: &[ExpenseRecord]) -> f64 {
    records.iter().map(|record| record.amount).sum()
}

/// Flags each category whose total strictly exceeds the overspend threshold,
/// `overspend_percent` percent of the budget. An unset budget disables the
/// threshold entirely; nothing is ever flagged.
pub fn overspend_flags(
    totals: &[(Category, f64)],
    budget: f64,
    overspend_percent: f64,
) -> Vec<(Category, bool)> {
    let threshold = if budget > 0.0 {
        (overspend_percent / 100.0) * budget
    } else {
        f64::INFINITY
    };
    totals
        .iter()
        .map(|&(category, total)| (category, total > threshold))
        .collect()
}
