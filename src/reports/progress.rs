use crate::expenses::ExpenseBook;

const NEARING_SHARE: f64 = 0.8;

/// How total spending compares to the configured budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    Exceeded,
    Nearing,
    WithinBudget,
}

/// How the remaining budget compares to the savings goal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SavingsStatus {
    OnTrack { remaining: f64 },
    ShortfallBy(f64),
}

/// Snapshot of spending against budget and goal. Statuses are `None` when
/// the corresponding scalar is unset.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressReport {
    pub total_spent: f64,
    pub budget: f64,
    pub goal: f64,
    pub used_percent: Option<f64>,
    pub budget_status: Option<BudgetStatus>,
    pub savings_status: Option<SavingsStatus>,
}

/// Compares total spending against the budget and savings goal.
pub fn check_progress(book: &ExpenseBook) -> ProgressReport {
    let total_spent = book.total_spent();
    let budget = book.budget;
    let goal = book.goal;

    let (used_percent, budget_status) = if budget > 0.0 {
        let status = if total_spent > budget {
            BudgetStatus::Exceeded
        } else if total_spent >= NEARING_SHARE * budget {
            // Spending exactly the budget lands here: the exceed test is a
            // strict greater-than.
            BudgetStatus::Nearing
        } else {
            BudgetStatus::WithinBudget
        };
        (Some(total_spent / budget * 100.0), Some(status))
    } else {
        (None, None)
    };

    let savings_status = if goal > 0.0 {
        // Remaining is measured against the budget, not spending alone; an
        // unset budget with a goal therefore reports a shortfall.
        let remaining = budget - total_spent;
        if remaining >= goal {
            Some(SavingsStatus::OnTrack { remaining })
        } else {
            Some(SavingsStatus::ShortfallBy(goal - remaining))
        }
    } else {
        None
    };

    ProgressReport {
        total_spent,
        budget,
        goal,
        used_percent,
        budget_status,
        savings_status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expenses::{Category, ExpenseRecord};

    fn book(budget: f64, goal: f64, amounts: &[f64]) -> ExpenseBook {
        let mut book = ExpenseBook {
            budget,
            goal,
            ..ExpenseBook::default()
        };
        for &amount in amounts {
            book.push(ExpenseRecord::new(
                "2025-01-01",
                Category::Food,
                "item",
                amount,
            ));
        }
        book
    }

    #[test]
    fn eighty_percent_of_budget_is_nearing() {
        let report = check_progress(&book(100.0, 0.0, &[80.0]));
        assert_eq!(report.budget_status, Some(BudgetStatus::Nearing));
        assert_eq!(report.used_percent, Some(80.0));
    }

    #[test]
    fn spending_exactly_the_budget_is_nearing_not_exceeded() {
        let report = check_progress(&book(100.0, 0.0, &[60.0, 40.0]));
        assert_eq!(report.budget_status, Some(BudgetStatus::Nearing));
    }

    #[test]
    fn spending_past_the_budget_is_exceeded() {
        let report = check_progress(&book(100.0, 0.0, &[100.01]));
        assert_eq!(report.budget_status, Some(BudgetStatus::Exceeded));
    }

    #[test]
    fn below_the_nearing_band_is_within_budget() {
        let report = check_progress(&book(100.0, 0.0, &[79.99]));
        assert_eq!(report.budget_status, Some(BudgetStatus::WithinBudget));
    }

    #[test]
    fn unset_budget_produces_no_budget_status() {
        let report = check_progress(&book(0.0, 0.0, &[50.0]));
        assert_eq!(report.budget_status, None);
        assert_eq!(report.used_percent, None);
    }

    #[test]
    fn goal_met_when_remaining_budget_covers_it() {
        let report = check_progress(&book(500.0, 100.0, &[300.0]));
        assert_eq!(
            report.savings_status,
            Some(SavingsStatus::OnTrack { remaining: 200.0 })
        );
    }

    #[test]
    fn goal_with_unset_budget_reports_a_shortfall() {
        let report = check_progress(&book(0.0, 50.0, &[10.0]));
        assert_eq!(report.savings_status, Some(SavingsStatus::ShortfallBy(60.0)));
    }

    #[test]
    fn unset_goal_produces_no_savings_status() {
        let report = check_progress(&book(100.0, 0.0, &[10.0]));
        assert_eq!(report.savings_status, None);
    }
}
