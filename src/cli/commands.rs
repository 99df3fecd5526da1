use chrono::Local;
use tracing::warn;

use crate::cli::{chart, output, prompt, table, CliError};
use crate::reports::{
    self, category_totals, monthly_totals, overall_total, overspend_flags, BudgetStatus,
    SavingsStatus, DEFAULT_OVERSPEND_PERCENT,
};
use crate::storage::RecordStore;

pub fn add_expense(store: &mut RecordStore) -> Result<(), CliError> {
    let category = prompt::category("Select a category")?;
    let name = prompt::text("Expense name")?;
    let amount = prompt::amount("Amount ($)")?;
    let date = Local::now().format("%Y-%m-%d").to_string();
    store.add_record(date.clone(), category, name.clone(), amount)?;
    output::success(format!("Saved: {date} - {category} - {name} (${amount:.2})"));
    Ok(())
}

pub fn view_expenses(store: &RecordStore) {
    if store.records().is_empty() {
        output::info("No expenses recorded yet.");
        return;
    }
    output::section("Your Expenses");
    table::print_records(store.records(), false);
}

pub fn delete_expense(store: &mut RecordStore) -> Result<(), CliError> {
    if store.records().is_empty() {
        output::info("No expenses to delete.");
        return Ok(());
    }
    output::section("Delete an Expense");
    table::print_records(store.records(), true);
    let position = prompt::position("Number of the expense to delete")?;
    match store.delete_record(position) {
        Ok(removed) => {
            output::success(format!("Deleted: {} (${:.2})", removed.name, removed.amount));
        }
        // Out of range is a diagnostic, not a reason to leave the menu.
        Err(err) => output::error(err),
    }
    Ok(())
}

pub fn spending_summary(store: &RecordStore) {
    let totals = category_totals(store.records());
    output::section("Spending Summary");
    if totals.is_empty() {
        output::info("No expenses recorded yet.");
        return;
    }
    for (category, total) in &totals {
        output::info(format!("{:<15} ${:.2}", category.to_string(), total));
    }
    output::info("-".repeat(30));
    output::info(format!(
        "{:<15} ${:.2}",
        "Total",
        overall_total(store.records())
    ));
}

pub fn category_chart(store: &RecordStore) {
    let totals = category_totals(store.records());
    if totals.is_empty() {
        output::info("No expenses to display in chart.");
        return;
    }
    let budget = store.book().budget;
    let flags = overspend_flags(&totals, budget, DEFAULT_OVERSPEND_PERCENT);
    output::section("Spending per Category");
    chart::bars(&totals, &flags);
    output::info(format!(
        "Total: ${:.2}  Budget: ${:.2}  Overspend threshold: {:.0}% of budget",
        overall_total(store.records()),
        budget,
        DEFAULT_OVERSPEND_PERCENT,
    ));
}

pub fn monthly_summary(store: &RecordStore) {
    let summary = monthly_totals(store.records());
    for skip in &summary.skipped {
        warn!(%skip, "record excluded from monthly summary");
        output::warning(skip);
    }
    if summary.totals.is_empty() {
        output::info("No dated expenses to summarize.");
        return;
    }
    output::section("Monthly Spending Summary");
    table::print_months(&summary.totals);
    output::info("");
    chart::trend(&summary.totals);
}

pub fn set_budget(store: &mut RecordStore) -> Result<(), CliError> {
    let amount = prompt::amount("Monthly budget ($)")?;
    store.set_budget(amount)?;
    output::success(format!("Budget set to ${amount:.2}"));
    Ok(())
}

pub fn set_goal(store: &mut RecordStore) -> Result<(), CliError> {
    let amount = prompt::amount("Monthly savings goal ($)")?;
    store.set_goal(amount)?;
    output::success(format!("Savings goal set to ${amount:.2}"));
    Ok(())
}

pub fn check_progress(store: &RecordStore) {
    let report = reports::check_progress(store.book());
    output::section("Budget Progress");
    output::info(format!("Total spent:  ${:.2}", report.total_spent));
    output::info(format!("Budget limit: ${:.2}", report.budget));
    output::info(format!("Savings goal: ${:.2}", report.goal));
    if let Some(percent) = report.used_percent {
        output::info(format!("Used {percent:.1}% of your budget."));
    }
    match report.budget_status {
        Some(BudgetStatus::Exceeded) => output::error("You have exceeded your budget!"),
        Some(BudgetStatus::Nearing) => output::warning("You are nearing your budget limit."),
        Some(BudgetStatus::WithinBudget) => output::success("You are within your budget."),
        None => {}
    }
    match report.savings_status {
        Some(SavingsStatus::OnTrack { remaining }) => {
            output::success(format!(
                "On track for your savings goal (${remaining:.2} left)."
            ));
        }
        Some(SavingsStatus::ShortfallBy(amount)) => {
            output::warning(format!("Below your savings target by ${amount:.2}."));
        }
        None => {}
    }
}
