use tracing::debug;

use crate::cli::{commands, output, prompt, CliError};
use crate::storage::RecordStore;

const MENU_ITEMS: [&str; 10] = [
    "Add expense",
    "View expenses",
    "Spending summary",
    "Category chart",
    "Delete expense",
    "Monthly summary",
    "Set monthly budget",
    "Set savings goal",
    "Check progress",
    "Exit",
];

/// Runs the interactive menu loop until the user exits. Mutating selections
/// persist inside the store; exit itself writes nothing.
pub fn run(store: &mut RecordStore) -> Result<(), CliError> {
    output::info(format!("Tracking expenses in {}", store.path().display()));
    loop {
        let choice = prompt::select("Expense Tracker", &MENU_ITEMS)?;
        debug!(choice, "menu selection");
        match choice {
            0 => commands::add_expense(store)?,
            1 => commands::view_expenses(store),
            2 => commands::spending_summary(store),
            3 => commands::category_chart(store),
            4 => commands::delete_expense(store)?,
            5 => commands::monthly_summary(store),
            6 => commands::set_budget(store)?,
            7 => commands::set_goal(store)?,
            8 => commands::check_progress(store),
            _ => {
                output::info("Goodbye.");
                return Ok(());
            }
        }
    }
}
