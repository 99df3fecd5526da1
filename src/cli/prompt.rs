use dialoguer::{theme::ColorfulTheme, Input, Select};

use crate::cli::{output, CliError};
use crate::expenses::{parse_amount, Category};

/// Arrow-key selection over `items`, returning the chosen index.
pub fn select(prompt: &str, items: &[&str]) -> Result<usize, CliError> {
    Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact()
        .map_err(CliError::from)
}

/// Free-form text input; empty input is allowed.
pub fn text(prompt: &str) -> Result<String, CliError> {
    Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map_err(CliError::from)
}

/// Category picker over the fixed set, presented in 1-based menu order.
pub fn category(prompt: &str) -> Result<Category, CliError> {
    let names: Vec<&str> = Category::ALL.iter().map(|category| category.name()).collect();
    let selection = select(prompt, &names)?;
    Category::from_index(selection + 1).map_err(CliError::from)
}

/// Numeric amount, re-prompting until the input parses. The validation
/// itself lives in the core; only the retry loop belongs here.
pub fn amount(prompt: &str) -> Result<f64, CliError> {
    loop {
        let raw = text(prompt)?;
        match parse_amount(&raw) {
            Ok(value) => return Ok(value),
            Err(err) => output::warning(err),
        }
    }
}

/// 1-based position, re-prompting until the input is a whole number. Range
/// checking stays with the record store.
pub fn position(prompt: &str) -> Result<usize, CliError> {
    loop {
        let raw = text(prompt)?;
        match raw.trim().parse::<usize>() {
            Ok(value) => return Ok(value),
            Err(_) => output::warning(format!("`{}` is not a whole number", raw.trim())),
        }
    }
}
