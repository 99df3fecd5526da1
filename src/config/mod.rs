use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "expense_tracker";
const STORE_FILE: &str = "expenses.json";

/// Environment variable overriding the expense document location.
pub const STORE_FILE_ENV: &str = "EXPENSE_TRACKER_FILE";

/// Resolves the expense document location: explicit override first, then the
/// environment, then the platform data directory, falling back to the
/// working directory when no data directory exists.
pub fn storage_path(override_path: Option<PathBuf>) -> PathBuf {
    if let Some(path) = override_path {
        return path;
    }
    if let Some(path) = env::var_os(STORE_FILE_ENV) {
        return PathBuf::from(path);
    }
    match dirs::data_dir() {
        Some(base) => base.join(APP_DIR).join(STORE_FILE),
        None => PathBuf::from(STORE_FILE),
    }
}
