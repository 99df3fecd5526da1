use std::path::PathBuf;

use expense_tracker::{cli, config, init, storage::RecordStore};

fn main() {
    init();

    let override_path = std::env::args_os().nth(1).map(PathBuf::from);
    let path = config::storage_path(override_path);

    let mut store = match RecordStore::open(&path) {
        Ok(store) => store,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = cli::run(&mut store) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
