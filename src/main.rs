//! Rust Ledger Manager CLI
//!
//! Interactive command-line ledger of bank accounts stored in a JSON file.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --data-file ~/ledger.json
//! cargo run -- --log-level debug
//! RUST_LOG=info cargo run
//! ```
//!
//! The program loads the ledger file (creating it if missing), then shows a
//! menu to create accounts, deposit, withdraw, transfer, delete and inspect
//! accounts. Every successful change is written back to the file at once.
//!
//! # Exit Codes
//!
//! - 0: Success (operator chose Exit or input ended)
//! - 1: Error (ledger file unreadable or malformed, ledger could not be saved, etc.)

use rust_ledger_manager::cli::{self, Menu};
use rust_ledger_manager::{logging, JsonFileStore, LedgerEngine};
use std::io;
use std::process;

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();
    logging::init(args.log_level.as_filter());

    let store = JsonFileStore::new(&args.data_file);
    let mut engine = match LedgerEngine::open(store) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    // Menu on stdout, logs on stderr
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut menu = Menu::new(&mut engine, stdin.lock(), stdout.lock());
    if let Err(e) = menu.run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
