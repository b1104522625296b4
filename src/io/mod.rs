//! I/O module
//!
//! Handles ledger persistence and human-readable output.
//!
//! # Components
//!
//! - `json_store` - Whole-document JSON file store
//! - `memory_store` - In-memory store sharing the JSON encoding, for tests and scripted sessions
//! - `display` - Account and transaction tables, currency formatting

pub mod display;
pub mod json_store;
pub mod memory_store;

pub use display::{
    format_currency, write_account_details, write_account_listing, write_transaction_history,
};
pub use json_store::JsonFileStore;
pub use memory_store::MemoryStore;
