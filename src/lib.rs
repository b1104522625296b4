//! Rust Ledger Manager Library
//! # Overview
//!
//! This library provides a single-user ledger of bank accounts persisted to a flat JSON file
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, Transaction, etc.)
//! - [`cli`] - CLI arguments parsing and the interactive menu
//! - [`core`] - Business logic components:
//!   - [`core::engine`] - One operation per business action, persisting after each mutation
//!   - [`core::ledger`] - Account state and balance operations
//!   - [`core::validation`] - Pure checks on raw operator input
//!   - [`core::ids`] - Sequential account ID allocation
//! - [`io`] - JSON store and human-readable output
//! - [`logging`] - Tracing subscriber setup
//!
//! # Operations
//!
//! - **Create account**: Open an account with an optional initial deposit
//! - **Deposit**: Credit funds to an account
//! - **Withdraw**: Debit funds from an account (requires sufficient balance)
//! - **Transfer**: Move funds between two accounts, recorded on both sides
//! - **Delete account**: Remove an account; its ID is never reused
//! - **Queries**: Account details, list of all accounts, transaction history
//!
//! # Consistency
//!
//! Every mutating operation validates first and only then mutates, so a
//! rejected operation leaves the ledger untouched. After a successful
//! mutation the full ledger is written back to the store.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod logging;
pub mod types;

pub use crate::core::{
    AccountListing, Clock, FixedClock, Ledger, LedgerEngine, LedgerStore, SystemClock,
    TransactionHistory, TransferReceipt,
};
pub use io::{JsonFileStore, MemoryStore};
pub use types::{Account, AccountId, LedgerError, Transaction, TransactionType};
