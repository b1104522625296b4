//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account-related types
//! - `transaction`: Transaction-related types and identifiers
//! - `amount`: Serde helpers for exact monetary amounts
//! - `timestamp`: Serde helpers for the persisted timestamp format
//! - `error`: Error types for the ledger engine

pub mod account;
pub mod amount;
pub mod error;
pub mod timestamp;
pub mod transaction;

pub use account::Account;
pub use error::LedgerError;
pub use transaction::{AccountId, Transaction, TransactionType};
