//! Core business logic module
//!
//! This module contains the ledger components:
//! - `traits` - Seams for persistence and time
//! - `validation` - Pure checks on raw operator input
//! - `ids` - Sequential account ID allocation
//! - `clock` - System and fixed clocks
//! - `ledger` - In-memory ledger state and balance operations
//! - `engine` - One operation per business action, persisting after each mutation

pub mod clock;
pub mod engine;
pub mod ids;
pub mod ledger;
pub mod traits;
pub mod validation;

pub use clock::{FixedClock, SystemClock};
pub use engine::{AccountListing, LedgerEngine, TransactionHistory, TransferReceipt};
pub use ledger::Ledger;
pub use traits::{Clock, LedgerStore};
