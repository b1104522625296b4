//! Core traits for ledger persistence and time
//!
//! This module defines the seams that let the ledger engine run against the
//! JSON file store in production and against in-memory stores and frozen
//! clocks in tests.

use crate::core::ledger::Ledger;
use crate::types::LedgerError;
use chrono::{DateTime, Utc};

/// Trait for loading and saving the whole ledger
///
/// Persistence is a whole-document snapshot: `save` always receives the
/// complete ledger and replaces whatever was stored before. There is no
/// incremental patching.
pub trait LedgerStore {
    /// Load the full ledger state
    ///
    /// A store with no document yet yields an empty ledger.
    fn load(&mut self) -> Result<Ledger, LedgerError>;

    /// Persist the full ledger state, replacing the previous document
    fn save(&mut self, ledger: &Ledger) -> Result<(), LedgerError>;
}

/// Trait for the source of account and transaction timestamps
pub trait Clock {
    /// Current instant
    fn now(&self) -> DateTime<Utc>;
}
