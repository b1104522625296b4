//! In-memory ledger store
//!
//! Holds the ledger document as a string instead of a file. It goes through
//! the same encode/decode path as [`super::JsonFileStore`], counts saves and
//! can be told to fail them, which makes it the store of choice for engine
//! tests and scripted sessions.

use super::json_store::{decode_ledger, encode_ledger};
use crate::core::ledger::Ledger;
use crate::core::traits::LedgerStore;
use crate::types::LedgerError;

/// Ledger store that keeps the JSON document in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    document: String,
    saves: usize,
    fail_saves: bool,
}

impl MemoryStore {
    /// A store with no document, which loads as an empty ledger
    pub fn new() -> Self {
        MemoryStore::default()
    }

    /// A store preloaded with a JSON document
    pub fn with_document(document: &str) -> Self {
        MemoryStore {
            document: document.to_string(),
            ..MemoryStore::default()
        }
    }

    /// Number of successful saves
    pub fn save_count(&self) -> usize {
        self.saves
    }

    /// Document written by the last successful save
    pub fn last_saved(&self) -> Option<&str> {
        (self.saves > 0).then_some(self.document.as_str())
    }

    /// Make every following save fail with a storage error
    pub fn fail_saves(&mut self, fail: bool) {
        self.fail_saves = fail;
    }
}

impl LedgerStore for MemoryStore {
    fn load(&mut self) -> Result<Ledger, LedgerError> {
        decode_ledger(&self.document)
    }

    fn save(&mut self, ledger: &Ledger) -> Result<(), LedgerError> {
        if self.fail_saves {
            return Err(LedgerError::Storage {
                message: "simulated write failure".to_string(),
            });
        }
        self.document = encode_ledger(ledger)?;
        self.saves += 1;
        Ok(())
    }
}
