//! JSON file store
//!
//! Persists the whole ledger as one JSON document. The file is read in full
//! when the ledger is loaded and overwritten in full after every mutating
//! operation (last writer wins).

use crate::core::ledger::Ledger;
use crate::core::traits::LedgerStore;
use crate::types::LedgerError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Ledger store backed by a JSON file on disk
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store for the file at `path`
    ///
    /// Nothing is read or written until [`LedgerStore::load`] is called.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Decode a ledger document
///
/// A blank document is an empty ledger. A document without an `accounts`
/// key is a ledger with zero accounts.
///
/// # Errors
///
/// Returns `Serialization` if the text is not a valid ledger document.
pub fn decode_ledger(document: &str) -> Result<Ledger, LedgerError> {
    if document.trim().is_empty() {
        return Ok(Ledger::new());
    }
    Ok(serde_json::from_str(document)?)
}

/// Encode the full ledger as a pretty-printed JSON document
pub fn encode_ledger(ledger: &Ledger) -> Result<String, LedgerError> {
    Ok(serde_json::to_string_pretty(ledger)?)
}

impl LedgerStore for JsonFileStore {
    /// Load the ledger from disk
    ///
    /// A missing file is created holding an empty ledger, so the store file
    /// exists from the first run on.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file exists but cannot be read (`Storage`)
    /// - The file holds malformed JSON (`Serialization`)
    /// - A missing file cannot be created (`Storage`)
    fn load(&mut self) -> Result<Ledger, LedgerError> {
        if !self.path.exists() {
            info!(path = %self.path.display(), "ledger file not found, creating an empty one");
            let ledger = Ledger::new();
            self.save(&ledger)?;
            return Ok(ledger);
        }

        let document = fs::read_to_string(&self.path).map_err(|e| LedgerError::Storage {
            message: format!("Failed to read {}: {}", self.path.display(), e),
        })?;
        let ledger = decode_ledger(&document)?;
        debug!(path = %self.path.display(), accounts = ledger.len(), "ledger file read");
        Ok(ledger)
    }

    fn save(&mut self, ledger: &Ledger) -> Result<(), LedgerError> {
        let document = encode_ledger(ledger)?;
        fs::write(&self.path, document).map_err(|e| LedgerError::Storage {
            message: format!("Failed to write {}: {}", self.path.display(), e),
        })?;
        debug!(path = %self.path.display(), accounts = ledger.len(), "ledger file written");
        Ok(())
    }
}
