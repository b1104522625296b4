//! Error types for the Rust Ledger Manager
//!
//! This module defines all error types that can occur while operating on the ledger.
//! Errors are designed to be descriptive and user-friendly for CLI output.
//!
//! # Error Categories
//!
//! - **Input Errors**: Malformed names or amounts, negative amounts
//! - **Ledger Errors**: Unknown accounts, insufficient funds
//! - **Arithmetic Errors**: Overflow in balance calculations
//! - **Persistence Errors**: File I/O failures, malformed JSON store (fatal)

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the ledger engine
///
/// This enum represents all possible errors that can occur during
/// ledger operations. Each variant includes relevant context
/// to help diagnose and resolve the issue.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// Malformed holder name or amount
    ///
    /// This is a recoverable error - the operation is rejected
    /// and the ledger remains unchanged.
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Description of what was wrong with the input
        message: String,
    },

    /// Amount parsed successfully but is below zero
    ///
    /// This is a recoverable error - the operation is rejected.
    #[error("Amount cannot be negative: {amount}")]
    NegativeAmount {
        /// The rejected amount
        amount: Decimal,
    },

    /// No account with the given ID exists in the ledger
    ///
    /// This is a recoverable error - the operation is rejected.
    #[error("Account {id} not found")]
    AccountNotFound {
        /// The ID that was looked up
        id: String,
    },

    /// Withdrawal or transfer exceeds the account balance
    ///
    /// This is a recoverable error - the operation is rejected
    /// and the account state remains unchanged.
    #[error("Insufficient funds in account {id}: balance {balance}, requested {requested}")]
    InsufficientFunds {
        /// Account ID
        id: String,
        /// Current balance
        balance: Decimal,
        /// Requested amount
        requested: Decimal,
    },

    /// Arithmetic overflow would occur
    ///
    /// This is a recoverable error - the operation is rejected
    /// to maintain account integrity.
    #[error("Arithmetic overflow in {operation} for account {id}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Account ID
        id: String,
    },

    /// The ledger store could not be read or written
    ///
    /// This is a fatal error.
    #[error("Storage error: {message}")]
    Storage {
        /// Description of the I/O error
        message: String,
    },

    /// The ledger document could not be encoded or decoded
    ///
    /// This is a fatal error (typically a hand-edited, malformed store file).
    #[error("Serialization error: {message}")]
    Serialization {
        /// Description of the serde error
        message: String,
    },
}

// Conversion from io::Error to LedgerError
impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::Storage {
            message: error.to_string(),
        }
    }
}

// Conversion from serde_json::Error to LedgerError
impl From<serde_json::Error> for LedgerError {
    fn from(error: serde_json::Error) -> Self {
        LedgerError::Serialization {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl LedgerError {
    /// Create an InvalidInput error
    pub fn invalid_input(message: &str) -> Self {
        LedgerError::InvalidInput {
            message: message.to_string(),
        }
    }

    /// Create a NegativeAmount error
    pub fn negative_amount(amount: Decimal) -> Self {
        LedgerError::NegativeAmount { amount }
    }

    /// Create an AccountNotFound error
    pub fn account_not_found(id: &str) -> Self {
        LedgerError::AccountNotFound { id: id.to_string() }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(id: &str, balance: Decimal, requested: Decimal) -> Self {
        LedgerError::InsufficientFunds {
            id: id.to_string(),
            balance,
            requested,
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, id: &str) -> Self {
        LedgerError::ArithmeticOverflow {
            operation: operation.to_string(),
            id: id.to_string(),
        }
    }

    /// Whether the caller can report this error and carry on
    ///
    /// Input, lookup and balance errors leave the ledger untouched, so the
    /// CLI reports them and re-prompts. Storage and serialization errors
    /// mean the on-disk state can no longer be trusted and must stop the
    /// process.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            LedgerError::Storage { .. } | LedgerError::Serialization { .. }
        )
    }

    /// Short message shown to the operator at the prompt
    pub fn operator_message(&self) -> String {
        match self {
            LedgerError::InvalidInput { message } => message.clone(),
            LedgerError::NegativeAmount { .. } => "Amount cannot be negative.".to_string(),
            LedgerError::AccountNotFound { .. } => "Account not found.".to_string(),
            LedgerError::InsufficientFunds { .. } => "Insufficient funds.".to_string(),
            other => other.to_string(),
        }
    }
}
