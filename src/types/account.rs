//! Account-related types for the Rust Ledger Manager
//!
//! This module defines the Account structure and related functionality
//! for managing a holder's balance and transaction history.

use super::transaction::{AccountId, Transaction, TransactionType};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A named balance-holder
///
/// Represents one bank account in the ledger, including its current
/// balance and the append-only history of transactions applied to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Sequential identifier, e.g. `ACC-1000`
    ///
    /// Immutable and never reused, even after the account is deleted.
    pub id: AccountId,

    /// Name of the account holder (non-empty, trimmed)
    pub holder_name: String,

    /// Current balance
    ///
    /// Never negative. Always equals the signed sum of `transactions`
    /// for accounts created through the ledger engine.
    #[serde(with = "super::amount")]
    pub balance: Decimal,

    /// When the account was opened
    #[serde(with = "super::timestamp")]
    pub created_at: DateTime<Utc>,

    /// Transaction history in chronological order
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl Account {
    /// Create a new account with zero balance and an empty history
    ///
    /// # Arguments
    ///
    /// * `id` - The allocated account ID
    /// * `holder_name` - Already validated holder name
    /// * `created_at` - Opening timestamp
    pub fn new(id: AccountId, holder_name: String, created_at: DateTime<Utc>) -> Self {
        Account {
            id,
            holder_name,
            balance: Decimal::ZERO,
            created_at,
            transactions: Vec::new(),
        }
    }

    /// Set the balance and append the transaction that produced it
    ///
    /// Callers are responsible for the balance rules; this only keeps
    /// `balance` and the `balance_after` checkpoint in step.
    pub(crate) fn record(
        &mut self,
        tx_type: TransactionType,
        amount: Decimal,
        new_balance: Decimal,
        description: String,
        timestamp: DateTime<Utc>,
    ) {
        self.balance = new_balance;
        self.transactions.push(Transaction {
            tx_type,
            amount,
            timestamp,
            balance_after: new_balance,
            description,
        });
    }

    /// Replay the history from a zero balance
    ///
    /// Used by tests and diagnostics to check that `balance` agrees with
    /// the recorded transactions.
    pub fn replayed_balance(&self) -> Decimal {
        self.transactions
            .iter()
            .map(Transaction::signed_amount)
            .sum()
    }
}
