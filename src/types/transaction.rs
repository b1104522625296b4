//! Transaction-related types for the Rust Ledger Manager
//!
//! This module defines transaction types and the immutable transaction
//! records appended to an account's history.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Account identifier
///
/// Always of the form `ACC-<number>`, see [`crate::core::ids`].
pub type AccountId = String;

/// Transaction types recorded in an account history
///
/// Deposits and incoming transfers increase the balance, withdrawals and
/// outgoing transfers decrease it. The two transfer variants are always
/// recorded as a pair, one on each side of the transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    /// Credit funds to an account
    Deposit,

    /// Debit funds from an account
    ///
    /// Requires a balance at least as large as the amount.
    Withdrawal,

    /// Credit side of a transfer between two accounts
    TransferIn,

    /// Debit side of a transfer between two accounts
    TransferOut,
}

impl TransactionType {
    /// Whether this transaction type adds to the balance
    pub fn is_credit(self) -> bool {
        matches!(self, TransactionType::Deposit | TransactionType::TransferIn)
    }

    /// Label used in the persisted document and in history tables
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionType::Deposit => "DEPOSIT",
            TransactionType::Withdrawal => "WITHDRAWAL",
            TransactionType::TransferIn => "TRANSFER_IN",
            TransactionType::TransferOut => "TRANSFER_OUT",
        }
    }
}

/// A single balance-changing event
///
/// Transactions are immutable once appended. `balance_after` is a checkpoint
/// taken when the transaction was applied and is never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// The kind of movement
    #[serde(rename = "type")]
    pub tx_type: TransactionType,

    /// Magnitude of the movement, always positive
    #[serde(with = "super::amount")]
    pub amount: Decimal,

    /// When the transaction was applied
    #[serde(with = "super::timestamp")]
    pub timestamp: DateTime<Utc>,

    /// Account balance immediately after this transaction
    #[serde(with = "super::amount")]
    pub balance_after: Decimal,

    /// Short human-readable note, e.g. `"To ACC-1001"`
    #[serde(default)]
    pub description: String,
}

impl Transaction {
    /// Signed effect of this transaction on the balance
    pub fn signed_amount(&self) -> Decimal {
        if self.tx_type.is_credit() {
            self.amount
        } else {
            -self.amount
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    fn sample(tx_type: TransactionType, amount: Decimal) -> Transaction {
        Transaction {
            tx_type,
            amount,
            timestamp: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
            balance_after: amount,
            description: String::new(),
        }
    }

    #[rstest]
    #[case::deposit(TransactionType::Deposit, Decimal::new(50, 0))]
    #[case::transfer_in(TransactionType::TransferIn, Decimal::new(50, 0))]
    #[case::withdrawal(TransactionType::Withdrawal, Decimal::new(-50, 0))]
    #[case::transfer_out(TransactionType::TransferOut, Decimal::new(-50, 0))]
    fn test_signed_amount(#[case] tx_type: TransactionType, #[case] expected: Decimal) {
        assert_eq!(sample(tx_type, Decimal::new(50, 0)).signed_amount(), expected);
    }

    #[rstest]
    #[case::deposit(TransactionType::Deposit, "\"DEPOSIT\"")]
    #[case::withdrawal(TransactionType::Withdrawal, "\"WITHDRAWAL\"")]
    #[case::transfer_in(TransactionType::TransferIn, "\"TRANSFER_IN\"")]
    #[case::transfer_out(TransactionType::TransferOut, "\"TRANSFER_OUT\"")]
    fn test_transaction_type_serialization(#[case] tx_type: TransactionType, #[case] json: &str) {
        assert_eq!(serde_json::to_string(&tx_type).unwrap(), json);
        assert_eq!(format!("\"{}\"", tx_type.as_str()), json);
    }

    #[test]
    fn test_transaction_serializes_with_camel_case_keys() {
        let mut tx = sample(TransactionType::Deposit, Decimal::new(100, 0));
        tx.description = "Initial deposit".to_string();

        let value = serde_json::to_value(&tx).unwrap();

        assert_eq!(value["type"], "DEPOSIT");
        assert_eq!(value["amount"].to_string(), "100");
        assert_eq!(value["balanceAfter"].to_string(), "100");
        assert_eq!(value["timestamp"], "2025-01-01T00:00:00.000Z");
        assert_eq!(value["description"], "Initial deposit");
    }

    #[test]
    fn test_transaction_without_description_deserializes() {
        let json = r#"{
            "type": "WITHDRAWAL",
            "amount": 20,
            "timestamp": "2025-01-01T00:00:00.000Z",
            "balanceAfter": 80
        }"#;

        let tx: Transaction = serde_json::from_str(json).unwrap();

        assert_eq!(tx.tx_type, TransactionType::Withdrawal);
        assert_eq!(tx.amount, Decimal::new(20, 0));
        assert_eq!(tx.balance_after, Decimal::new(80, 0));
        assert!(tx.description.is_empty());
    }
}
