//! Ledger state module
//!
//! This module provides the `Ledger` struct which holds every account in
//! creation order and performs the balance operations on them.
//!
//! The Ledger is responsible for:
//! - Allocating sequential, never-reused account IDs
//! - Looking accounts up by ID
//! - Applying credits and debits with checked arithmetic
//! - Appending the matching transaction record with its `balance_after` checkpoint
//!
//! Every balance operation checks all of its preconditions before touching
//! an account, so a failed operation leaves the ledger exactly as it was.
//! The ledger is also the persisted document: it serializes to
//! `{ "accounts": [...], "nextAccountNumber": n }`.

use crate::core::ids;
use crate::types::{Account, AccountId, LedgerError, TransactionType};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The full collection of accounts and their transactions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ledger {
    /// Accounts in creation order
    #[serde(default)]
    accounts: Vec<Account>,

    /// Smallest account number never allocated
    ///
    /// Zero when the document predates the field; the next number is then
    /// derived from the existing IDs alone.
    #[serde(default, skip_serializing_if = "is_unset")]
    next_account_number: u64,
}

fn is_unset(number: &u64) -> bool {
    *number == 0
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Ledger::default()
    }

    /// Build a ledger from already existing accounts
    pub fn from_accounts(accounts: Vec<Account>) -> Self {
        Ledger {
            accounts,
            next_account_number: 0,
        }
    }

    /// All accounts in creation order
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Look up an account by ID
    pub fn find(&self, id: &str) -> Option<&Account> {
        self.accounts.iter().find(|account| account.id == id)
    }

    /// Look up an account by ID, failing with `AccountNotFound`
    pub fn get(&self, id: &str) -> Result<&Account, LedgerError> {
        self.find(id).ok_or_else(|| LedgerError::account_not_found(id))
    }

    fn position(&self, id: &str) -> Result<usize, LedgerError> {
        self.accounts
            .iter()
            .position(|account| account.id == id)
            .ok_or_else(|| LedgerError::account_not_found(id))
    }

    /// Sum of every account balance
    pub fn total_balance(&self) -> Decimal {
        self.accounts.iter().map(|account| account.balance).sum()
    }

    /// Allocate the next account ID and advance the high-water mark
    ///
    /// The returned ID is strictly greater than every ID this ledger has
    /// ever handed out, including those of deleted accounts.
    pub fn allocate_account_id(&mut self) -> AccountId {
        let number = ids::next_account_number(&self.accounts, self.next_account_number);
        self.next_account_number = number.saturating_add(1);
        ids::format_account_id(number)
    }

    /// Append a newly created account
    pub fn insert(&mut self, account: Account) {
        self.accounts.push(account);
    }

    /// Remove an account, preserving the order of the remaining ones
    ///
    /// The high-water mark is pinned before removal so that the removed ID,
    /// even when it was the highest one, is never allocated again.
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` if no account has the given ID.
    pub fn remove(&mut self, id: &str) -> Result<Account, LedgerError> {
        let index = self.position(id)?;
        self.next_account_number =
            ids::next_account_number(&self.accounts, self.next_account_number);
        Ok(self.accounts.remove(index))
    }

    /// Credit funds to an account
    ///
    /// Increases the balance by `amount` and appends a transaction of the
    /// given type. Uses checked arithmetic to prevent overflow and maintain
    /// account integrity.
    ///
    /// # Arguments
    ///
    /// * `id` - The account to credit
    /// * `amount` - The amount to credit (must be positive)
    /// * `tx_type` - `Deposit` or `TransferIn`
    /// * `description` - Note stored on the transaction
    /// * `timestamp` - When the credit is applied
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The account does not exist
    /// - Adding the amount to the balance would cause overflow
    pub fn credit(
        &mut self,
        id: &str,
        amount: Decimal,
        tx_type: TransactionType,
        description: String,
        timestamp: DateTime<Utc>,
    ) -> Result<&Account, LedgerError> {
        let index = self.position(id)?;
        let new_balance = self.accounts[index]
            .balance
            .checked_add(amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow("credit", id))?;

        self.apply(index, tx_type, amount, new_balance, description, timestamp);
        Ok(&self.accounts[index])
    }

    /// Debit funds from an account
    ///
    /// Decreases the balance by `amount` and appends a transaction of the
    /// given type. Validates that the balance covers the amount before
    /// processing.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The account does not exist
    /// - The amount exceeds the balance
    pub fn debit(
        &mut self,
        id: &str,
        amount: Decimal,
        tx_type: TransactionType,
        description: String,
        timestamp: DateTime<Utc>,
    ) -> Result<&Account, LedgerError> {
        let index = self.position(id)?;
        let new_balance = Self::checked_debit(&self.accounts[index], amount)?;

        self.apply(index, tx_type, amount, new_balance, description, timestamp);
        Ok(&self.accounts[index])
    }

    /// Move funds between two accounts
    ///
    /// Both new balances are computed before either account is touched, so
    /// the transfer is applied completely or not at all.
    ///
    /// Checks run in this order:
    /// 1. Source exists
    /// 2. Source balance covers the amount
    /// 3. Destination exists
    /// 4. Destination differs from the source
    /// 5. Destination balance does not overflow
    ///
    /// # Returns
    ///
    /// The indices of the source and destination accounts.
    pub fn transfer(
        &mut self,
        from: &str,
        to: &str,
        amount: Decimal,
        timestamp: DateTime<Utc>,
    ) -> Result<(usize, usize), LedgerError> {
        let source = self.position(from)?;
        let new_source_balance = Self::checked_debit(&self.accounts[source], amount)?;

        let destination = self.position(to)?;
        if source == destination {
            return Err(LedgerError::invalid_input(
                "Cannot transfer to the same account.",
            ));
        }
        let new_destination_balance = self.accounts[destination]
            .balance
            .checked_add(amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow("transfer", to))?;

        self.apply(
            source,
            TransactionType::TransferOut,
            amount,
            new_source_balance,
            format!("To {}", to),
            timestamp,
        );
        self.apply(
            destination,
            TransactionType::TransferIn,
            amount,
            new_destination_balance,
            format!("From {}", from),
            timestamp,
        );

        Ok((source, destination))
    }

    /// Account at a position returned by [`Ledger::transfer`]
    pub(crate) fn account_at(&self, index: usize) -> &Account {
        &self.accounts[index]
    }

    fn checked_debit(account: &Account, amount: Decimal) -> Result<Decimal, LedgerError> {
        if account.balance < amount {
            return Err(LedgerError::insufficient_funds(
                &account.id,
                account.balance,
                amount,
            ));
        }
        // Cannot underflow once the balance covers the amount
        Ok(account.balance - amount)
    }

    fn apply(
        &mut self,
        index: usize,
        tx_type: TransactionType,
        amount: Decimal,
        new_balance: Decimal,
        description: String,
        timestamp: DateTime<Utc>,
    ) {
        self.accounts[index].record(tx_type, amount, new_balance, description, timestamp);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
    }

    fn account(id: &str, balance: i64) -> Account {
        let mut account = Account::new(id.to_string(), "Holder".to_string(), now());
        account.balance = Decimal::new(balance, 0);
        account
    }

    fn ledger(accounts: &[(&str, i64)]) -> Ledger {
        Ledger::from_accounts(
            accounts
                .iter()
                .map(|(id, balance)| account(id, *balance))
                .collect(),
        )
    }

    #[test]
    fn test_new_creates_empty_ledger() {
        let ledger = Ledger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.len(), 0);
        assert_eq!(ledger.total_balance(), Decimal::ZERO);
    }

    #[test]
    fn test_get_returns_account_not_found() {
        let ledger = ledger(&[("ACC-1000", 0)]);
        assert!(ledger.get("ACC-1000").is_ok());
        assert_eq!(
            ledger.get("ACC-9999"),
            Err(LedgerError::account_not_found("ACC-9999"))
        );
    }

    #[test]
    fn test_allocate_account_id_is_sequential() {
        let mut ledger = Ledger::new();
        assert_eq!(ledger.allocate_account_id(), "ACC-1000");
        assert_eq!(ledger.allocate_account_id(), "ACC-1001");
    }

    #[test]
    fn test_allocate_account_id_never_reuses_deleted_id() {
        let mut ledger = Ledger::new();
        let id = ledger.allocate_account_id();
        ledger.insert(Account::new(id.clone(), "Alice".to_string(), now()));
        ledger.remove(&id).unwrap();

        let next = ledger.allocate_account_id();
        assert_ne!(next, id);
        assert_eq!(next, "ACC-1001");
    }

    #[test]
    fn test_deleting_highest_loaded_account_does_not_free_its_id() {
        let mut ledger: Ledger = serde_json::from_str(
            r#"{"accounts": [{"id": "ACC-1000", "holderName": "Alice", "balance": 0,
                "createdAt": "2025-01-01T00:00:00.000Z"}]}"#,
        )
        .unwrap();

        ledger.remove("ACC-1000").unwrap();

        assert_eq!(ledger.allocate_account_id(), "ACC-1001");
    }

    #[test]
    fn test_high_water_mark_survives_serialization() {
        let mut ledger = Ledger::new();
        let id = ledger.allocate_account_id();
        ledger.insert(Account::new(id.clone(), "Alice".to_string(), now()));
        ledger.remove(&id).unwrap();

        let json = serde_json::to_string(&ledger).unwrap();
        let mut reloaded: Ledger = serde_json::from_str(&json).unwrap();

        assert_eq!(reloaded.allocate_account_id(), "ACC-1001");
    }

    #[test]
    fn test_empty_document_is_empty_ledger() {
        let ledger: Ledger = serde_json::from_str("{}").unwrap();
        assert!(ledger.is_empty());

        let json = serde_json::to_string(&ledger).unwrap();
        assert_eq!(json, r#"{"accounts":[]}"#);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut ledger = ledger(&[("ACC-1000", 0), ("ACC-1001", 0), ("ACC-1002", 0)]);

        let removed = ledger.remove("ACC-1001").unwrap();

        assert_eq!(removed.id, "ACC-1001");
        let ids: Vec<&str> = ledger.accounts().iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["ACC-1000", "ACC-1002"]);
    }

    #[test]
    fn test_remove_missing_account() {
        let mut ledger = ledger(&[("ACC-1000", 0)]);
        assert!(matches!(
            ledger.remove("ACC-9999"),
            Err(LedgerError::AccountNotFound { .. })
        ));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_credit_increases_balance_and_records_checkpoint() {
        let mut ledger = ledger(&[("ACC-1000", 100)]);

        let account = ledger
            .credit(
                "ACC-1000",
                Decimal::new(50, 0),
                TransactionType::Deposit,
                "Deposit".to_string(),
                now(),
            )
            .unwrap();

        assert_eq!(account.balance, Decimal::new(150, 0));
        assert_eq!(account.transactions.len(), 1);
        assert_eq!(account.transactions[0].balance_after, Decimal::new(150, 0));
        assert_eq!(account.transactions[0].tx_type, TransactionType::Deposit);
    }

    #[test]
    fn test_credit_overflow_leaves_account_unchanged() {
        let mut ledger = Ledger::from_accounts(vec![{
            let mut account = account("ACC-1000", 0);
            account.balance = Decimal::MAX;
            account
        }]);

        let result = ledger.credit(
            "ACC-1000",
            Decimal::ONE,
            TransactionType::Deposit,
            "Deposit".to_string(),
            now(),
        );

        assert!(matches!(result, Err(LedgerError::ArithmeticOverflow { .. })));
        let account = ledger.get("ACC-1000").unwrap();
        assert_eq!(account.balance, Decimal::MAX);
        assert!(account.transactions.is_empty());
    }

    #[test]
    fn test_debit_decreases_balance() {
        let mut ledger = ledger(&[("ACC-1000", 100)]);

        let account = ledger
            .debit(
                "ACC-1000",
                Decimal::new(40, 0),
                TransactionType::Withdrawal,
                "Withdrawal".to_string(),
                now(),
            )
            .unwrap();

        assert_eq!(account.balance, Decimal::new(60, 0));
        assert_eq!(account.transactions[0].balance_after, Decimal::new(60, 0));
    }

    #[test]
    fn test_debit_entire_balance() {
        let mut ledger = ledger(&[("ACC-1000", 100)]);

        let account = ledger
            .debit(
                "ACC-1000",
                Decimal::new(100, 0),
                TransactionType::Withdrawal,
                "Withdrawal".to_string(),
                now(),
            )
            .unwrap();

        assert_eq!(account.balance, Decimal::ZERO);
    }

    #[test]
    fn test_debit_with_insufficient_funds() {
        let mut ledger = ledger(&[("ACC-1000", 100)]);
        let before = ledger.clone();

        let result = ledger.debit(
            "ACC-1000",
            Decimal::new(150, 0),
            TransactionType::Withdrawal,
            "Withdrawal".to_string(),
            now(),
        );

        assert_eq!(
            result.unwrap_err(),
            LedgerError::insufficient_funds("ACC-1000", Decimal::new(100, 0), Decimal::new(150, 0))
        );
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_transfer_moves_funds_and_pairs_records() {
        let mut ledger = ledger(&[("ACC-1000", 200), ("ACC-2000", 50)]);

        ledger
            .transfer("ACC-1000", "ACC-2000", Decimal::new(50, 0), now())
            .unwrap();

        let source = ledger.get("ACC-1000").unwrap();
        assert_eq!(source.balance, Decimal::new(150, 0));
        assert_eq!(source.transactions[0].tx_type, TransactionType::TransferOut);
        assert_eq!(source.transactions[0].description, "To ACC-2000");
        assert_eq!(source.transactions[0].balance_after, Decimal::new(150, 0));

        let destination = ledger.get("ACC-2000").unwrap();
        assert_eq!(destination.balance, Decimal::new(100, 0));
        assert_eq!(destination.transactions[0].tx_type, TransactionType::TransferIn);
        assert_eq!(destination.transactions[0].description, "From ACC-1000");
        assert_eq!(destination.transactions[0].balance_after, Decimal::new(100, 0));
    }

    #[test]
    fn test_transfer_failures_leave_ledger_unchanged() {
        let mut ledger = ledger(&[("ACC-1000", 100), ("ACC-2000", 50)]);
        let before = ledger.clone();

        let cases = [
            ("ACC-9999", "ACC-2000", 10),
            ("ACC-1000", "ACC-2000", 150),
            ("ACC-1000", "ACC-9999", 10),
            ("ACC-1000", "ACC-1000", 10),
        ];
        for (from, to, amount) in cases {
            assert!(ledger
                .transfer(from, to, Decimal::new(amount, 0), now())
                .is_err());
            assert_eq!(ledger, before);
        }
    }

    #[test]
    fn test_transfer_checks_funds_before_destination() {
        let mut ledger = ledger(&[("ACC-1000", 100)]);

        let result = ledger.transfer("ACC-1000", "ACC-9999", Decimal::new(150, 0), now());

        assert!(matches!(result, Err(LedgerError::InsufficientFunds { .. })));
    }

    #[test]
    fn test_total_balance() {
        let ledger = ledger(&[("ACC-1000", 100), ("ACC-1001", 25)]);
        assert_eq!(ledger.total_balance(), Decimal::new(125, 0));
    }
}
