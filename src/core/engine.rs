//! Ledger engine
//!
//! This module provides the LedgerEngine that carries out every business
//! action by coordinating input validation, the in-memory `Ledger`, the
//! clock and the store.
//!
//! Each mutating operation follows the same shape:
//! 1. Validate the raw input and the business rules (existence, funds)
//! 2. Mutate the in-memory ledger
//! 3. Persist the full ledger once
//! 4. Return the updated data
//!
//! A failure in step 1 returns before anything is touched, so the ledger is
//! never partially updated. A failure in step 3 is returned to the caller
//! but the in-memory mutation is kept: there is no automatic rollback.

use crate::core::clock::SystemClock;
use crate::core::ledger::Ledger;
use crate::core::traits::{Clock, LedgerStore};
use crate::core::validation::{
    require_positive, validate_amount, validate_name, MissingAmount,
};
use crate::types::{Account, LedgerError, Transaction, TransactionType};
use rust_decimal::Decimal;
use tracing::{debug, error, info};

/// Result of listing every account
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AccountListing<'a> {
    /// The ledger holds no accounts
    Empty,
    /// Accounts in creation order (never empty)
    Accounts(&'a [Account]),
}

/// Result of looking at one account's history
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransactionHistory<'a> {
    /// The account exists but has no transactions yet
    Empty,
    /// Transactions in chronological order (never empty)
    Entries(&'a [Transaction]),
}

/// Both sides of a completed transfer
#[derive(Debug, Clone, PartialEq)]
pub struct TransferReceipt {
    /// Source account after the debit
    pub source: Account,
    /// Destination account after the credit
    pub destination: Account,
    /// Amount moved
    pub amount: Decimal,
}

/// Ledger engine
///
/// Owns the ledger state, the store it is persisted to and the clock used
/// for timestamps. There is no process-wide state: independent engines can
/// coexist, each over its own store.
pub struct LedgerEngine<S: LedgerStore, C: Clock = SystemClock> {
    ledger: Ledger,
    store: S,
    clock: C,
}

impl<S: LedgerStore> LedgerEngine<S, SystemClock> {
    /// Load the ledger from `store` and stamp records with wall-clock time
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or decoded.
    pub fn open(store: S) -> Result<Self, LedgerError> {
        Self::open_with_clock(store, SystemClock)
    }
}

impl<S: LedgerStore, C: Clock> LedgerEngine<S, C> {
    /// Load the ledger from `store` using a specific clock
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or decoded.
    pub fn open_with_clock(mut store: S, clock: C) -> Result<Self, LedgerError> {
        let ledger = store.load()?;
        debug!(accounts = ledger.len(), "ledger loaded");
        Ok(LedgerEngine {
            ledger,
            store,
            clock,
        })
    }

    /// Current in-memory ledger
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// The store the ledger is persisted to
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mutable access to the store, e.g. to inject failures in tests
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Create a new account
    ///
    /// # Arguments
    ///
    /// * `name` - Raw holder name
    /// * `initial_deposit` - Raw initial deposit, `None` meaning zero
    ///
    /// # Returns
    ///
    /// The created account. A positive initial deposit is recorded as a
    /// single `DEPOSIT` transaction described as `"Initial deposit"`; a zero
    /// deposit records nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The name is blank (`InvalidInput`)
    /// - The deposit is malformed (`InvalidInput`) or negative (`NegativeAmount`)
    /// - The ledger cannot be persisted
    pub fn create_account(
        &mut self,
        name: &str,
        initial_deposit: Option<&str>,
    ) -> Result<Account, LedgerError> {
        let validated = validate_name(name)
            .and_then(|name| {
                validate_amount(initial_deposit, MissingAmount::DefaultToZero)
                    .map(|amount| (name, amount))
            })
            .inspect_err(|e| debug!(error = %e, "create account rejected"))?;
        let (holder_name, initial) = validated;

        let now = self.clock.now();
        let id = self.ledger.allocate_account_id();
        let mut account = Account::new(id.clone(), holder_name, now);
        if initial > Decimal::ZERO {
            account.record(
                TransactionType::Deposit,
                initial,
                initial,
                "Initial deposit".to_string(),
                now,
            );
        }
        self.ledger.insert(account.clone());

        info!(account = %id, initial_deposit = %initial, "account created");
        self.persist()?;
        Ok(account)
    }

    /// Deposit funds into an existing account
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The account does not exist (`AccountNotFound`, checked first)
    /// - The amount is missing, malformed or zero (`InvalidInput`)
    /// - The amount is negative (`NegativeAmount`)
    /// - The ledger cannot be persisted
    pub fn deposit_funds(&mut self, account_id: &str, amount: &str) -> Result<Account, LedgerError> {
        let account_id = account_id.trim();
        let amount = self
            .ledger
            .get(account_id)
            .and_then(|_| Self::positive_amount(amount))
            .inspect_err(|e| debug!(account = %account_id, error = %e, "deposit rejected"))?;

        let account = self
            .ledger
            .credit(
                account_id,
                amount,
                TransactionType::Deposit,
                "Deposit".to_string(),
                self.clock.now(),
            )?
            .clone();

        info!(account = %account_id, amount = %amount, balance = %account.balance, "deposit applied");
        self.persist()?;
        Ok(account)
    }

    /// Withdraw funds from an existing account
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The account does not exist (`AccountNotFound`, checked first)
    /// - The amount is missing, malformed or zero (`InvalidInput`)
    /// - The amount is negative (`NegativeAmount`)
    /// - The amount exceeds the balance (`InsufficientFunds`)
    /// - The ledger cannot be persisted
    pub fn withdraw_funds(&mut self, account_id: &str, amount: &str) -> Result<Account, LedgerError> {
        let account_id = account_id.trim();
        let amount = self
            .ledger
            .get(account_id)
            .and_then(|_| Self::positive_amount(amount))
            .inspect_err(|e| debug!(account = %account_id, error = %e, "withdrawal rejected"))?;

        let now = self.clock.now();
        let account = self
            .ledger
            .debit(
                account_id,
                amount,
                TransactionType::Withdrawal,
                "Withdrawal".to_string(),
                now,
            )
            .inspect_err(|e| debug!(account = %account_id, error = %e, "withdrawal rejected"))?
            .clone();

        info!(account = %account_id, amount = %amount, balance = %account.balance, "withdrawal applied");
        self.persist()?;
        Ok(account)
    }

    /// Transfer funds between two existing accounts
    ///
    /// Checks run in this order: source exists, amount is valid, source
    /// balance covers the amount, destination exists, destination differs
    /// from source. The source is never debited unless every check passes.
    /// The ledger is persisted once for both sides.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Either account does not exist (`AccountNotFound`)
    /// - The amount is missing, malformed or zero (`InvalidInput`)
    /// - The amount is negative (`NegativeAmount`)
    /// - The amount exceeds the source balance (`InsufficientFunds`)
    /// - Source and destination are the same account (`InvalidInput`)
    /// - The ledger cannot be persisted
    pub fn transfer_funds(
        &mut self,
        from_id: &str,
        to_id: &str,
        amount: &str,
    ) -> Result<TransferReceipt, LedgerError> {
        let (from_id, to_id) = (from_id.trim(), to_id.trim());
        let amount = self
            .ledger
            .get(from_id)
            .and_then(|_| Self::positive_amount(amount))
            .inspect_err(|e| debug!(from = %from_id, to = %to_id, error = %e, "transfer rejected"))?;

        let now = self.clock.now();
        let (source, destination) = self
            .ledger
            .transfer(from_id, to_id, amount, now)
            .inspect_err(|e| debug!(from = %from_id, to = %to_id, error = %e, "transfer rejected"))?;

        let receipt = TransferReceipt {
            source: self.ledger.account_at(source).clone(),
            destination: self.ledger.account_at(destination).clone(),
            amount,
        };

        info!(from = %from_id, to = %to_id, amount = %amount, "transfer applied");
        self.persist()?;
        Ok(receipt)
    }

    /// Delete an account
    ///
    /// The remaining accounts keep their order. The deleted ID is never
    /// handed out again.
    ///
    /// # Returns
    ///
    /// The removed account.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The account does not exist (`AccountNotFound`)
    /// - The ledger cannot be persisted
    pub fn delete_account(&mut self, account_id: &str) -> Result<Account, LedgerError> {
        let account_id = account_id.trim();
        let removed = self
            .ledger
            .remove(account_id)
            .inspect_err(|e| debug!(account = %account_id, error = %e, "delete rejected"))?;

        info!(account = %account_id, balance = %removed.balance, "account deleted");
        self.persist()?;
        Ok(removed)
    }

    /// Look up a single account
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` if no account has the given ID.
    pub fn view_account_details(&self, account_id: &str) -> Result<&Account, LedgerError> {
        self.ledger.get(account_id.trim())
    }

    /// List every account in creation order
    pub fn list_all_accounts(&self) -> AccountListing<'_> {
        if self.ledger.is_empty() {
            AccountListing::Empty
        } else {
            AccountListing::Accounts(self.ledger.accounts())
        }
    }

    /// Transaction history of one account
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` if no account has the given ID. An existing
    /// account without transactions yields `TransactionHistory::Empty`.
    pub fn view_transaction_history(
        &self,
        account_id: &str,
    ) -> Result<TransactionHistory<'_>, LedgerError> {
        let account = self.ledger.get(account_id.trim())?;
        if account.transactions.is_empty() {
            Ok(TransactionHistory::Empty)
        } else {
            Ok(TransactionHistory::Entries(&account.transactions))
        }
    }

    /// Sum of every account balance
    pub fn total_balance(&self) -> Decimal {
        self.ledger.total_balance()
    }

    fn positive_amount(input: &str) -> Result<Decimal, LedgerError> {
        validate_amount(Some(input), MissingAmount::Reject).and_then(require_positive)
    }

    fn persist(&mut self) -> Result<(), LedgerError> {
        self.store
            .save(&self.ledger)
            .inspect_err(|e| error!(error = %e, "failed to persist ledger"))?;
        debug!(accounts = self.ledger.len(), "ledger saved");
        Ok(())
    }
}
