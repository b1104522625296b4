//! Human-readable output for accounts and transactions
//!
//! All writers take `&mut dyn Write` so they can target stdout in the CLI
//! and a `Vec<u8>` in tests. The ledger engine hands over data only; every
//! display string is produced here.

use crate::core::engine::{AccountListing, TransactionHistory};
use crate::types::Account;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::io::{self, Write};

/// Shown when the ledger has no accounts
pub const NO_ACCOUNTS: &str = "No accounts found.";

/// Shown when an existing account has no transactions
pub const NO_TRANSACTIONS: &str = "No transactions found.";

/// Format an amount as currency with two decimals, e.g. `$100.00`
pub fn format_currency(amount: Decimal) -> String {
    format!("${:.2}", amount)
}

/// Calendar date of a timestamp, e.g. `2025-01-01`
pub fn format_date(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d").to_string()
}

fn format_date_time(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Write the details block of one account
pub fn write_account_details(account: &Account, output: &mut dyn Write) -> io::Result<()> {
    writeln!(output, "Account: {}", account.id)?;
    writeln!(output, "Holder: {}", account.holder_name)?;
    writeln!(output, "Balance: {}", format_currency(account.balance))?;
    writeln!(output, "Opened: {}", format_date(&account.created_at))?;
    writeln!(output, "Transactions: {}", account.transactions.len())?;
    Ok(())
}

/// Write every account as a table followed by totals
///
/// An empty listing prints [`NO_ACCOUNTS`] instead of an empty table.
pub fn write_account_listing(listing: AccountListing<'_>, output: &mut dyn Write) -> io::Result<()> {
    let accounts = match listing {
        AccountListing::Empty => return writeln!(output, "{}", NO_ACCOUNTS),
        AccountListing::Accounts(accounts) => accounts,
    };

    writeln!(
        output,
        "{:<10} {:<24} {:>14} {:<10}",
        "ID", "Holder", "Balance", "Opened"
    )?;
    writeln!(output, "{}", "-".repeat(61))?;
    for account in accounts {
        writeln!(
            output,
            "{:<10} {:<24} {:>14} {:<10}",
            account.id,
            account.holder_name,
            format_currency(account.balance),
            format_date(&account.created_at)
        )?;
    }

    let total: Decimal = accounts.iter().map(|account| account.balance).sum();
    writeln!(output, "{}", "-".repeat(61))?;
    writeln!(output, "Total accounts: {}", accounts.len())?;
    writeln!(output, "Total balance: {}", format_currency(total))?;
    Ok(())
}

/// Write the transaction history of one account
///
/// An empty history prints [`NO_TRANSACTIONS`].
pub fn write_transaction_history(
    history: TransactionHistory<'_>,
    output: &mut dyn Write,
) -> io::Result<()> {
    let entries = match history {
        TransactionHistory::Empty => return writeln!(output, "{}", NO_TRANSACTIONS),
        TransactionHistory::Entries(entries) => entries,
    };

    writeln!(
        output,
        "{:<19} {:<12} {:>12} {:>12}  {}",
        "Date", "Type", "Amount", "Balance", "Description"
    )?;
    writeln!(output, "{}", "-".repeat(72))?;
    for tx in entries {
        writeln!(
            output,
            "{:<19} {:<12} {:>12} {:>12}  {}",
            format_date_time(&tx.timestamp),
            tx.tx_type.as_str(),
            format_currency(tx.amount),
            format_currency(tx.balance_after),
            tx.description
        )?;
    }
    Ok(())
}
