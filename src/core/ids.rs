//! Account ID generation
//!
//! Account IDs are `ACC-<number>`, starting at `ACC-1000`. The next number
//! is one past the highest number ever allocated: the larger of the highest
//! existing suffix and the ledger's persisted high-water mark. Deletions
//! therefore never cause an ID to be handed out twice.

use crate::types::{Account, AccountId};

/// Prefix shared by every account ID
pub const ACCOUNT_ID_PREFIX: &str = "ACC-";

/// Number assigned to the first account of an empty ledger
pub const FIRST_ACCOUNT_NUMBER: u64 = 1000;

/// Format an account number as an account ID
pub fn format_account_id(number: u64) -> AccountId {
    format!("{}{}", ACCOUNT_ID_PREFIX, number)
}

/// Extract the numeric suffix of an account ID
///
/// Returns `None` for IDs that do not follow the `ACC-<number>` shape, for
/// example hand-edited entries in the store file.
pub fn parse_account_number(id: &str) -> Option<u64> {
    id.strip_prefix(ACCOUNT_ID_PREFIX)?.parse().ok()
}

/// Compute the number of the next account to create
///
/// # Arguments
///
/// * `accounts` - Accounts currently in the ledger
/// * `high_water` - Smallest number not yet allocated, as persisted
pub fn next_account_number(accounts: &[Account], high_water: u64) -> u64 {
    let past_highest = accounts
        .iter()
        .filter_map(|account| parse_account_number(&account.id))
        .max()
        .map_or(FIRST_ACCOUNT_NUMBER, |highest| highest.saturating_add(1));

    past_highest.max(high_water).max(FIRST_ACCOUNT_NUMBER)
}
