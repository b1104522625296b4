//! Input validation
//!
//! Pure checks run on raw operator input before the ledger engine looks at
//! any account. Nothing in here touches ledger state.

use crate::types::LedgerError;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Number of decimal places a currency amount may carry
pub const CURRENCY_SCALE: u32 = 2;

/// What to do when an amount was not supplied at all
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingAmount {
    /// Treat a missing amount as zero (initial deposit)
    DefaultToZero,
    /// A missing amount is invalid input
    Reject,
}

/// Validate an account holder name
///
/// # Returns
///
/// The trimmed name.
///
/// # Errors
///
/// Returns `InvalidInput` if the name is empty or whitespace-only.
pub fn validate_name(input: &str) -> Result<String, LedgerError> {
    let name = input.trim();
    if name.is_empty() {
        return Err(LedgerError::invalid_input("Account holder name cannot be empty."));
    }
    Ok(name.to_string())
}

/// Parse and validate a currency amount
///
/// `None` and blank strings are both treated as "not supplied" and handled
/// according to `missing`.
///
/// # Arguments
///
/// * `input` - Raw amount text, if any was entered
/// * `missing` - Policy for a missing amount
///
/// # Errors
///
/// Returns an error if:
/// - The amount is missing and `missing` is `MissingAmount::Reject` (`InvalidInput`)
/// - The text is not a decimal number (`InvalidInput`)
/// - The number has more than two decimal places (`InvalidInput`)
/// - The number is below zero (`NegativeAmount`)
pub fn validate_amount(input: Option<&str>, missing: MissingAmount) -> Result<Decimal, LedgerError> {
    let raw = match input.map(str::trim).filter(|s| !s.is_empty()) {
        Some(raw) => raw,
        None => {
            return match missing {
                MissingAmount::DefaultToZero => Ok(Decimal::ZERO),
                MissingAmount::Reject => Err(LedgerError::invalid_input("Amount is required.")),
            }
        }
    };

    let amount = Decimal::from_str(raw)
        .map_err(|_| LedgerError::invalid_input("Amount must be a number."))?;

    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(LedgerError::negative_amount(amount));
    }

    let amount = amount.normalize();
    if amount.scale() > CURRENCY_SCALE {
        return Err(LedgerError::invalid_input(
            "Amount cannot have more than two decimal places.",
        ));
    }

    Ok(amount)
}

/// Require a strictly positive amount
///
/// Deposits, withdrawals and transfers always record a positive
/// transaction amount, so zero is rejected for them.
///
/// # Errors
///
/// Returns `InvalidInput` if the amount is zero.
pub fn require_positive(amount: Decimal) -> Result<Decimal, LedgerError> {
    if amount.is_zero() {
        return Err(LedgerError::invalid_input("Amount must be greater than zero."));
    }
    Ok(amount)
}

/// Map raw prompt text to an optional value
///
/// An empty or whitespace-only answer means "nothing entered".
pub fn optional_input(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::plain("Alice", "Alice")]
    #[case::padded("  Bob  ", "Bob")]
    #[case::inner_spaces("Carol Ann", "Carol Ann")]
    fn test_validate_name_accepts(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(validate_name(input).unwrap(), expected);
    }

    #[rstest]
    #[case::empty("")]
    #[case::spaces("   ")]
    #[case::tabs("\t\n")]
    fn test_validate_name_rejects_blank(#[case] input: &str) {
        assert!(matches!(
            validate_name(input),
            Err(LedgerError::InvalidInput { .. })
        ));
    }

    #[rstest]
    #[case::integer(Some("100"), Decimal::new(100, 0))]
    #[case::two_decimals(Some("12.34"), Decimal::new(1234, 2))]
    #[case::trailing_zeros(Some("5.500"), Decimal::new(55, 1))]
    #[case::padded(Some(" 7 "), Decimal::new(7, 0))]
    #[case::zero(Some("0"), Decimal::ZERO)]
    #[case::negative_zero(Some("-0"), Decimal::ZERO)]
    fn test_validate_amount_accepts(#[case] input: Option<&str>, #[case] expected: Decimal) {
        assert_eq!(validate_amount(input, MissingAmount::Reject).unwrap(), expected);
    }

    #[rstest]
    #[case::none(None)]
    #[case::empty(Some(""))]
    #[case::blank(Some("   "))]
    fn test_missing_amount_defaults_to_zero_when_allowed(#[case] input: Option<&str>) {
        assert_eq!(
            validate_amount(input, MissingAmount::DefaultToZero).unwrap(),
            Decimal::ZERO
        );
    }

    #[rstest]
    #[case::none(None)]
    #[case::empty(Some(""))]
    fn test_missing_amount_rejected_when_required(#[case] input: Option<&str>) {
        assert!(matches!(
            validate_amount(input, MissingAmount::Reject),
            Err(LedgerError::InvalidInput { .. })
        ));
    }

    #[rstest]
    #[case::letters("abc")]
    #[case::mixed("12abc")]
    #[case::two_points("1.2.3")]
    #[case::too_precise("1.005")]
    #[case::nan("NaN")]
    fn test_validate_amount_rejects_malformed(#[case] input: &str) {
        assert!(matches!(
            validate_amount(Some(input), MissingAmount::DefaultToZero),
            Err(LedgerError::InvalidInput { .. })
        ));
    }

    #[rstest]
    #[case::integer("-50", Decimal::new(-50, 0))]
    #[case::fraction("-0.01", Decimal::new(-1, 2))]
    fn test_validate_amount_rejects_negative(#[case] input: &str, #[case] expected: Decimal) {
        assert_eq!(
            validate_amount(Some(input), MissingAmount::DefaultToZero),
            Err(LedgerError::NegativeAmount { amount: expected })
        );
    }

    #[test]
    fn test_require_positive() {
        assert!(require_positive(Decimal::new(1, 2)).is_ok());
        assert!(matches!(
            require_positive(Decimal::ZERO),
            Err(LedgerError::InvalidInput { .. })
        ));
    }

    #[rstest]
    #[case::empty("", None)]
    #[case::blank("  ", None)]
    #[case::value(" 25 ", Some("25"))]
    fn test_optional_input(#[case] raw: &str, #[case] expected: Option<&str>) {
        assert_eq!(optional_input(raw), expected);
    }
}
