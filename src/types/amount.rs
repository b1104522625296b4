//! Serde helpers for monetary amounts
//!
//! Amounts are written as exact JSON numbers in their shortest form
//! (`150`, `99.5`), never through `f64`, so every balance the ledger can hold
//! reloads unchanged. Parsing accepts any JSON number, including the float
//! forms older ledger files contain (`100.0`).

use rust_decimal::Decimal;
use serde::{Deserializer, Serializer};

pub fn serialize<S>(amount: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    rust_decimal::serde::arbitrary_precision::serialize(&amount.normalize(), serializer)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    rust_decimal::serde::arbitrary_precision::deserialize(deserializer)
}
