//! Serde helpers for ledger timestamps
//!
//! Timestamps are stored as RFC 3339 UTC strings with millisecond precision
//! and a `Z` suffix (`2025-01-01T00:00:00.000Z`). Parsing accepts any
//! RFC 3339 offset and normalizes it to UTC.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// Render a timestamp in the persisted format
pub fn format(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn serialize<S>(timestamp: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format(timestamp))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    #[derive(Debug, serde::Serialize, serde::Deserialize)]
    struct Wrapper {
        #[serde(with = "super")]
        at: DateTime<Utc>,
    }

    #[test]
    fn test_format_uses_millis_and_z_suffix() {
        let at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(format(&at), "2025-01-01T00:00:00.000Z");
    }

    #[rstest]
    #[case::utc_millis("2025-01-01T00:00:00.000Z")]
    #[case::utc_seconds("2025-01-01T00:00:00Z")]
    #[case::offset("2025-01-01T02:00:00+02:00")]
    fn test_deserialize_normalizes_to_utc(#[case] raw: &str) {
        let json = format!("{{\"at\":\"{}\"}}", raw);
        let parsed: Wrapper = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.at, Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_deserialize_rejects_garbage() {
        let result = serde_json::from_str::<Wrapper>(r#"{"at":"yesterday"}"#);
        assert!(result.is_err());
    }
}
