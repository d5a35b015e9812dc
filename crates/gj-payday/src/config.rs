//! `PaydayConfig` — the single persisted preference.

use gj_core::errors::{Error, Result};
use gj_core::ensure;
use serde::{Deserialize, Serialize};

/// The user's payday, as a day of the month in `1..=31`.
///
/// Stored as `{"dayOfMonth":25}`; the day is always a JSON integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaydayConfig {
    day_of_month: u8,
}

impl PaydayConfig {
    /// Create a config, rejecting days outside `1..=31`.
    pub fn new(day_of_month: u8) -> Result<Self> {
        ensure!(
            (1..=31).contains(&day_of_month),
            "payday {day_of_month} out of range [1, 31]"
        );
        Ok(Self { day_of_month })
    }

    /// The configured day of the month.
    pub fn day_of_month(&self) -> u8 {
        self.day_of_month
    }

    /// Decode a stored record, applying the same range check as [`new`](Self::new).
    pub fn from_json(raw: &str) -> Result<Self> {
        let decoded: PaydayConfig =
            serde_json::from_str(raw).map_err(|e| Error::Serialization(e.to_string()))?;
        Self::new(decoded.day_of_month)
    }

    /// Encode for storage.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_is_checked() {
        assert!(PaydayConfig::new(0).is_err());
        assert!(PaydayConfig::new(32).is_err());
        assert_eq!(PaydayConfig::new(31).unwrap().day_of_month(), 31);
    }

    #[test]
    fn json_shape() {
        let config = PaydayConfig::new(25).unwrap();
        assert_eq!(config.to_json().unwrap(), r#"{"dayOfMonth":25}"#);
        assert_eq!(PaydayConfig::from_json(r#"{"dayOfMonth":25}"#).unwrap(), config);
    }

    #[test]
    fn rejects_malformed_records() {
        assert!(matches!(
            PaydayConfig::from_json(r#"{"dayOfMonth":"25"}"#),
            Err(Error::Serialization(_))
        ));
        assert!(matches!(
            PaydayConfig::from_json(r#"{"dayOfMonth":40}"#),
            Err(Error::Precondition(_))
        ));
        assert!(PaydayConfig::from_json("not json").is_err());
    }
}
