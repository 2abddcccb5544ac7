use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Settings key holding the USD to LYD exchange rate.
pub const USD_TO_LYD_RATE_KEY: &str = "usd_to_lyd_rate";

/// A single row of the generic key-value settings table.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Setting {
    /// Unique settings key.
    pub key: String,
    /// JSON-encoded value.
    pub value: String,
    /// Timestamp for the last update to the setting.
    pub updated_at: NaiveDateTime,
}

/// JSON shape stored under [`USD_TO_LYD_RATE_KEY`].
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct ExchangeRateValue {
    pub rate: f64,
}

impl Setting {
    /// Parse the exchange rate out of this setting's JSON value.
    ///
    /// Returns `None` for malformed JSON or a non-positive/non-finite rate,
    /// so callers fall back to the default rate instead of failing.
    pub fn exchange_rate(&self) -> Option<f64> {
        serde_json::from_str::<ExchangeRateValue>(&self.value)
            .ok()
            .map(|value| value.rate)
            .filter(|rate| rate.is_finite() && *rate > 0.0)
    }
}
