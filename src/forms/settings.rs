use serde::Deserialize;
use thiserror::Error;

/// Rates outside this range are almost certainly data-entry mistakes.
const RATE_MAX: f64 = 1000.0;

/// Errors that can occur while processing the settings forms.
#[derive(Debug, Error)]
pub enum SettingsFormError {
    /// The submitted rate is not a usable positive number.
    #[error("exchange rate must be a positive number, got `{value}`")]
    InvalidRate { value: f64 },
}

/// JSON payload for updating the USD to LYD exchange rate.
#[derive(Debug, Deserialize)]
pub struct UpdateRateForm {
    /// New USD to LYD rate.
    pub rate: f64,
}

impl UpdateRateForm {
    /// Validates the submitted rate.
    pub fn validated_rate(&self) -> Result<f64, SettingsFormError> {
        if !self.rate.is_finite() || self.rate <= 0.0 || self.rate > RATE_MAX {
            return Err(SettingsFormError::InvalidRate { value: self.rate });
        }
        Ok(self.rate)
    }
}
