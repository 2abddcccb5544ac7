use serde::Serialize;

use crate::domain::pricing::DEFAULT_USD_TO_LYD_RATE;
use crate::domain::settings::{ExchangeRateValue, USD_TO_LYD_RATE_KEY};
use crate::forms::settings::UpdateRateForm;
use crate::repository::{SettingsReader, SettingsWriter};
use crate::services::{ServiceError, ServiceResult};

/// API response for the exchange-rate setting.
#[derive(Debug, Serialize)]
pub struct ExchangeRateResponse {
    /// Settings key the rate is stored under.
    pub key: String,
    /// Stored JSON value.
    pub value: ExchangeRateValue,
    /// The effective rate (stored or default).
    pub rate: f64,
}

impl ExchangeRateResponse {
    fn for_rate(rate: f64) -> Self {
        Self {
            key: USD_TO_LYD_RATE_KEY.to_string(),
            value: ExchangeRateValue { rate },
            rate,
        }
    }
}

/// The effective USD to LYD rate.
///
/// Storage failures, a missing row, and malformed values all degrade to
/// [`DEFAULT_USD_TO_LYD_RATE`] so the storefront stays browsable.
pub fn current_rate<R>(repo: &R) -> f64
where
    R: SettingsReader + ?Sized,
{
    match repo.get_setting(USD_TO_LYD_RATE_KEY) {
        Ok(Some(setting)) => setting.exchange_rate().unwrap_or_else(|| {
            log::warn!("stored exchange rate is unreadable, using default");
            DEFAULT_USD_TO_LYD_RATE
        }),
        Ok(None) => DEFAULT_USD_TO_LYD_RATE,
        Err(err) => {
            log::warn!("failed to read exchange rate, using default: {err}");
            DEFAULT_USD_TO_LYD_RATE
        }
    }
}

/// Loads the exchange-rate setting for the API. Infallible by design.
pub fn get_exchange_rate<R>(repo: &R) -> ExchangeRateResponse
where
    R: SettingsReader + ?Sized,
{
    ExchangeRateResponse::for_rate(current_rate(repo))
}

/// Overwrites the stored exchange rate.
///
/// Existing orders keep their `usd_to_lyd_snapshot`; catalog display prices
/// reflect the new rate on the next read. No backfill happens here.
pub fn update_exchange_rate<R>(repo: &R, form: UpdateRateForm) -> ServiceResult<ExchangeRateResponse>
where
    R: SettingsWriter + ?Sized,
{
    let rate = form
        .validated_rate()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let value = serde_json::to_string(&ExchangeRateValue { rate })
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let stored = repo.set_setting(USD_TO_LYD_RATE_KEY, &value)?;
    log::info!("exchange rate updated to {rate} at {}", stored.updated_at);

    Ok(ExchangeRateResponse::for_rate(rate))
}
