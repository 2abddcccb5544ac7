//! USD to LYD display-price conversion.
//!
//! Catalog prices are always computed live from the stored exchange rate;
//! order prices are frozen at checkout time (see `services::orders`).

/// Exchange rate used whenever the stored setting is missing or unreadable.
pub const DEFAULT_USD_TO_LYD_RATE: f64 = 5.10;

/// Granularity that display prices are rounded to, in LYD.
const ROUNDING_STEP: f64 = 0.5;

/// Convert a USD base price into the LYD price shown to customers.
///
/// The raw product `base_price_usd * rate_usd_to_lyd` is rounded to the
/// nearest 0.5 LYD, half-up (half away from zero; inputs are non-negative).
pub fn display_price_lyd(base_price_usd: f64, rate_usd_to_lyd: f64) -> f64 {
    let raw = base_price_usd * rate_usd_to_lyd;
    (raw / ROUNDING_STEP).round() * ROUNDING_STEP
}

/// Convert integer cents into a decimal amount.
pub fn cents_to_amount(cents: i64) -> f64 {
    cents as f64 / 100.0
}

/// Convert a decimal amount into integer cents.
pub fn amount_to_cents(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}
