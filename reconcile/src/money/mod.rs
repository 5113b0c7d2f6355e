//! Money calculation utilities using rust_decimal for precision
//!
//! All calculations are done using `Decimal` internally, then converted to
//! `f64` for storage/serialization. Record fields stay `f64` because that
//! is what the hosted store holds; drift is avoided by never accumulating
//! in floating point.

use rust_decimal::prelude::*;


/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Resolve an optional numeric record field to a Decimal.
///
/// The single place where the zero-coercion policy lives: missing values,
/// NaN, and infinities all resolve to zero so the calculators stay total
/// and the dashboard keeps rendering. Figures degrade conservatively
/// (lower), they never block.
#[inline]
pub fn resolve(value: Option<f64>) -> Decimal {
    match value {
        Some(v) if v.is_finite() => to_decimal(v),
        _ => Decimal::ZERO,
    }
}

/// Ratio helper: `numerator / denominator`, zero when the denominator is
/// zero. Margins and utilization figures must always be finite.
#[inline]
pub fn ratio(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator.is_zero() {
        Decimal::ZERO
    } else {
        numerator / denominator
    }
}
