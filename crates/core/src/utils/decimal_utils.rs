use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::constants::DISPLAY_DECIMAL_PRECISION;

/// Rounds a money or percentage value for reporting.
///
/// Midpoints round away from zero (2.345 -> 2.35).
pub fn round_display(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(
        DISPLAY_DECIMAL_PRECISION,
        RoundingStrategy::MidpointAwayFromZero,
    )
}

/// `part / total * 100`, rounded for display; zero when `total` is zero.
pub fn percentage_of(part: Decimal, total: Decimal) -> Decimal {
    if total.is_zero() {
        return Decimal::ZERO;
    }
    round_display(part / total * dec!(100))
}
