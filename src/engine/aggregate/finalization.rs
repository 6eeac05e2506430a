/// Decimal places for currency totals.
pub const CURRENCY_PLACES: usize = 2;
/// Decimal places for ratios, percentages and averages.
pub const RATIO_PLACES: usize = 6;

/// Rounds half-to-even on the exact binary value.
///
/// Goes through fixed-point formatting, which is correctly rounded, so
/// `2.675` (stored just below the midpoint) becomes `2.67`. Non-finite
/// values pass through unchanged.
pub fn round_to(value: f64, places: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{value:.places$}").parse::<f64>().unwrap_or(value)
}

/// `numerator / denominator`, or `0.0` when the denominator is zero.
#[inline]
pub fn ratio_or_zero(numerator: f64, denominator: f64) -> f64 {
    if denominator != 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

/// Integer-denominator variant of [`ratio_or_zero`].
#[inline]
pub fn mean_or_zero(total: f64, count: u64) -> f64 {
    ratio_or_zero(total, count as f64)
}
