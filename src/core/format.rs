//! Fixed-decimal number formatting for exported cells.
//!
//! Values are rounded to the nearest decimal on their exact binary value;
//! exact ties round away from zero, and negative zero prints without a sign.
//! This mirrors how the lineup grid renders numbers, so an exported file
//! shows the same digits the user saw on screen.

use rust_decimal::{Decimal, RoundingStrategy};

/// Format `value` with exactly `decimals` fractional digits.
///
/// ```rust
/// use dfs_lineups::core::format::to_fixed;
///
/// assert_eq!(to_fixed(3.14159, 1), "3.1");
/// assert_eq!(to_fixed(2.5, 0), "3");
/// assert_eq!(to_fixed(-0.0, 1), "0.0");
/// ```
pub fn to_fixed(value: f64, decimals: usize) -> String {
    let value = if value == 0.0 { 0.0 } else { value };

    // Non-finite or beyond Decimal's range.
    let Some(magnitude) = Decimal::from_f64_retain(value.abs()) else {
        return format!("{:.*}", decimals, value);
    };

    let rounded = magnitude
        .round_dp_with_strategy(decimals as u32, RoundingStrategy::MidpointAwayFromZero);
    let digits = format!("{:.*}", decimals, rounded);
    if value < 0.0 {
        format!("-{digits}")
    } else {
        digits
    }
}

/// `value * 100` to `decimals` places with a trailing percent sign.
pub fn to_percent(value: f64, decimals: usize) -> String {
    format!("{}%", to_fixed(value * 100.0, decimals))
}
