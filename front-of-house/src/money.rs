//! Money calculation utilities using rust_decimal for precision
//!
//! Prices arrive as `f64` in the datasets. Sums go through `Decimal` so that
//! the result does not depend on summation order, then come back as `f64`
//! rounded to 2 decimal places.

use rust_decimal::prelude::*;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value = ?value, "Non-finite f64 in monetary calculation, defaulting to zero");
        Decimal::ZERO
    })
}

/// Convert Decimal back to f64, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Convert Decimal back to f64 without rounding
///
/// For values that feed further arithmetic, where cents are not the unit.
#[inline]
pub fn to_f64_exact(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

/// Exact sum of a sequence of prices
pub fn sum_prices<I>(prices: I) -> Decimal
where
    I: IntoIterator<Item = f64>,
{
    prices.into_iter().map(to_decimal).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_decimal_precision() {
        let sum_f64 = 0.1_f64 + 0.2_f64;
        assert_ne!(sum_f64, 0.3);

        let sum_dec = to_decimal(0.1) + to_decimal(0.2);
        assert_eq!(to_f64(sum_dec), 0.3);
    }

    #[test]
    fn test_sum_is_order_independent() {
        let prices = [0.1, 19.99, 0.2, 7.35, 1e-2];
        let forward = sum_prices(prices);
        let backward = sum_prices(prices.iter().rev().copied());
        assert_eq!(forward, backward);
        assert_eq!(to_f64(forward), 27.65);
    }

    #[test]
    fn test_non_finite_defaults_to_zero() {
        assert_eq!(to_decimal(f64::NAN), Decimal::ZERO);
        assert_eq!(to_decimal(f64::INFINITY), Decimal::ZERO);
    }

    #[test]
    fn test_exact_conversion_keeps_sub_cent_digits() {
        let sum = sum_prices([10.001, 0.002]);
        assert!((to_f64_exact(sum) - 10.003).abs() < 1e-12);
        assert_eq!(to_f64(sum), 10.0);
    }

    #[test]
    fn test_rounding_half_up() {
        assert_eq!(to_f64(Decimal::new(12345, 3)), 12.35);
        assert_eq!(to_f64(Decimal::new(-12345, 3)), -12.35);
    }
}
