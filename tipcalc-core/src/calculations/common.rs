//! Shared helpers for monetary calculations.

use rust_decimal::Decimal;

/// Rounds a monetary value to two decimal places, half-up.
///
/// Midpoints round away from zero, the usual convention for cash amounts.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tipcalc_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(1.851)), dec!(1.85));
/// assert_eq!(round_half_up(dec!(1.855)), dec!(1.86));
/// assert_eq!(round_half_up(dec!(-1.855)), dec!(-1.86));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        let result = round_half_up(dec!(7.864));

        assert_eq!(result, dec!(7.86));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        let result = round_half_up(dec!(7.865));

        assert_eq!(result, dec!(7.87));
    }

    #[test]
    fn round_half_up_rounds_up_above_midpoint() {
        let result = round_half_up(dec!(7.866));

        assert_eq!(result, dec!(7.87));
    }

    #[test]
    fn round_half_up_rounds_negative_midpoints_away_from_zero() {
        let result = round_half_up(dec!(-7.865));

        assert_eq!(result, dec!(-7.87));
    }

    #[test]
    fn round_half_up_preserves_already_rounded_values() {
        let result = round_half_up(dec!(23.60));

        assert_eq!(result, dec!(23.60));
    }

    #[test]
    fn round_half_up_handles_zero() {
        let result = round_half_up(Decimal::ZERO);

        assert_eq!(result, dec!(0));
    }
}
