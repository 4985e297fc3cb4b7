//! Tip, total, and per-person amounts for a check.
//!
//! The derivation chain mirrors the bottom of a receipt:
//!
//! | Line       | Derivation                      |
//! |------------|---------------------------------|
//! | Tip        | subtotal × tip percentage / 100 |
//! | Total      | subtotal + tip                  |
//! | Per person | total / party size              |
//!
//! Amounts are kept exact; rounding to whole cents is a display concern
//! (see [`crate::calculations::common::round_half_up`]).
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tipcalc_core::calculations::TipBreakdown;
//!
//! let breakdown = TipBreakdown::calculate(dec!(20.00), 18, 1).unwrap();
//!
//! assert_eq!(breakdown.tip, dec!(3.60));
//! assert_eq!(breakdown.total, dec!(23.60));
//! assert_eq!(breakdown.per_person, dec!(23.60));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when deriving a [`TipBreakdown`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GratuityError {
    /// The total cannot be split across an empty party.
    #[error("party size must be at least 1")]
    EmptyParty,
}

/// The three amounts derived from a check's inputs.
///
/// A breakdown is never stored as authoritative state; it is recomputed
/// from the current subtotal, tip percentage, and party size on every read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TipBreakdown {
    /// Gratuity on the subtotal at the chosen percentage.
    pub tip: Decimal,
    /// Subtotal plus tip.
    pub total: Decimal,
    /// Each person's share of the total.
    pub per_person: Decimal,
}

impl TipBreakdown {
    /// Derives tip, total, and per-person amounts from the check inputs.
    ///
    /// The subtotal is taken as given; whether a non-positive subtotal
    /// should be shown at all is decided by the caller (see
    /// [`crate::Check::breakdown`]).
    ///
    /// # Errors
    ///
    /// Returns [`GratuityError::EmptyParty`] when `party_size` is zero.
    pub fn calculate(
        subtotal: Decimal,
        tip_percentage: u32,
        party_size: u32,
    ) -> Result<Self, GratuityError> {
        if party_size == 0 {
            return Err(GratuityError::EmptyParty);
        }

        let tip = tip_amount(subtotal, tip_percentage);
        let total = subtotal + tip;
        let per_person = total / Decimal::from(party_size);

        Ok(Self {
            tip,
            total,
            per_person,
        })
    }
}

/// Gratuity on the subtotal at the given whole-number percentage.
fn tip_amount(
    subtotal: Decimal,
    tip_percentage: u32,
) -> Decimal {
    subtotal * Decimal::from(tip_percentage) / Decimal::ONE_HUNDRED
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn eighteen_percent_tip_on_twenty_dollars() {
        let breakdown = TipBreakdown::calculate(dec!(20.00), 18, 1).unwrap();

        assert_eq!(breakdown.tip, dec!(3.60));
        assert_eq!(breakdown.total, dec!(23.60));
        assert_eq!(breakdown.per_person, dec!(23.60));
    }

    #[test]
    fn total_splits_evenly_across_party_of_four() {
        let breakdown = TipBreakdown::calculate(dec!(50.00), 20, 4).unwrap();

        assert_eq!(breakdown.tip, dec!(10.00));
        assert_eq!(breakdown.total, dec!(60.00));
        assert_eq!(breakdown.per_person, dec!(15.00));
    }

    #[test]
    fn tip_is_exact_before_display_rounding() {
        let breakdown = TipBreakdown::calculate(dec!(12.34), 15, 1).unwrap();

        assert_eq!(breakdown.tip, dec!(1.851));
        assert_eq!(breakdown.total, dec!(14.191));
    }

    #[test]
    fn single_person_pays_the_whole_total() {
        let breakdown = TipBreakdown::calculate(dec!(81.25), 22, 1).unwrap();

        assert_eq!(breakdown.per_person, breakdown.total);
    }

    #[test]
    fn zero_subtotal_derives_zero_amounts() {
        let breakdown = TipBreakdown::calculate(Decimal::ZERO, 18, 2).unwrap();

        assert_eq!(breakdown.tip, dec!(0));
        assert_eq!(breakdown.total, dec!(0));
        assert_eq!(breakdown.per_person, dec!(0));
    }

    #[test]
    fn empty_party_is_rejected() {
        let result = TipBreakdown::calculate(dec!(20.00), 18, 0);

        assert_eq!(result, Err(GratuityError::EmptyParty));
    }
}
