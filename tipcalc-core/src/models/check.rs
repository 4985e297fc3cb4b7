//! User-editable state for a single restaurant check.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::TipBreakdown;

/// Smallest selectable tip percentage.
pub const MIN_TIP_PERCENTAGE: u32 = 1;
/// Largest selectable tip percentage.
pub const MAX_TIP_PERCENTAGE: u32 = 50;
/// Smallest selectable party size.
pub const MIN_PARTY_SIZE: u32 = 1;
/// Largest selectable party size.
pub const MAX_PARTY_SIZE: u32 = 20;

/// A check being split: the bill subtotal, the chosen tip percentage, and
/// the number of people in the party.
///
/// These three fields are the only authoritative state; tip, total, and
/// per-person amounts are derived on every read. The stepper operations
/// clamp to their own field's bounds, so a `Check` mutated only through
/// this API keeps the tip percentage in
/// [`MIN_TIP_PERCENTAGE`]..=[`MAX_TIP_PERCENTAGE`] and the party size in
/// [`MIN_PARTY_SIZE`]..=[`MAX_PARTY_SIZE`]. The subtotal is deliberately
/// unclamped: a non-positive subtotal is a representable state whose
/// derived amounts simply read as `None`.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tipcalc_core::Check;
///
/// let mut check = Check::default();
/// check.set_subtotal(dec!(50.00));
/// check.increment_tip_percentage(); // 18 → 19
/// check.increment_tip_percentage(); // 19 → 20
/// for _ in 0..3 {
///     check.increment_party_size(); // party of 4
/// }
///
/// let breakdown = check.breakdown().unwrap();
/// assert_eq!(breakdown.tip, dec!(10.00));
/// assert_eq!(breakdown.total, dec!(60.00));
/// assert_eq!(breakdown.per_person, dec!(15.00));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Check {
    subtotal: Decimal,
    tip_percentage: u32,
    party_size: u32,
}

impl Default for Check {
    /// The sample check shown at startup: $20.00, 18% tip, party of one.
    fn default() -> Self {
        Self {
            subtotal: Decimal::new(2000, 2),
            tip_percentage: 18,
            party_size: 1,
        }
    }
}

impl Check {
    /// The bill amount before tip.
    pub fn subtotal(&self) -> Decimal {
        self.subtotal
    }

    /// The whole-number tip percentage.
    pub fn tip_percentage(&self) -> u32 {
        self.tip_percentage
    }

    /// The number of people splitting the total.
    pub fn party_size(&self) -> u32 {
        self.party_size
    }

    /// Replaces the subtotal.
    ///
    /// Values are accepted unclamped; validity is checked on read via
    /// [`Check::is_subtotal_valid`].
    pub fn set_subtotal(
        &mut self,
        subtotal: Decimal,
    ) {
        self.subtotal = subtotal;
    }

    /// Resets the subtotal to zero, which blanks the derived amounts.
    pub fn clear_subtotal(&mut self) {
        self.subtotal = Decimal::ZERO;
    }

    /// Raises the tip percentage by one point; no-op at [`MAX_TIP_PERCENTAGE`].
    pub fn increment_tip_percentage(&mut self) {
        if self.tip_percentage < MAX_TIP_PERCENTAGE {
            self.tip_percentage += 1;
        } else {
            debug!(tip_percentage = self.tip_percentage, "already at maximum");
        }
    }

    /// Lowers the tip percentage by one point; no-op at [`MIN_TIP_PERCENTAGE`].
    pub fn decrement_tip_percentage(&mut self) {
        if self.tip_percentage > MIN_TIP_PERCENTAGE {
            self.tip_percentage -= 1;
        } else {
            debug!(tip_percentage = self.tip_percentage, "already at minimum");
        }
    }

    /// Adds one person to the party; no-op at [`MAX_PARTY_SIZE`].
    pub fn increment_party_size(&mut self) {
        if self.party_size < MAX_PARTY_SIZE {
            self.party_size += 1;
        } else {
            debug!(party_size = self.party_size, "already at maximum");
        }
    }

    /// Removes one person from the party; no-op at [`MIN_PARTY_SIZE`].
    pub fn decrement_party_size(&mut self) {
        if self.party_size > MIN_PARTY_SIZE {
            self.party_size -= 1;
        } else {
            debug!(party_size = self.party_size, "already at minimum");
        }
    }

    /// A subtotal must be positive for the derived amounts to be shown.
    pub fn is_subtotal_valid(&self) -> bool {
        self.subtotal > Decimal::ZERO
    }

    /// Computes all three derived amounts, or `None` when the subtotal is
    /// not positive.
    ///
    /// The stepper operations keep the party size in range, so the
    /// underlying calculation cannot fail here.
    pub fn breakdown(&self) -> Option<TipBreakdown> {
        if !self.is_subtotal_valid() {
            return None;
        }
        TipBreakdown::calculate(self.subtotal, self.tip_percentage, self.party_size).ok()
    }

    /// The tip amount, or `None` when the subtotal is not positive.
    pub fn tip(&self) -> Option<Decimal> {
        self.breakdown().map(|b| b.tip)
    }

    /// The total including tip, or `None` when the subtotal is not positive.
    pub fn total(&self) -> Option<Decimal> {
        self.breakdown().map(|b| b.total)
    }

    /// One person's share of the total, or `None` when the subtotal is not
    /// positive.
    pub fn per_person(&self) -> Option<Decimal> {
        self.breakdown().map(|b| b.per_person)
    }
}
