use rust_decimal::Decimal;
use thiserror::Error;
use tipcalc_core::calculations::common::round_half_up;

/// Error returned when subtotal text cannot be parsed as a [`Decimal`].
#[derive(Debug, Error)]
#[error("invalid amount '{input}': {source}")]
pub struct ParseAmountError {
    input: String,
    #[source]
    source: rust_decimal::Error,
}

/// Normalizes amount text for parsing: trims whitespace and strips commas
/// (thousands separator).
fn normalize_amount_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses subtotal text into a [`Decimal`].
///
/// Handles comma as thousands separator (e.g. `"1,234.56"`). Empty or
/// whitespace-only input is treated as 0, which is what lets the Clear
/// action blank the derived rows.
pub fn parse_amount(s: &str) -> Result<Decimal, ParseAmountError> {
    let normalized = normalize_amount_input(s);
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }
    normalized.parse().map_err(|source| ParseAmountError {
        input: s.to_string(),
        source,
    })
}

/// Formats a derived amount for its read-only row.
///
/// Amounts render with exactly two decimal places, rounded half-up. `None`
/// (no valid subtotal) renders as a single blank space rather than "0.00".
pub fn amount_display(amount: Option<Decimal>) -> String {
    match amount {
        Some(value) => format!("{:.2}", round_half_up(value)),
        None => " ".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parse_amount_accepts_comma_thousands_separator() {
        assert_eq!(parse_amount("1,234.56").unwrap(), dec!(1234.56));
    }

    #[test]
    fn parse_amount_trims_whitespace() {
        assert_eq!(parse_amount("  20.00  ").unwrap(), dec!(20.00));
    }

    #[test]
    fn parse_amount_empty_treated_as_zero() {
        assert_eq!(parse_amount("").unwrap(), Decimal::ZERO);
        assert_eq!(parse_amount("   ").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn parse_amount_invalid_returns_error() {
        assert!(parse_amount("lunch").is_err());
    }

    #[test]
    fn amount_display_pads_to_two_decimals() {
        assert_eq!(amount_display(Some(dec!(23.6))), "23.60");
        assert_eq!(amount_display(Some(dec!(10))), "10.00");
    }

    #[test]
    fn amount_display_rounds_half_up() {
        assert_eq!(amount_display(Some(dec!(23.60) / dec!(3))), "7.87");
        assert_eq!(amount_display(Some(dec!(1.855))), "1.86");
    }

    #[test]
    fn amount_display_blanks_missing_amounts() {
        assert_eq!(amount_display(None), " ");
    }
}
