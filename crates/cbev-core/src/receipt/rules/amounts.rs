//! Amount coercion tolerant of thousands separators.

use std::str::FromStr;

use rust_decimal::Decimal;

/// Parse an amount string such as `1,234.50` or `1234.50` into a decimal.
/// Returns `None` when the cleaned string is not a number.
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let cleaned = raw.trim().replace(',', "");
    Decimal::from_str(&cleaned).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount_with_separators() {
        assert_eq!(
            parse_amount("1,234.50"),
            Some(Decimal::from_str("1234.50").unwrap())
        );
        assert_eq!(
            parse_amount("12,345,678.90"),
            Some(Decimal::from_str("12345678.90").unwrap())
        );
    }

    #[test]
    fn test_parse_amount_plain() {
        assert_eq!(
            parse_amount(" 100.00 "),
            Some(Decimal::from_str("100.00").unwrap())
        );
    }

    #[test]
    fn test_parse_amount_rejects_garbage() {
        assert_eq!(parse_amount("ETB"), None);
        assert_eq!(parse_amount(""), None);
    }

    #[test]
    fn test_separator_representations_compare_equal() {
        assert_eq!(parse_amount("1,234.50"), parse_amount("1234.50"));
    }
}
