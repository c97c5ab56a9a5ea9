//! Financial total extraction and amount parsing.

use rust_decimal::Decimal;
use std::str::FromStr;

use super::patterns::{SUBTOTAL, TOTAL, VAT_LINE};

/// Parse a monetary amount, stripping grouping commas ("2,500.00").
pub fn parse_amount(s: &str) -> Option<Decimal> {
    let cleaned: String = s
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    Decimal::from_str(&cleaned).ok()
}

/// Labeled financial totals found in the text. Each is independently
/// optional; the reconciler derives what it can from the rest.
#[derive(Debug, Clone, Default)]
pub struct OrderTotals {
    /// Net amount from a "subtotal:" label.
    pub subtotal: Option<Decimal>,
    /// Rate from "vat (<percent>%):", as a fraction.
    pub vat_rate: Option<Decimal>,
    /// Amount from the same "vat (...):" line.
    pub vat_amount: Option<Decimal>,
    /// Gross amount from a "total:" label.
    pub total: Option<Decimal>,
}

/// Extract labeled financial totals from order text.
pub fn extract_totals(text: &str) -> OrderTotals {
    let mut totals = OrderTotals::default();

    if let Some(caps) = SUBTOTAL.captures(text) {
        totals.subtotal = parse_amount(&caps[1]);
    }

    // Rate and amount come jointly from one "VAT (21%): 682.50" line.
    if let Some(caps) = VAT_LINE.captures(text) {
        totals.vat_rate = parse_amount(&caps[1]).map(|percent| percent / Decimal::ONE_HUNDRED);
        totals.vat_amount = parse_amount(&caps[2]);
    }

    if let Some(caps) = TOTAL.captures(text) {
        totals.total = parse_amount(&caps[1]);
    }

    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("25.00"), Some(dec("25.00")));
        assert_eq!(parse_amount("15"), Some(dec("15")));
        assert_eq!(parse_amount("2,500.00"), Some(dec("2500.00")));
        assert_eq!(parse_amount("12,345,678.90"), Some(dec("12345678.90")));
        assert_eq!(parse_amount(""), None);
    }

    #[test]
    fn test_extract_totals() {
        let text = "Subtotal: €3,250.00\nVAT (21%): €682.50\nTotal: €3,932.50";
        let totals = extract_totals(text);

        assert_eq!(totals.subtotal, Some(dec("3250.00")));
        assert_eq!(totals.vat_rate, Some(dec("0.21")));
        assert_eq!(totals.vat_amount, Some(dec("682.50")));
        assert_eq!(totals.total, Some(dec("3932.50")));
    }

    #[test]
    fn test_totals_independently_optional() {
        let totals = extract_totals("VAT (21%): 21.00");
        assert_eq!(totals.subtotal, None);
        assert_eq!(totals.vat_rate, Some(dec("0.21")));
        assert_eq!(totals.vat_amount, Some(dec("21.00")));
        assert_eq!(totals.total, None);
    }

    #[test]
    fn test_subtotal_alone_does_not_populate_total() {
        let totals = extract_totals("Subtotal: €100.00");
        assert_eq!(totals.subtotal, Some(dec("100.00")));
        assert_eq!(totals.total, None);
    }

    #[test]
    fn test_first_subtotal_label_wins() {
        let text = "Subtotal: €3,330.00\nDiscount (5%): €166.50\nNet Subtotal: €3,163.50";
        let totals = extract_totals(text);
        assert_eq!(totals.subtotal, Some(dec("3330.00")));
    }
}
