//! Regex patterns for purchase order extraction.
//!
//! Scalar fields each have an ordered rule list assembled in
//! [`super::scalars`]; the patterns here are the individual rules.

use lazy_static::lazy_static;
use regex::Regex;

/// Monetary amount: optional comma-grouped thousands, optional decimals
/// ("25", "25.00", "2,500.00"). Grouping commas are stripped when parsing.
const AMOUNT: &str = r"(?:\d{1,3}(?:,\d{3})+|\d+)(?:\.\d+)?";

lazy_static! {
    // Order number rules, tried in this order.
    pub static ref ORDER_NUMBER: Regex =
        Regex::new(r"(?i)order\s+number[:\s]+([A-Z0-9-]+)").unwrap();

    pub static ref PURCHASE_ORDER: Regex =
        Regex::new(r"(?i)purchase\s+order[:\s]+([A-Z0-9-]+)").unwrap();

    pub static ref PO_SHORT: Regex =
        Regex::new(r"(?i)po[:\s]+([A-Z0-9-]+)").unwrap();

    // Date rules, tried in this order. The matched substring is kept
    // verbatim; no calendar parsing.
    pub static ref DATE_LABELED_ISO: Regex =
        Regex::new(r"(?i)date[:\s]+(\d{4}-\d{2}-\d{2})").unwrap();

    pub static ref DATE_LABELED_DMY: Regex =
        Regex::new(r"(?i)date[:\s]+(\d{2}/\d{2}/\d{4})").unwrap();

    pub static ref DATE_BARE_DMY: Regex =
        Regex::new(r"(\d{2}-\d{2}-\d{4})").unwrap();

    // Supplier rules, tried in this order.
    pub static ref SUPPLIER: Regex =
        Regex::new(r"(?i)supplier[:\s]+([^\n]+)").unwrap();

    pub static ref VENDOR: Regex =
        Regex::new(r"(?i)vendor[:\s]+([^\n]+)").unwrap();

    // Line item: "<bullet> <product>: <qty> units @ <price> = <amount>",
    // with an optional euro sign before each amount.
    pub static ref LINE_ITEM: Regex = Regex::new(&format!(
        r"(?i)[-*\u{{2022}}]\s*([^:]+):\s*(\d+)\s*units?\s*@\s*€?({AMOUNT})\s*=\s*€?({AMOUNT})"
    ))
    .unwrap();

    // Financial total labels. Word boundaries keep "Total:" from matching
    // inside "Subtotal:".
    pub static ref SUBTOTAL: Regex =
        Regex::new(&format!(r"(?i)\bsubtotal[:\s]+€?({AMOUNT})")).unwrap();

    pub static ref VAT_LINE: Regex =
        Regex::new(&format!(r"(?i)vat\s*\((\d+)%\)[:\s]+€?({AMOUNT})")).unwrap();

    pub static ref TOTAL: Regex =
        Regex::new(&format!(r"(?i)\btotal[:\s]+€?({AMOUNT})")).unwrap();

    // Delivery address block label; the block body is the following lines.
    pub static ref DELIVERY_LABEL: Regex =
        Regex::new(r"(?i)^\s*(?:delivery\s+address|ship\s+to)\s*:?\s*$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_number_patterns() {
        assert!(ORDER_NUMBER.is_match("Order Number: APO-00199"));
        assert!(PURCHASE_ORDER.is_match("Purchase Order: PO-2024-001"));
        assert!(PO_SHORT.is_match("PO: PO-999"));
    }

    #[test]
    fn test_total_label_does_not_match_inside_subtotal() {
        assert!(!TOTAL.is_match("Subtotal: €3,330.00"));
        assert!(TOTAL.is_match("Total: €3,932.50"));
        assert!(SUBTOTAL.is_match("Net Subtotal: €3,163.50"));
    }

    #[test]
    fn test_line_item_accepts_all_bullets() {
        for bullet in ["-", "*", "\u{2022}"] {
            let line = format!("{bullet} Product A: 100 units @ €25.00 = €2500.00");
            assert!(LINE_ITEM.is_match(&line), "bullet {bullet:?}");
        }
    }

    #[test]
    fn test_amount_allows_grouped_thousands() {
        let caps = SUBTOTAL.captures("Subtotal: €3,330.00").unwrap();
        assert_eq!(&caps[1], "3,330.00");
    }
}
