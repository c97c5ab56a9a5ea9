//! Scalar field extraction: order number, date, supplier, delivery address.

use regex::Regex;

use crate::models::order::DeliveryAddress;

use super::first_capture;
use super::patterns::{
    DATE_BARE_DMY, DATE_LABELED_DMY, DATE_LABELED_ISO, DELIVERY_LABEL, ORDER_NUMBER, PO_SHORT,
    PURCHASE_ORDER, SUPPLIER, VENDOR,
};

/// Extract the order number. Labels tried in order: "order number",
/// "purchase order", "po".
pub fn extract_order_number(text: &str) -> Option<String> {
    let rules: [&Regex; 3] = [&ORDER_NUMBER, &PURCHASE_ORDER, &PO_SHORT];
    first_capture(text, &rules)
}

/// Extract the order date as the verbatim matched substring.
///
/// Tried in order: labeled ISO form, labeled DD/MM/YYYY, then a bare
/// DD-MM-YYYY anywhere in the text.
pub fn extract_date(text: &str) -> Option<String> {
    let rules: [&Regex; 3] = [&DATE_LABELED_ISO, &DATE_LABELED_DMY, &DATE_BARE_DMY];
    first_capture(text, &rules)
}

/// Extract the supplier name from a "supplier:" or "vendor:" line.
pub fn extract_supplier(text: &str) -> Option<String> {
    let rules: [&Regex; 2] = [&SUPPLIER, &VENDOR];
    first_capture(text, &rules).map(|s| s.trim().to_string())
}

/// Extract the delivery address block.
///
/// Looks for a "Delivery Address:" or "Ship To:" label line; the first
/// non-empty line after it is the company, and the following lines up to a
/// blank line are joined with ", " as the address.
pub fn extract_delivery_address(text: &str) -> Option<DeliveryAddress> {
    let mut lines = text.lines();

    lines.by_ref().find(|line| DELIVERY_LABEL.is_match(line))?;

    let block: Vec<&str> = lines
        .map(str::trim)
        .skip_while(|line| line.is_empty())
        .take_while(|line| !line.is_empty())
        .collect();

    let (company, rest) = block.split_first()?;
    Some(DeliveryAddress {
        company: company.to_string(),
        address: rest.join(", "),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_order_number_priority() {
        // Both labels present: the higher-priority rule wins even though the
        // other also matches.
        let text = "Order Number: APO-001\nPO: PO-999";
        assert_eq!(extract_order_number(text), Some("APO-001".to_string()));
    }

    #[test]
    fn test_order_number_fallback_labels() {
        assert_eq!(
            extract_order_number("Purchase Order: PO-2024-001"),
            Some("PO-2024-001".to_string())
        );
        assert_eq!(extract_order_number("PO: PO-999"), Some("PO-999".to_string()));
        assert_eq!(extract_order_number("no identifiers here"), None);
    }

    #[test]
    fn test_date_formats_kept_verbatim() {
        assert_eq!(
            extract_date("Date: 2024-01-15"),
            Some("2024-01-15".to_string())
        );
        assert_eq!(
            extract_date("Date: 15/01/2024"),
            Some("15/01/2024".to_string())
        );
        assert_eq!(
            extract_date("delivered on 30-01-2024 at noon"),
            Some("30-01-2024".to_string())
        );
        assert_eq!(extract_date("no date in sight"), None);
    }

    #[test]
    fn test_date_labeled_iso_beats_bare() {
        let text = "Delivery: 30-01-2024\nDate: 2024-01-15";
        assert_eq!(extract_date(text), Some("2024-01-15".to_string()));
    }

    #[test]
    fn test_supplier_trimmed() {
        assert_eq!(
            extract_supplier("Supplier:   JASA Packaging Solutions B.V.  \nNext"),
            Some("JASA Packaging Solutions B.V.".to_string())
        );
        assert_eq!(
            extract_supplier("Vendor: Acme Corp"),
            Some("Acme Corp".to_string())
        );
    }

    #[test]
    fn test_delivery_address_block() {
        let text = "Total: 10.00\n\nDelivery Address:\nHSO Nederland B.V.\nPostbus 12345\n1234 AB Amsterdam\n\nNotes: none";
        let address = extract_delivery_address(text).unwrap();
        assert_eq!(address.company, "HSO Nederland B.V.");
        assert_eq!(address.address, "Postbus 12345, 1234 AB Amsterdam");
    }

    #[test]
    fn test_ship_to_label() {
        let text = "Ship To:\nAcme B.V.\nMain Street 1";
        let address = extract_delivery_address(text).unwrap();
        assert_eq!(address.company, "Acme B.V.");
        assert_eq!(address.address, "Main Street 1");
    }

    #[test]
    fn test_delivery_address_absent() {
        assert_eq!(extract_delivery_address("no address block"), None);
        // Label with no body leaves the field unset.
        assert_eq!(extract_delivery_address("Ship To:\n\n"), None);
    }
}
