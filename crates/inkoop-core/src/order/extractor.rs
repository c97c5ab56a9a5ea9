//! Field extractor: aggregate the per-field rules into one order record.

use crate::models::order::ExtractedOrder;

use super::rules::{
    extract_date, extract_delivery_address, extract_items, extract_order_number, extract_supplier,
    extract_totals,
};

/// Extract an order from raw document text.
///
/// Best-effort and total: fields whose patterns do not match stay absent.
pub fn extract(text: &str) -> ExtractedOrder {
    extract_with(text, true)
}

pub(super) fn extract_with(text: &str, include_delivery_address: bool) -> ExtractedOrder {
    let totals = extract_totals(text);

    ExtractedOrder {
        order_number: extract_order_number(text),
        date: extract_date(text),
        supplier: extract_supplier(text),
        items: extract_items(text),
        subtotal: totals.subtotal,
        vat_rate: totals.vat_rate,
        vat_amount: totals.vat_amount,
        total: totals.total,
        delivery_address: if include_delivery_address {
            extract_delivery_address(text)
        } else {
            None
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn test_extract_is_total_on_garbage() {
        assert_eq!(extract(""), ExtractedOrder::new());
        assert_eq!(extract("\u{0}\u{fffd} binary noise :: @@"), ExtractedOrder::new());
    }

    #[test]
    fn test_extract_sample_document() {
        let text = "PURCHASE ORDER\n\nOrder Number: APO-00199\nDate: 2024-01-15\nSupplier: Mock Supplier B.V.\n\nItems:\n- Product A: 100 units @ €25.00 = €2,500.00\n- Product B: 50 units @ €15.00 = €750.00\n\nSubtotal: €3,250.00\nVAT (21%): €682.50\nTotal: €3,932.50\n";
        let order = extract(text);

        assert_eq!(order.order_number, Some("APO-00199".to_string()));
        assert_eq!(order.date, Some("2024-01-15".to_string()));
        assert_eq!(order.supplier, Some("Mock Supplier B.V.".to_string()));
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.subtotal, Some(Decimal::from_str("3250.00").unwrap()));
        assert_eq!(order.vat_rate, Some(Decimal::from_str("0.21").unwrap()));
        assert_eq!(order.vat_amount, Some(Decimal::from_str("682.50").unwrap()));
        assert_eq!(order.total, Some(Decimal::from_str("3932.50").unwrap()));
    }

    #[test]
    fn test_delivery_address_toggle() {
        let text = "Ship To:\nAcme B.V.\nMain Street 1";
        assert!(extract_with(text, true).delivery_address.is_some());
        assert!(extract_with(text, false).delivery_address.is_none());
    }
}
