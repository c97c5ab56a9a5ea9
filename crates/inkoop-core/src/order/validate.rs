//! Validation: presence and monetary consistency of an extracted order.

use rust_decimal::Decimal;

use crate::models::order::{ExtractedOrder, ValidationReport};

/// Tolerance for the subtotal + VAT = total identity.
fn totals_tolerance() -> Decimal {
    Decimal::new(1, 2) // 0.01
}

/// Compute the validation report for an order.
///
/// Total function: absent monetary fields count as zero in the consistency
/// check, so an order with no financial data at all passes `totals_match`
/// (0 + 0 - 0 = 0). That degenerate pass is intentional.
pub fn validate(order: &ExtractedOrder) -> ValidationReport {
    let difference = order.subtotal.unwrap_or_default()
        + order.vat_amount.unwrap_or_default()
        - order.total.unwrap_or_default();

    ValidationReport {
        has_order_number: order
            .order_number
            .as_deref()
            .is_some_and(|s| !s.is_empty()),
        has_date: order.date.as_deref().is_some_and(|s| !s.is_empty()),
        has_supplier: order.supplier.as_deref().is_some_and(|s| !s.is_empty()),
        has_items: !order.items.is_empty(),
        totals_match: difference.abs() < totals_tolerance(),
    }
}
