//! Totals reconciliation: derive missing financial totals from present ones.

use tracing::debug;

use crate::models::order::ExtractedOrder;

/// Fill in missing financial totals using fixed arithmetic identities.
///
/// Rules, applied in this exact order, each firing only when its target
/// field is absent:
/// 1. subtotal = sum of line item totals (when items exist)
/// 2. vat_amount = subtotal * vat_rate
/// 3. total = subtotal + vat_amount
///
/// Present fields are never overwritten, which makes reconciliation
/// idempotent. These are the only derivations: the rate is never backed out
/// of an amount, and the subtotal is never derived from the total.
pub fn reconcile(mut order: ExtractedOrder) -> ExtractedOrder {
    if !order.items.is_empty() && order.subtotal.is_none() {
        let subtotal = order.items.iter().map(|item| item.total).sum();
        debug!("derived subtotal {} from {} line items", subtotal, order.items.len());
        order.subtotal = Some(subtotal);
    }

    if order.vat_amount.is_none() {
        if let (Some(subtotal), Some(rate)) = (order.subtotal, order.vat_rate) {
            order.vat_amount = Some(subtotal * rate);
        }
    }

    if order.total.is_none() {
        if let (Some(subtotal), Some(vat_amount)) = (order.subtotal, order.vat_amount) {
            order.total = Some(subtotal + vat_amount);
        }
    }

    order
}
