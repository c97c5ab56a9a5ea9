//! Confidence scoring: weighted sum over the validation report.

use crate::models::order::ValidationReport;

/// Field weights. They sum to 1.00 exactly.
const WEIGHT_ORDER_NUMBER: f32 = 0.25;
const WEIGHT_DATE: f32 = 0.15;
const WEIGHT_SUPPLIER: f32 = 0.20;
const WEIGHT_ITEMS: f32 = 0.25;
const WEIGHT_TOTALS_MATCH: f32 = 0.15;

/// Map a validation report to a confidence score in [0, 1].
///
/// Deterministic weighted sum, rounded to two decimal places (half away
/// from zero).
pub fn score(report: &ValidationReport) -> f32 {
    let mut score = 0.0f32;

    if report.has_order_number {
        score += WEIGHT_ORDER_NUMBER;
    }
    if report.has_date {
        score += WEIGHT_DATE;
    }
    if report.has_supplier {
        score += WEIGHT_SUPPLIER;
    }
    if report.has_items {
        score += WEIGHT_ITEMS;
    }
    if report.totals_match {
        score += WEIGHT_TOTALS_MATCH;
    }

    (score * 100.0).round() / 100.0
}
