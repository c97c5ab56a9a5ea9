//! Line item extraction.

use tracing::debug;

use crate::models::order::LineItem;

use super::amounts::parse_amount;
use super::patterns::LINE_ITEM;

/// Scan the whole text for bullet lines of the form
/// `- <product>: <qty> units @ €<price> = €<amount>`.
///
/// All non-overlapping matches are collected in order of appearance. Lines
/// whose numbers fail to parse are skipped, never an error.
pub fn extract_items(text: &str) -> Vec<LineItem> {
    let items: Vec<LineItem> = LINE_ITEM
        .captures_iter(text)
        .filter_map(|caps| {
            let quantity: u32 = caps[2].parse().ok()?;
            let unit_price = parse_amount(&caps[3])?;
            let total = parse_amount(&caps[4])?;

            Some(LineItem {
                product: caps[1].trim().to_string(),
                quantity,
                unit_price,
                total,
            })
        })
        .collect();

    debug!("extracted {} line items", items.len());
    items
}
