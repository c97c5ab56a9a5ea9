//! Rule-based field extractors for purchase order text.
//!
//! Each scalar field is driven by an ordered list of patterns: the first
//! pattern that matches wins and later ones are not consulted, even if they
//! would also match. This keeps the priority of ambiguous labels auditable
//! per field. A non-match is never an error; the field simply stays absent.

pub mod amounts;
pub mod items;
pub mod patterns;
pub mod scalars;

pub use amounts::{OrderTotals, extract_totals, parse_amount};
pub use items::extract_items;
pub use scalars::{
    extract_date, extract_delivery_address, extract_order_number, extract_supplier,
};

use regex::Regex;

/// Apply ordered matcher rules to `text`, returning the first capture of the
/// first rule that matches.
pub(crate) fn first_capture(text: &str, rules: &[&Regex]) -> Option<String> {
    rules
        .iter()
        .find_map(|rule| rule.captures(text).map(|caps| caps[1].to_string()))
}
