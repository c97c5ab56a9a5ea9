//! Extraction pipeline: raw text in, validated and scored order out.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::models::config::ExtractionConfig;
use crate::models::order::{ExtractedOrder, ValidationReport};

use super::confidence::score;
use super::extractor::extract_with;
use super::reconcile::reconcile;
use super::validate::validate;

/// Result of running the pipeline on one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// The extracted and reconciled order.
    #[serde(flatten)]
    pub order: ExtractedOrder,

    /// Presence/consistency report.
    pub validation: ValidationReport,

    /// Weighted confidence score in [0, 1], two decimal places.
    pub confidence_score: f32,

    /// Human-readable notes about fields that could not be extracted.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,

    /// Processing time in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_time_ms: Option<u64>,
}

/// The extraction pipeline: extract, reconcile, validate, score.
///
/// Stateless and side-effect-free per invocation; concurrent calls need no
/// coordination. The pipeline performs no I/O and cannot fail for any input
/// string.
pub struct ExtractionPipeline {
    /// Whether to extract the delivery address block.
    extract_delivery_address: bool,
    /// Results scoring below this are flagged for manual review.
    min_confidence: f32,
}

impl ExtractionPipeline {
    /// Create a pipeline with default settings.
    pub fn new() -> Self {
        Self {
            extract_delivery_address: true,
            min_confidence: 0.5,
        }
    }

    /// Create a pipeline from explicit configuration.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self {
            extract_delivery_address: config.extract_delivery_address,
            min_confidence: config.min_confidence,
        }
    }

    /// Set delivery address extraction.
    pub fn with_delivery_address(mut self, extract: bool) -> Self {
        self.extract_delivery_address = extract;
        self
    }

    /// Set the review threshold for the confidence warning.
    pub fn with_min_confidence(mut self, confidence: f32) -> Self {
        self.min_confidence = confidence;
        self
    }

    /// Run the full pipeline on raw document text.
    ///
    /// Each stage consumes only the previous stage's output; only the field
    /// extractor reads the raw text.
    pub fn process(&self, text: &str) -> ExtractionResult {
        let start = Instant::now();
        info!("extracting purchase order from {} characters of text", text.len());

        let order = extract_with(text, self.extract_delivery_address);
        let order = reconcile(order);
        let validation = validate(&order);
        let confidence_score = score(&validation);

        let mut warnings = Vec::new();
        if !validation.has_order_number {
            warnings.push("could not extract order number".to_string());
        }
        if !validation.has_date {
            warnings.push("could not extract date".to_string());
        }
        if !validation.has_supplier {
            warnings.push("could not extract supplier".to_string());
        }
        if !validation.has_items {
            warnings.push("could not extract line items".to_string());
        }
        if confidence_score < self.min_confidence {
            warnings.push(format!(
                "confidence {confidence_score:.2} below review threshold {:.2}",
                self.min_confidence
            ));
        }

        debug!(
            "extracted order {:?} with confidence {:.2}",
            order.order_number, confidence_score
        );

        ExtractionResult {
            order,
            validation,
            confidence_score,
            warnings,
            processing_time_ms: Some(start.elapsed().as_millis() as u64),
        }
    }
}

impl Default for ExtractionPipeline {
    fn default() -> Self {
        Self::new()
    }
}
