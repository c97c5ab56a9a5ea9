//! Core library for purchase order document processing.
//!
//! This crate turns raw, loosely formatted document text (the output of an
//! external PDF/OCR step) into a validated, confidence-scored purchase order
//! record. It provides:
//! - Pattern-based field extraction (order number, date, supplier, line items)
//! - Reconciliation of missing financial totals
//! - Presence/consistency validation and a weighted confidence score
//! - Collaborator interfaces for text sources and persistence sinks
//!
//! Every extraction stage is a total function: malformed or empty input
//! yields absent fields and a low confidence score, never an error.

pub mod error;
pub mod models;
pub mod order;
pub mod store;

pub use error::{InkoopError, Result};
pub use models::config::{ExtractionConfig, InkoopConfig, OutputConfig};
pub use models::order::{DeliveryAddress, ExtractedOrder, LineItem, ValidationReport};
pub use order::{ExtractionPipeline, ExtractionResult, extract, reconcile, score, validate};
pub use store::{DocumentSink, MemorySink, TextSource};
