//! Purchase order extraction: field rules, reconciliation, validation,
//! confidence scoring, and the pipeline that chains them.

mod confidence;
mod extractor;
mod pipeline;
mod reconcile;
pub mod rules;
mod validate;

pub use confidence::score;
pub use extractor::extract;
pub use pipeline::{ExtractionPipeline, ExtractionResult};
pub use reconcile::reconcile;
pub use validate::validate;
