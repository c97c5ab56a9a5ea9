//! External collaborator interfaces: text sources and persistence sinks.
//!
//! The core only defines the call boundaries here; real backends (object
//! storage, OCR services) live outside this crate. The pipeline does not
//! depend on a sink's availability and never retries on its behalf.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;

use crate::error::{InkoopError, Result};
use crate::order::ExtractionResult;

/// Anything that can hand the pipeline raw document text: a PDF/OCR
/// extractor, a manual paste, a test fixture. No layout fidelity is
/// guaranteed.
pub trait TextSource {
    /// Produce the raw text for one document.
    fn raw_text(&self) -> Result<String>;
}

impl TextSource for str {
    fn raw_text(&self) -> Result<String> {
        Ok(self.to_string())
    }
}

impl TextSource for String {
    fn raw_text(&self) -> Result<String> {
        Ok(self.clone())
    }
}

/// Accepts a serialized extraction result and returns a location identifier
/// (blob name, URL, file path).
pub trait DocumentSink {
    /// Persist the result, returning where it was stored.
    fn save(&self, result: &ExtractionResult) -> Result<String>;
}

/// In-memory sink that stores serialized results keyed by a generated
/// location name. Useful for tests and demos.
#[derive(Debug, Default)]
pub struct MemorySink {
    documents: Mutex<HashMap<String, String>>,
    counter: AtomicU64,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch a stored document by its location identifier.
    pub fn get(&self, location: &str) -> Option<String> {
        self.documents
            .lock()
            .ok()
            .and_then(|docs| docs.get(location).cloned())
    }

    /// Number of stored documents.
    pub fn len(&self) -> usize {
        self.documents.lock().map(|docs| docs.len()).unwrap_or(0)
    }

    /// Whether the sink is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DocumentSink for MemorySink {
    fn save(&self, result: &ExtractionResult) -> Result<String> {
        let json = serde_json::to_string(result)?;
        let sequence = self.counter.fetch_add(1, Ordering::Relaxed);
        let location = format!("extracted_data/order_{sequence}.json");

        let mut docs = self
            .documents
            .lock()
            .map_err(|_| InkoopError::Storage("sink mutex poisoned".to_string()))?;
        docs.insert(location.clone(), json);

        debug!("stored extraction result at {location}");
        Ok(location)
    }
}
