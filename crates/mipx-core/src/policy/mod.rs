//! Policy field extraction module.

mod parser;
pub mod rules;

pub use parser::{extract, PolicyParser};

use std::time::Instant;

use crate::models::{ExtractionRecord, ExtractionReport};

/// Trait for policy field extractors.
///
/// Extraction is total: it never fails, and fields that cannot be found are
/// left empty.
pub trait PolicyExtractor {
    /// Extract every schema field from a document's text.
    fn extract(&self, text: &str) -> ExtractionRecord;

    /// Extract and summarize, with timing.
    fn extract_with_report(&self, text: &str) -> ExtractionReport {
        let start = Instant::now();
        let record = self.extract(text);
        ExtractionReport::new(record, text, start.elapsed().as_millis() as u64)
    }
}
