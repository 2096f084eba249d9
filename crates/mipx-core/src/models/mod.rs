//! Data models for policy extraction.

pub mod config;
pub mod record;

pub use config::{ExtractionConfig, MipxConfig, PdfConfig};
pub use record::{ExtractionRecord, ExtractionReport, Field, FieldKind, FieldStatus};
