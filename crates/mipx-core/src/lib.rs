//! Core library for motor insurance policy field extraction.
//!
//! This crate provides:
//! - Text normalization for noisy OCR output
//! - A keyword field locator (label synonyms, multi-line values, scoring)
//! - Value normalizers for amounts and dates
//! - A fixed 42-field policy schema and a total extractor over it
//! - Document text sources (plain text, PDF text layer)
//!
//! ```
//! let record = mipx_core::extract("Policy No: MH12AB3456\nMake: Maruti");
//! assert_eq!(record.get(mipx_core::Field::PolicyNo), "MH12AB3456");
//! assert_eq!(record.get(mipx_core::Field::VehicleMake), "Maruti");
//! assert_eq!(record.get(mipx_core::Field::CustomerName), "");
//! ```

pub mod error;
pub mod models;
#[cfg(feature = "pdf")]
pub mod pdf;
pub mod policy;
pub mod source;

pub use error::{ExtractionError, MipxError, PdfError, Result};
pub use models::{
    ExtractionConfig, ExtractionRecord, ExtractionReport, Field, FieldKind, FieldStatus,
    MipxConfig, PdfConfig,
};
#[cfg(feature = "pdf")]
pub use pdf::PdfTextSource;
pub use policy::rules::{extract_number, locate, normalize, normalize_date, LocateOptions};
pub use policy::{extract, PolicyExtractor, PolicyParser};
pub use source::{PlainTextSource, TextSource};
