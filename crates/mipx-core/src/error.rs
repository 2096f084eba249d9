//! Error types for the mipx-core library.
//!
//! Field extraction itself never fails: a field that cannot be located is
//! reported as an empty string. These errors only arise at the edges, when
//! reading documents, configuration or serialized records.

use thiserror::Error;

/// Main error type for the mipx library.
#[derive(Error, Debug)]
pub enum MipxError {
    /// PDF text layer error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Record or schema error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to reading the embedded text layer of a PDF.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,

    /// Invalid page number requested.
    #[error("invalid page number: {0}")]
    InvalidPage(u32),
}

/// Errors related to the field schema and extraction records.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// A key that is not part of the field schema.
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// A serialized record that does not fit the schema.
    #[error("invalid record: {0}")]
    InvalidRecord(String),
}

/// Result type for the mipx library.
pub type Result<T> = std::result::Result<T, MipxError>;
