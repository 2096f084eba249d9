//! Embedded PDF text layer as a document text source.
//!
//! Only text the PDF already carries is read. Scanned pages without a text
//! layer yield little or no text.

mod extractor;

pub use extractor::PdfReader;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::PdfError;
use crate::models::PdfConfig;
use crate::source::TextSource;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Text of a PDF file, page by page.
#[derive(Debug, Clone)]
pub struct PdfTextSource {
    path: PathBuf,
    config: PdfConfig,
}

impl PdfTextSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            config: PdfConfig::default(),
        }
    }

    /// Set the PDF configuration.
    pub fn with_config(mut self, config: PdfConfig) -> Self {
        self.config = config;
        self
    }

    /// Read the text layer of PDF bytes.
    ///
    /// Pages are read one at a time and joined, each introduced by a
    /// `===== PAGE n =====` marker when enabled. When the per-page text is
    /// shorter than `min_text_length`, the whole-document reader is tried
    /// instead.
    pub fn text_from_bytes(data: &[u8], config: &PdfConfig) -> Result<String> {
        let reader = PdfReader::load(data)?;

        let page_count = reader.page_count();
        let last_page = match config.max_pages {
            0 => page_count,
            max => page_count.min(max as u32),
        };

        let mut pages = Vec::with_capacity(last_page as usize);
        for page in 1..=last_page {
            match reader.extract_page_text(page) {
                Ok(text) => pages.push((page, text)),
                Err(e) => {
                    warn!("No text on page {}: {}", page, e);
                    pages.push((page, String::new()));
                }
            }
        }

        let text = join_pages(&pages, config.page_markers);
        let content_len: usize = pages.iter().map(|(_, t)| t.trim().chars().count()).sum();
        debug!("Read {} characters from {} pages", content_len, pages.len());

        if content_len < config.min_text_length {
            debug!("Page text too short, reading whole document");
            let whole = reader.extract_text()?;
            if whole.trim().chars().count() > content_len {
                return Ok(whole);
            }
        }

        Ok(text)
    }
}

impl TextSource for PdfTextSource {
    fn read_text(&self) -> crate::error::Result<String> {
        let data = fs::read(&self.path)?;
        Ok(Self::text_from_bytes(&data, &self.config)?)
    }
}

/// Join page texts, optionally introducing each with a page marker.
pub fn join_pages(pages: &[(u32, String)], markers: bool) -> String {
    let mut out = String::new();
    for (number, text) in pages {
        if markers {
            out.push_str(&format!("\n\n===== PAGE {} =====\n\n", number));
        } else if !out.is_empty() {
            out.push_str("\n\n");
        }
        out.push_str(text.trim_end());
    }
    out.trim_start().to_string()
}
