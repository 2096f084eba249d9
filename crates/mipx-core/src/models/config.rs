//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{MipxError, Result};

/// Main configuration for the mipx pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MipxConfig {
    /// Field extraction configuration.
    pub extraction: ExtractionConfig,

    /// PDF text layer configuration.
    pub pdf: PdfConfig,
}

/// Field extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Correct digit/letter OCR confusions inside numeric tokens before
    /// amounts and dates are normalized.
    pub auto_correct: bool,

    /// Minimum length of a cleaned registration number.
    pub min_registration_len: usize,

    /// Continuation lines collected for the address.
    pub address_max_lines: usize,

    /// Continuation lines collected for the nominee name.
    pub nominee_max_lines: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            auto_correct: true,
            min_registration_len: 8,
            address_max_lines: 8,
            nominee_max_lines: 3,
        }
    }
}

/// PDF text layer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Insert `===== PAGE n =====` markers between pages.
    pub page_markers: bool,

    /// Maximum pages to read (0 = unlimited).
    pub max_pages: usize,

    /// Minimum text length to consider the PDF text layer usable.
    pub min_text_length: usize,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            page_markers: true,
            max_pages: 0,
            min_text_length: 50,
        }
    }
}

impl MipxConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Read a value by dotted key, e.g. `extraction.auto_correct`.
    pub fn get(&self, key: &str) -> Result<serde_json::Value> {
        let value = serde_json::to_value(self)?;
        key.split('.')
            .try_fold(&value, |node, part| node.get(part))
            .cloned()
            .ok_or_else(|| MipxError::Config(format!("unknown key: {}", key)))
    }

    /// Set a value by dotted key. The raw value is parsed as JSON first and
    /// falls back to a plain string.
    pub fn set(&mut self, key: &str, raw: &str) -> Result<()> {
        let mut root = serde_json::to_value(&*self)?;
        let new_value = serde_json::from_str(raw)
            .unwrap_or_else(|_| serde_json::Value::String(raw.to_string()));

        let mut node = &mut root;
        for part in key.split('.') {
            node = node
                .get_mut(part)
                .ok_or_else(|| MipxError::Config(format!("unknown key: {}", key)))?;
        }
        if node.is_object() {
            return Err(MipxError::Config(format!("{} is a section, not a value", key)));
        }
        *node = new_value;

        *self = serde_json::from_value(root)
            .map_err(|e| MipxError::Config(format!("invalid value for {}: {}", key, e)))?;
        Ok(())
    }
}
