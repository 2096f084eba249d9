//! Document text producers.
//!
//! The extractor only ever sees one string per document. Where that string
//! comes from (a text file, a PDF text layer, an external OCR run) is hidden
//! behind [`TextSource`].

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Result;

/// Something that yields the full text of one document.
pub trait TextSource {
    /// Read the document text.
    fn read_text(&self) -> Result<String>;
}

/// UTF-8 text from a file or held in memory.
#[derive(Debug, Clone)]
pub enum PlainTextSource {
    File(PathBuf),
    Memory(String),
}

impl PlainTextSource {
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }

    pub fn from_string(text: impl Into<String>) -> Self {
        Self::Memory(text.into())
    }
}

impl TextSource for PlainTextSource {
    fn read_text(&self) -> Result<String> {
        match self {
            Self::File(path) => {
                let text = fs::read_to_string(path)?;
                debug!("Read {} bytes of text from {}", text.len(), path.display());
                Ok(text)
            }
            Self::Memory(text) => Ok(text.clone()),
        }
    }
}

impl TextSource for str {
    fn read_text(&self) -> Result<String> {
        Ok(self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_memory_source() {
        let source = PlainTextSource::from_string("Policy No: X1234");
        assert_eq!(source.read_text().unwrap(), "Policy No: X1234");
        assert_eq!("abc".read_text().unwrap(), "abc");
    }

    #[test]
    fn test_file_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Make: Maruti").unwrap();

        let source = PlainTextSource::from_path(file.path());
        assert_eq!(source.read_text().unwrap(), "Make: Maruti\n");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let source = PlainTextSource::from_path("/nonexistent/policy.txt");
        assert!(matches!(
            source.read_text(),
            Err(crate::error::MipxError::Io(_))
        ));
    }
}
