//! CLI subcommands.

pub mod batch;
pub mod config;
pub mod fields;
pub mod process;

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::debug;

use mipx_core::pdf::PdfTextSource;
use mipx_core::{MipxConfig, PdfConfig};

/// Leading bytes of every PDF file.
const PDF_MAGIC: &[u8] = b"%PDF";

/// Default location of the configuration file.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("mipx")
        .join("config.json")
}

/// Load the configuration from an explicit path, the default location, or
/// fall back to defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<MipxConfig> {
    if let Some(path) = config_path {
        return Ok(MipxConfig::from_file(Path::new(path))?);
    }

    let default_path = default_config_path();
    if default_path.exists() {
        debug!("Using configuration from {}", default_path.display());
        Ok(MipxConfig::from_file(&default_path)?)
    } else {
        Ok(MipxConfig::default())
    }
}

/// Read the text of one document: a PDF text layer or a UTF-8 text file.
/// `-` reads standard input.
pub fn read_document(input: &Path, config: &PdfConfig) -> anyhow::Result<String> {
    let data = if input == Path::new("-") {
        let mut buf = Vec::new();
        std::io::stdin().read_to_end(&mut buf)?;
        buf
    } else {
        if !input.exists() {
            anyhow::bail!("Input file not found: {}", input.display());
        }
        fs::read(input)?
    };

    if data.starts_with(PDF_MAGIC) {
        debug!("Reading PDF text layer from {}", input.display());
        return Ok(PdfTextSource::text_from_bytes(&data, config)?);
    }

    match String::from_utf8(data) {
        Ok(text) => Ok(text),
        Err(_) => anyhow::bail!("Input is neither a PDF nor UTF-8 text: {}", input.display()),
    }
}

/// Whether a path looks like a supported document.
pub fn is_supported(path: &Path) -> bool {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    matches!(ext.to_lowercase().as_str(), "pdf" | "txt" | "text")
}
