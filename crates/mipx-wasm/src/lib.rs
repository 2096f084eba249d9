//! WASM bindings for motor insurance policy field extraction.
//!
//! This crate provides WebAssembly bindings for use in browsers and Node.js.
//! Documents are passed in as text; PDF reading stays on the JavaScript side.

use wasm_bindgen::prelude::*;

use mipx_core::{ExtractionConfig, ExtractionReport, Field, PolicyExtractor, PolicyParser};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Extract all policy fields from document text.
///
/// Returns an object with every field key; fields that were not found hold
/// an empty string.
#[wasm_bindgen]
pub fn extract_fields(text: &str) -> Result<JsValue, JsValue> {
    to_js(&mipx_core::extract(text))
}

/// Normalize a date to `YYYY-MM-DD`, or return the cleaned input.
#[wasm_bindgen]
pub fn normalize_date(text: &str) -> String {
    mipx_core::normalize_date(text)
}

/// Pull a plain number out of a currency-laden string.
#[wasm_bindgen]
pub fn extract_number(text: &str, allow_decimal: bool) -> String {
    mipx_core::extract_number(text, allow_decimal)
}

/// Every field key in output order.
#[wasm_bindgen]
pub fn field_keys() -> Vec<JsValue> {
    Field::ALL.iter().map(|f| JsValue::from_str(f.key())).collect()
}

/// Policy extractor class for browser use.
#[wasm_bindgen]
pub struct PolicyFieldExtractor {
    config: ExtractionConfig,
    parser: PolicyParser,
}

#[wasm_bindgen]
impl PolicyFieldExtractor {
    /// Create a new extractor with default settings.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        let config = ExtractionConfig::default();
        Self {
            parser: PolicyParser::with_config(config.clone()),
            config,
        }
    }

    /// Configure OCR digit correction of amounts and dates.
    #[wasm_bindgen]
    pub fn set_auto_correct(&mut self, enabled: bool) {
        self.config.auto_correct = enabled;
        self.parser = PolicyParser::with_config(self.config.clone());
    }

    /// Extract all fields from text.
    #[wasm_bindgen]
    pub fn extract(&self, text: &str) -> Result<JsValue, JsValue> {
        to_js(&self.parser.extract(text))
    }

    /// Extract a single field by key, e.g. `"POLICY_NO"`.
    ///
    /// Unknown keys log a console warning and yield an empty string.
    #[wasm_bindgen]
    pub fn extract_field(&self, key: &str, text: &str) -> String {
        match Field::from_key(key) {
            Some(field) => self.parser.extract_field(field, text),
            None => {
                web_sys::console::warn_1(&JsValue::from_str(&format!("unknown field: {}", key)));
                String::new()
            }
        }
    }

    /// Extract all fields along with found and missing counts.
    #[wasm_bindgen]
    pub fn extract_with_report(&self, text: &str) -> Result<JsValue, JsValue> {
        // std::time::Instant is unavailable on wasm32, time with the JS clock.
        let start = js_sys::Date::now();
        let record = self.parser.extract(text);
        let elapsed = (js_sys::Date::now() - start).max(0.0) as u64;

        to_js(&ExtractionReport::new(record, text, elapsed))
    }
}

impl Default for PolicyFieldExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}
