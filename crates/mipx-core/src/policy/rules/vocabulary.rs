//! Controlled vocabularies matched by presence rather than by label.
//!
//! Each vocabulary is a fixed ordered list. When several entries occur in a
//! document, the one listed first wins, regardless of where it appears in
//! the text.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::warn;

use super::FieldExtractor;

/// Insurers, in priority order.
pub const INSURERS: &[&str] = &[
    "LIC",
    "HDFC",
    "ICICI",
    "Bajaj",
    "Reliance",
    "Tata",
    "New India",
    "United India",
    "Oriental",
    "National",
    "Future Generali",
    "Royal Sundaram",
    "Bharti AXA",
    "IFFCO Tokio",
    "SBI General",
    "Kotak",
    "Go Digit",
    "Acko",
];

/// Vehicle makes, in priority order.
pub const VEHICLE_MAKES: &[&str] = &[
    "Maruti",
    "Hyundai",
    "Honda",
    "Toyota",
    "Tata",
    "Mahindra",
    "Ford",
    "Volkswagen",
    "Nissan",
    "Renault",
    "Skoda",
    "MG",
    "Kia",
    "Jeep",
    "BMW",
    "Mercedes",
    "Audi",
    "Jaguar",
    "Land Rover",
    "Volvo",
];

/// Fuel types, in priority order.
pub const FUEL_TYPES: &[&str] = &[
    "Petrol",
    "Diesel",
    "CNG",
    "LPG",
    "Electric",
    "Hybrid",
    "Petrol+CNG",
    "Diesel+CNG",
];

/// Nominee relationships, in priority order.
pub const RELATIONSHIPS: &[&str] = &[
    "Father", "Mother", "Son", "Daughter", "Spouse", "Wife", "Husband", "Brother", "Sister",
];

lazy_static! {
    pub static ref INSURER_VOCABULARY: Vocabulary = Vocabulary::new(INSURERS);
    pub static ref MAKE_VOCABULARY: Vocabulary = Vocabulary::new(VEHICLE_MAKES);
    pub static ref FUEL_VOCABULARY: Vocabulary = Vocabulary::new(FUEL_TYPES);
    pub static ref RELATIONSHIP_VOCABULARY: Vocabulary =
        Vocabulary::new(RELATIONSHIPS).near("Nominee");
}

#[derive(Debug, Clone)]
struct Entry {
    value: &'static str,
    pattern: Regex,
}

/// A fixed ordered list of values, each matched case-insensitively as a
/// whole word.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    entries: Vec<Entry>,
}

impl Vocabulary {
    pub fn new(values: &[&'static str]) -> Self {
        let entries = values
            .iter()
            .filter_map(|value| compile(value, &word(value)))
            .collect();
        Self { entries }
    }

    /// Only count a value that shares a line with `anchor`.
    pub fn near(self, anchor: &str) -> Self {
        let anchor = regex::escape(anchor);
        let entries = self
            .entries
            .iter()
            .filter_map(|entry| {
                let value = word(entry.value);
                let source = format!(r"{anchor}[^\n]*{value}|{value}[^\n]*{anchor}");
                compile(entry.value, &source)
            })
            .collect();
        Self { entries }
    }

    /// The values, in priority order.
    pub fn values(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|e| e.value)
    }

    /// First value in list order that occurs in the text.
    pub fn find_first(&self, text: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|entry| entry.pattern.is_match(text))
            .map(|entry| entry.value)
    }
}

impl FieldExtractor for Vocabulary {
    type Output = &'static str;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.find_first(text)
    }

    /// Every value that occurs, in list order.
    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        self.entries
            .iter()
            .filter(|entry| entry.pattern.is_match(text))
            .map(|entry| entry.value)
            .collect()
    }
}

fn word(value: &str) -> String {
    format!(r"\b{}\b", regex::escape(value))
}

fn compile(value: &'static str, source: &str) -> Option<Entry> {
    match Regex::new(&format!("(?i){source}")) {
        Ok(pattern) => Some(Entry { value, pattern }),
        Err(e) => {
            warn!("Skipping vocabulary entry {:?}: {}", value, e);
            None
        }
    }
}
