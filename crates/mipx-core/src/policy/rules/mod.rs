//! Rule-based field extractors for motor insurance policies.

pub mod amounts;
pub mod dates;
pub mod identifiers;
pub mod keywords;
pub mod locator;
pub mod normalize;
pub mod patterns;
pub mod vocabulary;

pub use amounts::{extract_number, AmountExtractor, NumericValue};
pub use dates::{normalize_date, DateExtractor};
pub use identifiers::{
    clean_identifier, extract_chassis, extract_email, extract_engine, extract_mobile,
    extract_pincode, extract_policy_number, extract_registration, extract_year, find_six_digits,
    last_ten_digits,
};
pub use keywords::synonyms;
pub use locator::{expand_keyword, locate, KeywordLocator, LocateOptions};
pub use normalize::{collapse_whitespace, fix_numeric_confusions, normalize};
pub use vocabulary::Vocabulary;

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// A located value with its ranking score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateMatch {
    /// Extracted value.
    pub value: String,
    /// Ranking score, higher is better.
    pub score: usize,
    /// Byte span of the first value line in the source text.
    pub position: Option<(usize, usize)>,
}

impl CandidateMatch {
    pub fn new(value: impl Into<String>, score: usize) -> Self {
        Self {
            value: value.into(),
            score,
            position: None,
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = Some((start, end));
        self
    }
}
