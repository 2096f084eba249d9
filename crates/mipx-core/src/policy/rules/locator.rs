//! Keyword field locator.
//!
//! Finds the value that follows a label such as `Policy No:` in free-form
//! document text. Every keyword is expanded into spelling variants, each
//! variant is tried with four match shapes, and the longest plausible value
//! wins. Values come back upper-cased. The search is a pure fold over the
//! generated candidates.

use regex::{Captures, Regex};
use tracing::{trace, warn};

use super::normalize::{collapse_whitespace, letter_variant};
use super::patterns::{LABEL_LIKE_VALUE, NEW_LABEL_LINE, SECTION_HEADER};
use super::{CandidateMatch, FieldExtractor};

/// Score bonus for values assembled from more than one line.
pub const MULTILINE_BONUS: usize = 10;

/// Default cap on continuation lines.
pub const DEFAULT_MAX_LINES: usize = 5;

/// A label may start a line, follow punctuation, or follow a column gap.
const LABEL_PREFIX: &str = r"(?:^[ \t]*|[^A-Za-z0-9\s][ \t]*|[ \t]{2,})";

/// Options for a keyword search.
#[derive(Debug, Clone)]
pub struct LocateOptions {
    /// Collect continuation lines after the labeled line.
    pub multiline: bool,
    /// The raw value is narrowed to its first match of this pattern.
    pub value_pattern: Option<Regex>,
    /// Maximum continuation lines collected.
    pub max_lines: usize,
}

impl LocateOptions {
    /// Single-line search without a value pattern.
    pub fn new() -> Self {
        Self {
            multiline: false,
            value_pattern: None,
            max_lines: DEFAULT_MAX_LINES,
        }
    }

    /// Collect up to `max_lines` continuation lines.
    pub fn multiline(mut self, max_lines: usize) -> Self {
        self.multiline = true;
        self.max_lines = max_lines;
        self
    }

    /// Narrow values to their first match of `pattern`.
    pub fn value_pattern(mut self, pattern: Regex) -> Self {
        self.value_pattern = Some(pattern);
        self
    }
}

impl Default for LocateOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// A compiled keyword search for one set of label synonyms.
#[derive(Debug, Clone)]
pub struct KeywordLocator {
    shapes: Vec<Regex>,
    options: LocateOptions,
}

impl KeywordLocator {
    /// Compile the search for `keywords`.
    pub fn new(keywords: &[&str], options: LocateOptions) -> Self {
        let mut shapes = Vec::new();

        for keyword in keywords {
            for variant in expand_keyword(keyword) {
                for source in shape_sources(&variant) {
                    match Regex::new(&source) {
                        Ok(re) => shapes.push(re),
                        Err(e) => warn!("Skipping label pattern for {:?}: {}", variant, e),
                    }
                }
            }
        }

        Self { shapes, options }
    }

    /// Search options in effect.
    pub fn options(&self) -> &LocateOptions {
        &self.options
    }

    /// Best value following any of the labels, or an empty string.
    pub fn locate(&self, text: &str) -> String {
        self.best(text).map(|c| c.value).unwrap_or_default()
    }

    /// Highest-scoring candidate; ties keep the first one found.
    pub fn best(&self, text: &str) -> Option<CandidateMatch> {
        self.best_where(text, |_| true)
    }

    /// Highest-scoring candidate among those `accept` lets through.
    pub fn best_where(
        &self,
        text: &str,
        accept: impl Fn(&CandidateMatch) -> bool,
    ) -> Option<CandidateMatch> {
        self.candidates(text)
            .filter(|candidate| accept(candidate))
            .fold(None, |best, candidate| match best {
                Some(b) if b.score >= candidate.score => Some(b),
                _ => Some(candidate),
            })
    }

    /// Every acceptable candidate in search order: keyword, variant, shape,
    /// then position in the text.
    pub fn candidates<'a>(&'a self, text: &'a str) -> impl Iterator<Item = CandidateMatch> + 'a {
        self.shapes.iter().flat_map(move |shape| {
            shape
                .captures_iter(text)
                .filter_map(move |caps| self.candidate(text, &caps))
        })
    }

    fn candidate(&self, text: &str, caps: &Captures<'_>) -> Option<CandidateMatch> {
        let value_match = caps.name("value")?;
        let first = value_match.as_str().trim();

        if first.chars().count() < 2 || LABEL_LIKE_VALUE.is_match(first) {
            return None;
        }

        let mut lines = vec![first];
        if self.options.multiline {
            let rest = &text[value_match.end()..];
            for next in rest.split('\n').skip(1).take(self.options.max_lines) {
                let next = next.trim();
                if next.is_empty() || NEW_LABEL_LINE.is_match(next) {
                    break;
                }
                if lines.len() > 1 && SECTION_HEADER.is_match(next) {
                    break;
                }
                lines.push(next);
            }
        }

        let mut value = collapse_whitespace(&lines.join(" ")).to_uppercase();
        if let Some(pattern) = &self.options.value_pattern {
            if let Some(m) = pattern.find(&value) {
                value = m.as_str().trim().to_string();
            }
        }

        if value.is_empty() {
            return None;
        }

        let bonus = if lines.len() > 1 { MULTILINE_BONUS } else { 0 };
        let score = value.chars().count() + bonus;
        trace!("Label candidate {:?} (score {})", value, score);

        Some(CandidateMatch::new(value, score).with_position(value_match.start(), value_match.end()))
    }
}

impl FieldExtractor for KeywordLocator {
    type Output = CandidateMatch;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.best(text)
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        self.candidates(text).collect()
    }
}

/// Locate the value for `keywords` in `text`.
///
/// Compiles the search on every call; keep a [`KeywordLocator`] around when
/// the same labels are searched repeatedly.
pub fn locate(text: &str, keywords: &[&str], options: &LocateOptions) -> String {
    if text.is_empty() {
        return String::new();
    }
    KeywordLocator::new(keywords, options.clone()).locate(text)
}

/// Spelling variants of a label: as written, without spaces, hyphenated,
/// underscored, and with digits read as letters. Duplicates are dropped.
pub fn expand_keyword(keyword: &str) -> Vec<String> {
    let keyword = keyword.trim();
    let candidates = [
        keyword.to_string(),
        keyword.replace(' ', ""),
        keyword.replace(' ', "-"),
        keyword.replace(' ', "_"),
        letter_variant(keyword),
    ];

    let mut variants: Vec<String> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if !candidate.is_empty() && !variants.contains(&candidate) {
            variants.push(candidate);
        }
    }
    variants
}

/// The four match shapes for one label variant, in priority order.
fn shape_sources(variant: &str) -> [String; 4] {
    let label = regex::escape(variant);
    let flexible = variant
        .split_whitespace()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\s+");
    let end = label_end(variant);

    [
        // Label, separator, value on the same line (or the next, after a bare label).
        format!(r"(?im){LABEL_PREFIX}{label}{end}\s*[:=\-]\s*(?P<value>.+?)(?:\n|$)"),
        // Label, blank, value.
        format!(r"(?im){LABEL_PREFIX}{label}{end}\s+(?P<value>[^:=\-\s].*?)(?:\n|$)"),
        // Label at the start of a line.
        format!(r"(?im)^[ \t]*{label}{end}\s*[:=\-]?\s*(?P<value>.+?)(?:\n|$)"),
        // Label with flexible internal whitespace.
        format!(r"(?im){LABEL_PREFIX}{flexible}{end}\s*[:=\-]?\s*(?P<value>.+?)(?:\n|$)"),
    ]
}

/// Labels ending in a word character must end on a word boundary.
fn label_end(variant: &str) -> &'static str {
    match variant.chars().last() {
        Some(c) if c.is_alphanumeric() || c == '_' => r"\b",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find(text: &str, keywords: &[&str]) -> String {
        locate(text, keywords, &LocateOptions::new())
    }

    #[test]
    fn test_same_line_value_does_not_continue() {
        let text = "Policy No: ABC1234\nOther: X";
        assert_eq!(find(text, &["Policy No"]), "ABC1234");

        let multiline = LocateOptions::new().multiline(5);
        assert_eq!(locate(text, &["Policy No"], &multiline), "ABC1234");
    }

    #[test]
    fn test_value_is_upper_cased() {
        assert_eq!(find("insured name - Ravi Kumar", &["Insured Name"]), "RAVI KUMAR");
        assert_eq!(find("Insured Name: Ravi Kumar", &["Insured Name"]), "RAVI KUMAR");
    }

    #[test]
    fn test_multiline_stops_at_blank_line() {
        let text = "Address:\nFlat 4, Sea View\nLinking Road\nMumbai 400050\n\nPolicy No: X1";
        let options = LocateOptions::new().multiline(8);
        assert_eq!(
            locate(text, &["Address"], &options),
            "FLAT 4, SEA VIEW LINKING ROAD MUMBAI 400050"
        );
    }

    #[test]
    fn test_multiline_stops_at_new_label() {
        let text = "Address: 12 MG Road\nPune\nCity: Pune\nState: MH";
        let options = LocateOptions::new().multiline(8);
        assert_eq!(locate(text, &["Address"], &options), "12 MG ROAD PUNE");
    }

    #[test]
    fn test_multiline_section_header_after_first_extra_line() {
        let options = LocateOptions::new().multiline(8);

        // A header right after the labeled line is still collected.
        let text = "Nominee: Asha\nPolicy holder spouse\nVehicle details follow";
        assert_eq!(locate(text, &["Nominee"], &options), "ASHA POLICY HOLDER SPOUSE");
    }

    #[test]
    fn test_multiline_respects_max_lines() {
        let text = "Address: a1\nb2\nc3\nd4\ne5";
        let options = LocateOptions::new().multiline(2);
        assert_eq!(locate(text, &["Address"], &options), "A1 B2 C3");
    }

    #[test]
    fn test_rejects_short_and_label_like_values() {
        assert_eq!(find("Cover: X", &["Cover"]), "");
        assert_eq!(find("Cover: Type: Comprehensive", &["Cover"]), "");
    }

    #[test]
    fn test_label_must_start_at_boundary() {
        // "Type" is the tail of the longer "Fuel Type" label.
        assert_eq!(find("Fuel Type: Petrol", &["Type"]), "");
        assert_eq!(find("Body Type: Sedan", &["Type"]), "");
        assert_eq!(find("1. Type: Sedan", &["Type"]), "SEDAN");
        assert_eq!(find("Make: Honda    Type: Sedan", &["Type"]), "SEDAN");
    }

    #[test]
    fn test_label_must_end_at_word_boundary() {
        assert_eq!(find("CCTV: installed", &["CC"]), "");
        assert_eq!(find("CC: 1197", &["CC"]), "1197");
    }

    #[test]
    fn test_keyword_variants() {
        assert_eq!(find("POLICYNO: 998877", &["Policy No"]), "998877");
        assert_eq!(find("Policy_No = 998877", &["Policy No"]), "998877");
        assert_eq!(find("Policy   No  998877", &["Policy No"]), "998877");
        assert_eq!(
            expand_keyword("Sum Insured"),
            vec!["Sum Insured", "SumInsured", "Sum-Insured", "Sum_Insured"]
        );
    }

    #[test]
    fn test_value_pattern_narrows_match() {
        let options = LocateOptions::new().value_pattern(Regex::new(r"[0-9]{6}").unwrap());
        assert_eq!(locate("Pin: near station 411001", &["Pin"], &options), "411001");

        // No match keeps the raw value.
        assert_eq!(locate("Pin: not given", &["Pin"], &options), "NOT GIVEN");
    }

    #[test]
    fn test_longest_candidate_wins_and_ties_keep_first() {
        let text = "Premium: 500\nNet Premium: 12,500";
        assert_eq!(find(text, &["Premium", "Net Premium"]), "12,500");

        let tie = "Model: Swift\nModel: Dzire";
        assert_eq!(find(tie, &["Model"]), "SWIFT");
    }

    #[test]
    fn test_bare_label_takes_next_line() {
        assert_eq!(find("Insured Name:\nAnita Desai\n", &["Insured Name"]), "ANITA DESAI");
    }

    #[test]
    fn test_best_where_skips_rejected_candidates() {
        let locator = KeywordLocator::new(&["Engine Number", "Engine No"], LocateOptions::new());
        let text = "Engine Number: NOT AVAILABLE YET\nEngine No: K12MN12";

        assert_eq!(locator.locate(text), "NOT AVAILABLE YET");
        let with_digits =
            locator.best_where(text, |c| c.value.chars().any(|ch| ch.is_ascii_digit()));
        assert_eq!(with_digits.map(|c| c.value), Some("K12MN12".to_string()));
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(find("", &["Policy No"]), "");
        let locator = KeywordLocator::new(&["Policy No"], LocateOptions::new());
        assert!(locator.extract("nothing here").is_none());
        assert!(locator.extract_all("nothing here").is_empty());
    }
}
