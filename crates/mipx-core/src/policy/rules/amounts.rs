//! Numeric extraction for premiums, taxes and insured values.

use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;

use super::FieldExtractor;

lazy_static! {
    // Currency symbols and unit words around Indian amounts
    static ref CURRENCY_NOISE: Regex = Regex::new(
        r"(?i)₹|\$|€|£|\bINR\b\.?|\bRs\b\.?|\b(?:rupees?|only|lakhs?|crores?|thousands?)\b"
    ).unwrap();

    // `.50` is a bare fraction unless the dot ends a word (`No.5`)
    static ref DECIMAL_NUMBER: Regex = Regex::new(r"[0-9][0-9,]*(?:\.[0-9]+)?|\.[0-9]+").unwrap();

    static ref INTEGER_NUMBER: Regex = Regex::new(r"[0-9][0-9,]*").unwrap();
}

/// A positive number found in text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericValue {
    /// Digits as written, thousands separators removed.
    pub text: String,
    /// Parsed value.
    pub value: Decimal,
}

/// Number extractor.
pub struct AmountExtractor {
    allow_decimal: bool,
}

impl AmountExtractor {
    /// Extractor that keeps decimal fractions.
    pub fn new() -> Self {
        Self { allow_decimal: true }
    }

    /// Set whether decimal fractions are part of a number.
    pub fn with_decimals(mut self, allow_decimal: bool) -> Self {
        self.allow_decimal = allow_decimal;
        self
    }
}

impl Default for AmountExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for AmountExtractor {
    type Output = NumericValue;

    /// The largest number; equal values keep the earliest.
    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text)
            .into_iter()
            .fold(None, |best: Option<NumericValue>, candidate| match best {
                Some(b) if b.value >= candidate.value => Some(b),
                _ => Some(candidate),
            })
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let cleaned = CURRENCY_NOISE.replace_all(text, " ");
        let pattern: &Regex = if self.allow_decimal {
            &*DECIMAL_NUMBER
        } else {
            &*INTEGER_NUMBER
        };

        pattern
            .find_iter(&cleaned)
            .filter_map(|m| {
                let mut digits = m.as_str().replace(',', "");
                if digits.starts_with('.') {
                    let after_word = cleaned[..m.start()]
                        .chars()
                        .next_back()
                        .is_some_and(char::is_alphanumeric);
                    if after_word {
                        digits.remove(0);
                    } else {
                        digits.insert(0, '0');
                    }
                }
                let value = Decimal::from_str(&digits).ok()?;
                (value > Decimal::ZERO).then_some(NumericValue { text: digits, value })
            })
            .collect()
    }
}

/// Extract the headline number from a value such as `Rs. 1,25,000.50 only`.
///
/// Currency symbols and unit words are dropped, every number is collected
/// with thousands separators removed, and the largest positive one is
/// returned as written. Equal magnitudes keep the leftmost. Returns an empty
/// string when nothing parses.
pub fn extract_number(text: &str, allow_decimal: bool) -> String {
    AmountExtractor::new()
        .with_decimals(allow_decimal)
        .extract(text)
        .map(|n| n.text)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rupee_amount_with_words() {
        assert_eq!(extract_number("₹1,25,000.50 only", true), "125000.50");
        assert_eq!(extract_number("Rs. 12,500", true), "12500");
        assert_eq!(extract_number("Rupees 7,450 Only", true), "7450");
    }

    #[test]
    fn test_integer_only() {
        assert_eq!(extract_number("INR 45,000", false), "45000");
        assert_eq!(extract_number("45,000.75", false), "45000");
        assert_eq!(extract_number("1197 cc", false), "1197");
    }

    #[test]
    fn test_largest_magnitude_wins() {
        assert_eq!(extract_number("OD 2,345 + TP 10,500", true), "10500");
        assert_eq!(extract_number("20%", true), "20");
    }

    #[test]
    fn test_bare_fraction() {
        assert_eq!(extract_number(".50", true), "0.50");
        assert_eq!(extract_number("Rs. .75 only", true), "0.75");
        assert_eq!(extract_number("Sl.No.5", true), "5");
        assert_eq!(extract_number("0.50", true), "0.50");
    }

    #[test]
    fn test_equal_magnitudes_keep_first() {
        assert_eq!(extract_number("500.00 / 500", true), "500.00");
        assert_eq!(extract_number("500 / 500.00", true), "500");
    }

    #[test]
    fn test_non_positive_and_empty() {
        assert_eq!(extract_number("Rs. 0.00", true), "");
        assert_eq!(extract_number("Nil", true), "");
        assert_eq!(extract_number("", true), "");
    }

    #[test]
    fn test_idempotent() {
        for input in ["₹1,25,000.50 only", "INR 45,000", "OD 2,345 + TP 10,500", "Nil"] {
            for allow_decimal in [true, false] {
                let once = extract_number(input, allow_decimal);
                assert_eq!(extract_number(&once, allow_decimal), once);
            }
        }
    }

    #[test]
    fn test_extract_all() {
        let numbers = AmountExtractor::new().extract_all("OD 2,345.50, TP 0, GST 18");
        let texts: Vec<&str> = numbers.iter().map(|n| n.text.as_str()).collect();
        assert_eq!(texts, vec!["2345.50", "18"]);
    }
}
