//! Text normalization for noisy OCR output.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
}

/// Letter confusions applied everywhere by [`normalize`].
pub const LETTER_CONFUSIONS: &[(char, char)] = &[('|', 'I'), ('l', 'I')];

/// Digit confusions applied only inside numeric-looking tokens.
pub const DIGIT_CONFUSIONS: &[(char, char)] = &[
    ('O', '0'),
    ('o', '0'),
    ('I', '1'),
    ('l', '1'),
    ('|', '1'),
];

/// Separators allowed inside a numeric-looking token.
const NUMERIC_SEPARATORS: &[char] = &[',', '.', '/', '-'];

/// Collapse runs of whitespace to a single space and trim.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text.trim(), " ").into_owned()
}

/// Normalize text for matching.
///
/// Collapses whitespace, repairs digit confusions inside numeric tokens
/// (`2O23` becomes `2023`) and then maps `|` and lowercase `l` to `I`
/// everywhere. The letter mapping is lossy (`Model` becomes `ModeI`), so
/// callers should only match against the result, never return it.
pub fn normalize(text: &str) -> String {
    let collapsed = collapse_whitespace(text);
    fix_numeric_confusions(&collapsed)
        .chars()
        .map(|c| substitute(c, LETTER_CONFUSIONS))
        .collect()
}

/// Repair digit/letter confusions inside numeric-looking tokens only.
///
/// A token is numeric-looking when it consists of digits, confusable
/// letters and `, . / -`, and holds at least two real digits.
pub fn fix_numeric_confusions(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut token = String::new();

    for c in text.chars() {
        if c.is_whitespace() {
            flush_token(&mut out, &mut token);
            out.push(c);
        } else {
            token.push(c);
        }
    }
    flush_token(&mut out, &mut token);

    out
}

/// Variant of a keyword with digits replaced by look-alike letters
/// (`0` to `O`, `1` to `I`), for labels that were themselves misread.
pub fn letter_variant(keyword: &str) -> String {
    keyword.replace('0', "O").replace('1', "I")
}

fn flush_token(out: &mut String, token: &mut String) {
    if is_numeric_looking(token) {
        out.extend(token.chars().map(|c| substitute(c, DIGIT_CONFUSIONS)));
    } else {
        out.push_str(token);
    }
    token.clear();
}

fn is_numeric_looking(token: &str) -> bool {
    let digits = token.chars().filter(|c| c.is_ascii_digit()).count();
    digits >= 2
        && token.chars().all(|c| {
            c.is_ascii_digit()
                || NUMERIC_SEPARATORS.contains(&c)
                || DIGIT_CONFUSIONS.iter().any(|(from, _)| *from == c)
        })
}

fn substitute(c: char, table: &[(char, char)]) -> char {
    table
        .iter()
        .find(|(from, _)| *from == c)
        .map(|(_, to)| *to)
        .unwrap_or(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  Policy \t No:\n\n 123  "), "Policy No: 123");
        assert_eq!(collapse_whitespace(""), "");
    }

    #[test]
    fn test_fix_numeric_confusions_scoped_to_numbers() {
        assert_eq!(fix_numeric_confusions("Premium 12,5OO"), "Premium 12,500");
        assert_eq!(fix_numeric_confusions("0l/O4/2O23"), "01/04/2023");
        // Words keep their letters.
        assert_eq!(fix_numeric_confusions("OLD Model IO"), "OLD Model IO");
        // A single digit is not enough evidence.
        assert_eq!(fix_numeric_confusions("O1"), "O1");
    }

    #[test]
    fn test_normalize_applies_letter_table() {
        assert_eq!(normalize("Po|icy   No"), "PoIicy No");
        assert_eq!(normalize("Year 2O1l"), "Year 2011");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize("  Fuel | Type:  Petro1  2O23 ");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_letter_variant() {
        assert_eq!(letter_variant("P0licy N0 1"), "POlicy NO I");
    }
}
