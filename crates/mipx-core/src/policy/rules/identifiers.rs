//! Direct-pattern extractors for identifiers that need no label context
//! (or only a fixed one): policy, registration, chassis and engine numbers,
//! mobile numbers, e-mail addresses, manufacture year and pincode.

use regex::Regex;

use super::dates::month_name_date_spans;
use super::patterns::{
    CHASSIS_LABELED, CHASSIS_SHORT, EMAIL, ENGINE_LABELED, ENGINE_SHORT, MOBILE_LABELED,
    MOBILE_PLAIN, MOBILE_SPACED, PINCODE_LABELED, PINCODE_TRAILING, POLICY_NO_INLINE,
    POLICY_NO_LABELED, POLICY_NO_SHORT, REGISTRATION_LABELED, REGISTRATION_PLATE, SIX_DIGITS,
    YEAR_LABELED, YEAR_STANDALONE, YEAR_TRAILING,
};

/// Minimum cleaned length of a chassis number.
pub const MIN_CHASSIS_LEN: usize = 10;

/// Minimum cleaned length of an engine number.
pub const MIN_ENGINE_LEN: usize = 6;

/// Accepted manufacture years.
const YEAR_RANGE: std::ops::RangeInclusive<u32> = 1990..=2030;

/// Upper-case and strip whitespace and hyphens: `mh 12-ab 3456` becomes `MH12AB3456`.
pub fn clean_identifier(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .flat_map(char::to_uppercase)
        .collect()
}

/// Policy number from `Policy No: ...`, `Policy ABC12345` or `POL: ...`.
pub fn extract_policy_number(text: &str) -> Option<String> {
    first_capture(text, &[&POLICY_NO_LABELED, &POLICY_NO_INLINE, &POLICY_NO_SHORT])
}

/// Indian registration plate, labeled first, then standalone.
///
/// A standalone plate whose cleaned form equals `claimed` (usually the
/// policy number) is skipped. Returned cleaned.
pub fn extract_registration(text: &str, claimed: Option<&str>) -> Option<String> {
    if let Some(caps) = REGISTRATION_LABELED.captures(text) {
        return Some(clean_identifier(&caps[1]));
    }

    let claimed = claimed.map(clean_identifier);
    REGISTRATION_PLATE
        .find_iter(text)
        .map(|m| clean_identifier(m.as_str()))
        .find(|plate| claimed.as_deref() != Some(plate.as_str()))
}

/// Chassis number from `Chassis No: ...` or `CH: ...`, cleaned.
pub fn extract_chassis(text: &str) -> Option<String> {
    [&*CHASSIS_LABELED, &*CHASSIS_SHORT]
        .into_iter()
        .filter_map(|pattern| pattern.captures(text))
        .map(|caps| clean_identifier(&caps[1]))
        .find(|value| is_plausible_code(value, MIN_CHASSIS_LEN))
}

/// Engine number from `Engine No: ...` or `EN: ...`, cleaned.
pub fn extract_engine(text: &str) -> Option<String> {
    [&*ENGINE_LABELED, &*ENGINE_SHORT]
        .into_iter()
        .filter_map(|pattern| pattern.captures(text))
        .map(|caps| clean_identifier(&caps[1]))
        .find(|value| is_plausible_code(value, MIN_ENGINE_LEN))
}

/// A chassis or engine code: long enough and not a plain word.
pub fn is_plausible_code(value: &str, min_len: usize) -> bool {
    value.chars().count() >= min_len && value.chars().any(|c| c.is_ascii_digit())
}

/// Indian mobile number, reduced to its last 10 digits.
pub fn extract_mobile(text: &str) -> Option<String> {
    [&*MOBILE_PLAIN, &*MOBILE_SPACED, &*MOBILE_LABELED]
        .into_iter()
        .filter_map(|pattern| pattern.find(text))
        .find_map(|m| last_ten_digits(m.as_str()))
}

/// The last 10 digits of `value`, if it holds at least 10.
pub fn last_ten_digits(value: &str) -> Option<String> {
    let digits: Vec<char> = value.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() < 10 {
        return None;
    }
    Some(digits[digits.len() - 10..].iter().collect())
}

/// First e-mail address in the text.
pub fn extract_email(text: &str) -> Option<String> {
    EMAIL.find(text).map(|m| m.as_str().to_string())
}

/// Manufacture year.
///
/// Labeled years (`Year of Manufacture: 2019`, `2019 YOM`) in 1990-2030
/// first; otherwise the latest standalone year that is not part of a date.
pub fn extract_year(text: &str) -> Option<String> {
    for pattern in [&*YEAR_LABELED, &*YEAR_TRAILING] {
        if let Some(caps) = pattern.captures(text) {
            let year = &caps[1];
            if year.parse::<u32>().is_ok_and(|y| YEAR_RANGE.contains(&y)) {
                return Some(year.to_string());
            }
        }
    }

    let named_dates = month_name_date_spans(text);
    YEAR_STANDALONE
        .find_iter(text)
        .filter(|m| !touches_date_separator(text, m.start(), m.end()))
        .filter(|m| {
            !named_dates
                .iter()
                .any(|&(start, end)| start <= m.start() && m.end() <= end)
        })
        .map(|m| m.as_str())
        .max()
        .map(str::to_string)
}

/// Pincode from `Pin Code: 411001` or `411001 PIN`.
pub fn extract_pincode(text: &str) -> Option<String> {
    first_capture(text, &[&PINCODE_LABELED, &PINCODE_TRAILING])
}

/// First standalone six-digit run.
pub fn find_six_digits(text: &str) -> Option<String> {
    SIX_DIGITS.find(text).map(|m| m.as_str().to_string())
}

fn first_capture(text: &str, patterns: &[&Regex]) -> Option<String> {
    patterns
        .iter()
        .find_map(|pattern| pattern.captures(text))
        .map(|caps| caps[1].trim().to_string())
}

fn touches_date_separator(text: &str, start: usize, end: usize) -> bool {
    let is_separator = |c: char| matches!(c, '/' | '-' | '.');
    let before = text[..start].chars().next_back().is_some_and(is_separator);
    let after = text[end..].chars().next().is_some_and(is_separator);
    before || after
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_identifier() {
        assert_eq!(clean_identifier("mh 12-ab 3456"), "MH12AB3456");
        assert_eq!(clean_identifier(""), "");
    }

    #[test]
    fn test_policy_number_patterns() {
        assert_eq!(
            extract_policy_number("Policy No.: 3001/A/12345"),
            Some("3001/A/12345".to_string())
        );
        assert_eq!(
            extract_policy_number("Your Policy OG12345678 is active"),
            Some("OG12345678".to_string())
        );
        assert_eq!(extract_policy_number("POL: 778899"), Some("778899".to_string()));
        assert_eq!(extract_policy_number("No policy here"), None);
    }

    #[test]
    fn test_registration_labeled_and_plate() {
        assert_eq!(
            extract_registration("Registration No: MH 12 AB 3456", None),
            Some("MH12AB3456".to_string())
        );
        assert_eq!(
            extract_registration("plate ka-05-mn-1234 seen", None),
            Some("KA05MN1234".to_string())
        );
    }

    #[test]
    fn test_registration_skips_claimed_plate() {
        let text = "Policy No: MH12AB3456\nCar KA05MN1234";
        assert_eq!(
            extract_registration(text, Some("MH12AB3456")),
            Some("KA05MN1234".to_string())
        );
        assert_eq!(extract_registration("Policy No: MH12AB3456", Some("MH12AB3456")), None);
    }

    #[test]
    fn test_chassis_and_engine() {
        assert_eq!(
            extract_chassis("Chassis No: MA3EJKD1S00123456"),
            Some("MA3EJKD1S00123456".to_string())
        );
        assert_eq!(extract_engine("Engine No: K12MN1234567"), Some("K12MN1234567".to_string()));
        // The label word itself is never taken as the value.
        assert_eq!(extract_engine("Engine Number: not available"), None);
    }

    #[test]
    fn test_mobile_last_ten_digits() {
        assert_eq!(extract_mobile("Call +91 9876543210"), Some("9876543210".to_string()));
        assert_eq!(extract_mobile("Mob 98765 43210"), Some("9876543210".to_string()));
        assert_eq!(extract_mobile("Ref 12345"), None);
        assert_eq!(last_ten_digits("+91-98765-43210"), Some("9876543210".to_string()));
        assert_eq!(last_ten_digits("98765"), None);
    }

    #[test]
    fn test_email() {
        assert_eq!(
            extract_email("Mail: ravi.k@example.co.in, alt a@b.com"),
            Some("ravi.k@example.co.in".to_string())
        );
        assert_eq!(extract_email("no mail"), None);
    }

    #[test]
    fn test_year_labeled() {
        assert_eq!(extract_year("Year of Manufacture: 2019"), Some("2019".to_string()));
        assert_eq!(extract_year("Mfg Year - 2015"), Some("2015".to_string()));
        assert_eq!(extract_year("2018 YOM"), Some("2018".to_string()));
    }

    #[test]
    fn test_year_fallback_ignores_dates() {
        assert_eq!(extract_year("Built 2017, renewed 2021"), Some("2021".to_string()));
        assert_eq!(extract_year("Start 01/04/2023"), None);
        assert_eq!(extract_year("Year: 1875"), None);
    }

    #[test]
    fn test_year_fallback_ignores_month_name_dates() {
        assert_eq!(extract_year("Risk Start Date: 15 Aug 2023"), None);
        assert_eq!(
            extract_year("Issued 15 August 2023, vehicle built 2019"),
            Some("2019".to_string())
        );
    }

    #[test]
    fn test_pincode() {
        assert_eq!(extract_pincode("Pin Code: 411001"), Some("411001".to_string()));
        assert_eq!(extract_pincode("Pincode-560001"), Some("560001".to_string()));
        assert_eq!(extract_pincode("400050 PIN"), Some("400050".to_string()));
        assert_eq!(extract_pincode("Mumbai 400050"), None);
        assert_eq!(find_six_digits("Mumbai 400050"), Some("400050".to_string()));
    }
}
