//! Date normalization for policy dates.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::{Captures, Regex};

use super::FieldExtractor;

lazy_static! {
    static ref DATE_LABEL_PREFIX: Regex = Regex::new(
        r"(?i)^(?:dated|date|on|as\s+of|as\s+on)\b\s*[:=\-]?\s*"
    ).unwrap();

    // DD/MM/YYYY
    static ref DATE_DMY_LONG: Regex = Regex::new(
        r"\b(\d{1,2})[/\-.](\d{1,2})[/\-.](\d{4})"
    ).unwrap();

    // DD/MM/YY
    static ref DATE_DMY_SHORT: Regex = Regex::new(
        r"\b(\d{1,2})[/\-.](\d{1,2})[/\-.](\d{2})\b"
    ).unwrap();

    // YYYY/MM/DD
    static ref DATE_YMD: Regex = Regex::new(
        r"\b(\d{4})[/\-.](\d{1,2})[/\-.](\d{1,2})"
    ).unwrap();

    // 15 Aug 2023
    static ref DATE_MONTH_LONG: Regex = Regex::new(
        r"(?i)\b(\d{1,2})[\s\-]+(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?[\s\-]+(\d{4})"
    ).unwrap();

    // 15 Aug 23
    static ref DATE_MONTH_SHORT: Regex = Regex::new(
        r"(?i)\b(\d{1,2})[\s\-]+(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?[\s\-]+(\d{2})\b"
    ).unwrap();

    // Anything date-shaped, returned verbatim when nothing parses
    static ref DATE_LOOSE: Regex = Regex::new(
        r"\d{1,2}[/\-.]\d{1,2}[/\-.]\d{2,4}"
    ).unwrap();
}

/// How a date pattern's capture groups map to day, month and year.
#[derive(Debug, Clone, Copy)]
enum DateLayout {
    DayMonthYear,
    DayMonthShortYear,
    YearMonthDay,
    DayMonthNameYear,
    DayMonthNameShortYear,
}

/// Date extractor trying each layout in priority order.
pub struct DateExtractor;

impl DateExtractor {
    pub fn new() -> Self {
        Self
    }

    fn layouts() -> [(&'static Regex, DateLayout); 5] {
        [
            (&*DATE_DMY_LONG, DateLayout::DayMonthYear),
            (&*DATE_DMY_SHORT, DateLayout::DayMonthShortYear),
            (&*DATE_YMD, DateLayout::YearMonthDay),
            (&*DATE_MONTH_LONG, DateLayout::DayMonthNameYear),
            (&*DATE_MONTH_SHORT, DateLayout::DayMonthNameShortYear),
        ]
    }
}

impl Default for DateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DateExtractor {
    type Output = NaiveDate;

    /// The first layout whose first match is a real calendar date.
    fn extract(&self, text: &str) -> Option<Self::Output> {
        Self::layouts()
            .into_iter()
            .find_map(|(pattern, layout)| pattern.captures(text).and_then(|c| build_date(&c, layout)))
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results: Vec<NaiveDate> = Vec::new();
        for (pattern, layout) in Self::layouts() {
            for caps in pattern.captures_iter(text) {
                if let Some(date) = build_date(&caps, layout) {
                    if !results.contains(&date) {
                        results.push(date);
                    }
                }
            }
        }
        results
    }
}

/// Normalize a date value to `YYYY-MM-DD`.
///
/// Leading label words (`Date`, `Dated`, `As on`, ...) are dropped, however
/// many there are, and the
/// layouts DD/MM/YYYY, DD/MM/YY, YYYY/MM/DD, `DD Mon YYYY` and `DD Mon YY`
/// are tried in that order; two-digit years below 50 are 20xx, others 19xx.
/// When nothing parses, a date-shaped substring is returned verbatim, and
/// failing that the trimmed input.
pub fn normalize_date(text: &str) -> String {
    let text = text.trim();
    if text.is_empty() {
        return String::new();
    }

    let mut text = text;
    while let Some(m) = DATE_LABEL_PREFIX.find(text).filter(|m| !m.is_empty()) {
        text = text[m.end()..].trim_start();
    }

    if let Some(date) = DateExtractor::new().extract(text) {
        return date.format("%Y-%m-%d").to_string();
    }

    if let Some(m) = DATE_LOOSE.find(text) {
        return m.as_str().to_string();
    }

    text.to_string()
}

/// Byte spans of dates written with a month name (`15 Aug 2023`).
pub fn month_name_date_spans(text: &str) -> Vec<(usize, usize)> {
    [&*DATE_MONTH_LONG, &*DATE_MONTH_SHORT]
        .into_iter()
        .flat_map(|pattern| pattern.find_iter(text))
        .map(|m| (m.start(), m.end()))
        .collect()
}

fn build_date(caps: &Captures<'_>, layout: DateLayout) -> Option<NaiveDate> {
    let number = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u32>().ok());

    let (year, month, day) = match layout {
        DateLayout::DayMonthYear => (number(3)? as i32, number(2)?, number(1)?),
        DateLayout::DayMonthShortYear => (pivot_year(number(3)?), number(2)?, number(1)?),
        DateLayout::YearMonthDay => (number(1)? as i32, number(2)?, number(3)?),
        DateLayout::DayMonthNameYear => (number(3)? as i32, month_number(&caps[2])?, number(1)?),
        DateLayout::DayMonthNameShortYear => {
            (pivot_year(number(3)?), month_number(&caps[2])?, number(1)?)
        }
    };

    NaiveDate::from_ymd_opt(year, month, day)
}

/// Two-digit years below 50 are 20xx, the rest 19xx.
fn pivot_year(short: u32) -> i32 {
    if short < 50 {
        2000 + short as i32
    } else {
        1900 + short as i32
    }
}

fn month_number(name: &str) -> Option<u32> {
    let month = match name.get(..3)?.to_ascii_lowercase().as_str() {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(month)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_month_year() {
        assert_eq!(normalize_date("15/08/2023"), "2023-08-15");
        assert_eq!(normalize_date("1-4-2023"), "2023-04-01");
        assert_eq!(normalize_date("01.04.2023 (00:00 hrs)"), "2023-04-01");
    }

    #[test]
    fn test_two_digit_year_pivot() {
        assert_eq!(normalize_date("15/08/23"), "2023-08-15");
        assert_eq!(normalize_date("15/08/49"), "2049-08-15");
        assert_eq!(normalize_date("15/08/50"), "1950-08-15");
    }

    #[test]
    fn test_year_first() {
        assert_eq!(normalize_date("2023/08/15"), "2023-08-15");
        assert_eq!(normalize_date("2023-08-15"), "2023-08-15");
    }

    #[test]
    fn test_month_names() {
        assert_eq!(normalize_date("15 Aug 2023"), "2023-08-15");
        assert_eq!(normalize_date("15 August 2023"), "2023-08-15");
        assert_eq!(normalize_date("15 Aug 23"), "2023-08-15");
        assert_eq!(normalize_date("15 Aug 75"), "1975-08-15");
        assert_eq!(normalize_date("5-Sep-2022"), "2022-09-05");
    }

    #[test]
    fn test_label_prefix_is_dropped() {
        assert_eq!(normalize_date("Dated: 15/08/2023"), "2023-08-15");
        assert_eq!(normalize_date("As on 31 Mar 2024"), "2024-03-31");
        assert_eq!(normalize_date("Date - N/A"), "N/A");
    }

    #[test]
    fn test_out_of_range_falls_through() {
        // Not a calendar date: no layout parses, the shape is kept verbatim.
        assert_eq!(normalize_date("31/02/2023"), "31/02/2023");
        // The first layout fails, a later one succeeds.
        assert_eq!(normalize_date("45/13/2023 or 2023-01-05"), "2023-01-05");
    }

    #[test]
    fn test_passthrough() {
        assert_eq!(normalize_date("  Midnight of expiry  "), "Midnight of expiry");
        assert_eq!(normalize_date(""), "");
        assert_eq!(normalize_date("   "), "");
    }

    #[test]
    fn test_idempotent() {
        for input in [
            "15/08/2023",
            "15 Aug 23",
            "31/02/2023",
            "Date - N/A",
            "expiry",
            "2023/08/15",
            "Date: Date: pending",
            "Dated on: as on 01/04/2023",
        ] {
            let once = normalize_date(input);
            assert_eq!(normalize_date(&once), once);
        }
    }

    #[test]
    fn test_repeated_labels_are_all_dropped() {
        assert_eq!(normalize_date("Date: Date: pending"), "pending");
        assert_eq!(normalize_date("Dated on: as on 01/04/2023"), "2023-04-01");
    }

    #[test]
    fn test_month_name_date_spans() {
        let text = "From 15 Aug 2023 to 14-Aug-24";
        assert_eq!(month_name_date_spans(text), vec![(5, 16), (20, 29)]);
        assert!(month_name_date_spans("01/04/2023").is_empty());
    }

    #[test]
    fn test_extract_all() {
        let dates = DateExtractor::new().extract_all("From 01/04/2023 to 31 Mar 2024");
        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2023, 4, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
            ]
        );
    }
}
