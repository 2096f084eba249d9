//! Common regex patterns for motor insurance policy extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Policy number
    pub static ref POLICY_NO_LABELED: Regex = Regex::new(
        r"(?i)\bPolicy\s*(?:Number\b|No\b\.?|#)\s*[:=\-]?\s*([A-Z0-9/\-]{4,})"
    ).unwrap();

    pub static ref POLICY_NO_INLINE: Regex = Regex::new(
        r"(?i)\bPolicy\s+([A-Z]{2,}\d{4,})"
    ).unwrap();

    pub static ref POLICY_NO_SHORT: Regex = Regex::new(
        r"(?i)\bPOL\b\.?\s*[:=\-]?\s*([A-Z0-9/\-]{4,})"
    ).unwrap();

    // Indian registration plate (MH 12 AB 3456)
    pub static ref REGISTRATION_LABELED: Regex = Regex::new(
        r"(?i)\b(?:Registration|Regn|Reg|Vehicle|RC)\b\.?\s*(?:Number\b|No\b\.?)?\s*[:=\-]?\s*([A-Z]{2}[ \-]?\d{1,2}[ \-]?[A-Z]{1,3}[ \-]?\d{4})\b"
    ).unwrap();

    pub static ref REGISTRATION_PLATE: Regex = Regex::new(
        r"(?i)\b[A-Z]{2}[ \-]?\d{1,2}[ \-]?[A-Z]{1,2}[ \-]?\d{4}\b"
    ).unwrap();

    // Chassis and engine numbers
    pub static ref CHASSIS_LABELED: Regex = Regex::new(
        r"(?i)\bChassis\s*(?:Number\b|No\b\.?)?\s*[:=\-]?\s*([A-Z0-9]{10,})"
    ).unwrap();

    pub static ref CHASSIS_SHORT: Regex = Regex::new(
        r"(?i)\bCH\b\.?\s*(?:No\b\.?)?\s*[:=\-]?\s*([A-Z0-9]{10,})"
    ).unwrap();

    pub static ref ENGINE_LABELED: Regex = Regex::new(
        r"(?i)\bEngine\s*(?:Number\b|No\b\.?)?\s*[:=\-]?\s*([A-Z0-9]{6,})"
    ).unwrap();

    pub static ref ENGINE_SHORT: Regex = Regex::new(
        r"(?i)\bEN\b\.?\s*(?:No\b\.?)?\s*[:=\-]?\s*([A-Z0-9]{6,})"
    ).unwrap();

    // Indian mobile numbers (optional +91, leading 6-9)
    pub static ref MOBILE_PLAIN: Regex = Regex::new(
        r"(?:\+91[ \-]?)?\b[6-9][0-9]{9}\b"
    ).unwrap();

    pub static ref MOBILE_SPACED: Regex = Regex::new(
        r"(?:\+91[ \-]?)?\b[6-9][0-9 \-]{9,12}"
    ).unwrap();

    pub static ref MOBILE_LABELED: Regex = Regex::new(
        r"(?i)\b(?:Mobile|Phone|Mob)\b\.?[:\s]+([0-9]{10})\b"
    ).unwrap();

    // Email
    pub static ref EMAIL: Regex = Regex::new(
        r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b"
    ).unwrap();

    // Year of manufacture
    pub static ref YEAR_LABELED: Regex = Regex::new(
        r"(?i)\b(?:Year\s+of\s+Manufacture|Manufacturing\s+Year|Manufacture\s+Year|Mfg\.?\s*Year|YOM|Year)\s*[:=\-]?\s*(\d{4})\b"
    ).unwrap();

    pub static ref YEAR_TRAILING: Regex = Regex::new(
        r"(?i)\b(\d{4})\s*(?:Year|YOM)\b"
    ).unwrap();

    pub static ref YEAR_STANDALONE: Regex = Regex::new(
        r"\b(?:199\d|20[0-2]\d)\b"
    ).unwrap();

    // Pincode (six digits)
    pub static ref PINCODE_LABELED: Regex = Regex::new(
        r"(?i)\b(?:Pin\s*Code|PIN)\b\s*[:=\-]?\s*(\d{6})\b"
    ).unwrap();

    pub static ref PINCODE_TRAILING: Regex = Regex::new(
        r"(?i)\b(\d{6})\s*(?:Pin\s*Code|PIN)\b"
    ).unwrap();

    pub static ref SIX_DIGITS: Regex = Regex::new(
        r"\b\d{6}\b"
    ).unwrap();

    // Keyword locator guards
    pub static ref LABEL_LIKE_VALUE: Regex = Regex::new(
        r"(?i)^[A-Z\s]+[:=\-]"
    ).unwrap();

    pub static ref NEW_LABEL_LINE: Regex = Regex::new(
        r"(?i)^[A-Z\s]{3,}[:=\-]"
    ).unwrap();

    pub static ref SECTION_HEADER: Regex = Regex::new(
        r"(?i)^(?:Policy|Vehicle|Premium|Customer|Address|Nominee)"
    ).unwrap();

    // Value narrowing patterns for the keyword locator
    pub static ref POLICY_NO_VALUE: Regex = Regex::new(r"(?i)[A-Z0-9/\-]{4,}").unwrap();
    pub static ref MOBILE_VALUE: Regex = Regex::new(r"[0-9\s+\-]{10,}").unwrap();
    pub static ref REGISTRATION_VALUE: Regex = Regex::new(r"(?i)[A-Z0-9\s]{6,}").unwrap();
    pub static ref CHASSIS_VALUE: Regex = Regex::new(r"(?i)[A-Z0-9]{10,}").unwrap();
    pub static ref ENGINE_VALUE: Regex = Regex::new(r"(?i)[A-Z0-9]{6,}").unwrap();
}
