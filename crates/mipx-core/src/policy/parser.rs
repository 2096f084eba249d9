//! Policy parser running one extraction recipe per schema field.

use std::collections::HashMap;

use lazy_static::lazy_static;
use tracing::{debug, info};

use crate::models::{ExtractionConfig, ExtractionRecord, Field, FieldKind};

use super::rules::{
    clean_identifier, extract_chassis, extract_email, extract_engine, extract_mobile,
    extract_number, extract_pincode, extract_policy_number, extract_registration, extract_year,
    find_six_digits, fix_numeric_confusions,
    identifiers::{is_plausible_code, MIN_CHASSIS_LEN, MIN_ENGINE_LEN},
    last_ten_digits, normalize_date,
    patterns::{CHASSIS_VALUE, ENGINE_VALUE, MOBILE_VALUE, POLICY_NO_VALUE, REGISTRATION_VALUE},
    synonyms,
    vocabulary::{FUEL_VOCABULARY, INSURER_VOCABULARY, MAKE_VOCABULARY, RELATIONSHIP_VOCABULARY},
    KeywordLocator, LocateOptions, Vocabulary,
};
use super::PolicyExtractor;

/// Continuation lines searched for a pincode around the address.
const PINCODE_CONTEXT_LINES: usize = 5;

lazy_static! {
    static ref DEFAULT_PARSER: PolicyParser = PolicyParser::new();
}

/// Extract every schema field from a document's text with default settings.
///
/// Total: any input, including the empty string, yields a record holding
/// every schema key. Fields that cannot be found are empty.
pub fn extract(text: &str) -> ExtractionRecord {
    DEFAULT_PARSER.extract(text)
}

/// Rule-based policy parser.
///
/// Keyword searches are compiled once per parser, so a parser should be
/// reused across documents. Parsing holds no mutable state and can run on
/// many threads at once.
pub struct PolicyParser {
    config: ExtractionConfig,
    locators: HashMap<Field, KeywordLocator>,
}

impl PolicyParser {
    /// Create a parser with default settings.
    pub fn new() -> Self {
        Self::with_config(ExtractionConfig::default())
    }

    /// Create a parser with the given settings.
    pub fn with_config(config: ExtractionConfig) -> Self {
        let locators = Field::ALL
            .iter()
            .filter(|field| !synonyms(**field).is_empty())
            .map(|field| {
                let locator = KeywordLocator::new(synonyms(*field), locate_options(*field, &config));
                (*field, locator)
            })
            .collect();

        Self { config, locators }
    }

    /// Settings in effect.
    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Extract a single field.
    pub fn extract_field(&self, field: Field, text: &str) -> String {
        match field {
            Field::RegistrationNumber => {
                let policy_no = self.extract_policy_number(text);
                self.extract_registration(text, &policy_no)
            }
            _ => self.run_recipe(field, text),
        }
    }

    fn run_recipe(&self, field: Field, text: &str) -> String {
        match field {
            Field::PolicyNo => self.extract_policy_number(text),
            Field::ChasisNumber => self.extract_code(field, text, extract_chassis, MIN_CHASSIS_LEN),
            Field::EngineNumber => self.extract_code(field, text, extract_engine, MIN_ENGINE_LEN),
            Field::MobNo => self.extract_mobile(text),
            Field::CustomerEmail => self.extract_email(text),
            Field::Pincode => self.extract_pincode(text),
            Field::YearOfManufacture => self.extract_year(text),
            Field::InsuranceCompanyName => self.from_vocabulary(field, text, &INSURER_VOCABULARY),
            Field::VehicleMake => self.from_vocabulary(field, text, &MAKE_VOCABULARY),
            Field::FuelType => self.from_vocabulary(field, text, &FUEL_VOCABULARY),
            Field::NomineeRelationship => {
                self.from_vocabulary(field, text, &RELATIONSHIP_VOCABULARY)
            }
            Field::RegistrationNumber => self.extract_registration(text, ""),
            _ => match field.kind() {
                FieldKind::Date => self.extract_date(field, text),
                FieldKind::Amount => self.extract_amount(field, text),
                _ => self.locate(field, text),
            },
        }
    }

    /// Best labeled value for the field, or an empty string.
    fn locate(&self, field: Field, text: &str) -> String {
        let value = self
            .locators
            .get(&field)
            .map(|locator| locator.locate(text))
            .unwrap_or_default();
        if !value.is_empty() {
            debug!("{}: {:?} from label", field, value);
        }
        value
    }

    fn extract_policy_number(&self, text: &str) -> String {
        if let Some(value) = extract_policy_number(text) {
            debug!("{}: {:?} from pattern", Field::PolicyNo, value);
            return value;
        }
        self.locate(Field::PolicyNo, text)
    }

    fn extract_registration(&self, text: &str, policy_no: &str) -> String {
        let claimed = (!policy_no.is_empty()).then_some(policy_no);

        let value = match extract_registration(text, claimed) {
            Some(plate) => {
                debug!("{}: {:?} from pattern", Field::RegistrationNumber, plate);
                plate
            }
            None => clean_identifier(&self.locate(Field::RegistrationNumber, text)),
        };

        if value.chars().count() < self.config.min_registration_len {
            return String::new();
        }
        value
    }

    fn extract_code(
        &self,
        field: Field,
        text: &str,
        direct: fn(&str) -> Option<String>,
        min_len: usize,
    ) -> String {
        if let Some(value) = direct(text) {
            debug!("{}: {:?} from pattern", field, value);
            return value;
        }

        // Shorter plausible codes win over longer label tails without digits.
        self.locators
            .get(&field)
            .and_then(|locator| {
                locator.best_where(text, |c| is_plausible_code(&clean_identifier(&c.value), min_len))
            })
            .map(|c| {
                let value = clean_identifier(&c.value);
                debug!("{}: {:?} from label", field, value);
                value
            })
            .unwrap_or_default()
    }

    fn extract_mobile(&self, text: &str) -> String {
        if let Some(value) = extract_mobile(text) {
            debug!("{}: {:?} from pattern", Field::MobNo, value);
            return value;
        }
        last_ten_digits(&self.locate(Field::MobNo, text)).unwrap_or_default()
    }

    fn extract_email(&self, text: &str) -> String {
        if let Some(value) = extract_email(text) {
            debug!("{}: {:?} from pattern", Field::CustomerEmail, value);
            return value;
        }
        self.locate(Field::CustomerEmail, text)
    }

    fn extract_pincode(&self, text: &str) -> String {
        if let Some(value) = extract_pincode(text) {
            debug!("{}: {:?} from pattern", Field::Pincode, value);
            return value;
        }

        let context = self.locate(Field::Pincode, text);
        find_six_digits(&context).unwrap_or_default()
    }

    fn extract_year(&self, text: &str) -> String {
        let value = extract_year(text).unwrap_or_default();
        if !value.is_empty() {
            debug!("{}: {:?} from pattern", Field::YearOfManufacture, value);
        }
        value
    }

    fn from_vocabulary(&self, field: Field, text: &str, vocabulary: &Vocabulary) -> String {
        if let Some(value) = vocabulary.find_first(text) {
            debug!("{}: {:?} from vocabulary", field, value);
            return value.to_string();
        }
        self.locate(field, text)
    }

    fn extract_date(&self, field: Field, text: &str) -> String {
        let raw = self.corrected(self.locate(field, text));
        normalize_date(&raw)
    }

    fn extract_amount(&self, field: Field, text: &str) -> String {
        let raw = self.corrected(self.locate(field, text));
        extract_number(&raw, field != Field::Cc)
    }

    fn corrected(&self, raw: String) -> String {
        if self.config.auto_correct {
            fix_numeric_confusions(&raw)
        } else {
            raw
        }
    }
}

impl Default for PolicyParser {
    fn default() -> Self {
        Self::new()
    }
}

impl PolicyExtractor for PolicyParser {
    fn extract(&self, text: &str) -> ExtractionRecord {
        info!("Extracting policy fields from {} characters of text", text.len());

        let mut record = ExtractionRecord::new();
        let policy_no = self.extract_policy_number(text);

        for field in Field::ALL {
            let value = match field {
                Field::PolicyNo => policy_no.clone(),
                Field::RegistrationNumber => self.extract_registration(text, &policy_no),
                _ => self.run_recipe(*field, text),
            };
            record.set(*field, value);
        }

        info!("Found {} of {} fields", record.found().len(), record.len());
        record
    }
}

fn locate_options(field: Field, config: &ExtractionConfig) -> LocateOptions {
    let options = LocateOptions::new();
    match field {
        Field::PolicyNo => options.value_pattern(POLICY_NO_VALUE.clone()),
        Field::MobNo => options.value_pattern(MOBILE_VALUE.clone()),
        Field::RegistrationNumber => options.value_pattern(REGISTRATION_VALUE.clone()),
        Field::ChasisNumber => options.value_pattern(CHASSIS_VALUE.clone()),
        Field::EngineNumber => options.value_pattern(ENGINE_VALUE.clone()),
        Field::CompleteLocationAddress => options.multiline(config.address_max_lines),
        Field::NomineeName => options.multiline(config.nominee_max_lines),
        Field::Pincode => options.multiline(PINCODE_CONTEXT_LINES),
        _ => options,
    }
}
