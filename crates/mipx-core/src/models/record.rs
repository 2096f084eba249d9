//! Field schema and extraction record for motor insurance policies.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use crate::error::ExtractionError;

/// Semantic type of a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Free text (names, addresses, descriptions).
    FreeText,
    /// Identifier code (policy, registration, chassis, engine, mobile, pincode).
    Identifier,
    /// Currency amount or other number.
    Amount,
    /// Calendar date, normalized to `YYYY-MM-DD` when parseable.
    Date,
    /// Controlled vocabulary value (insurer, make, fuel, relationship).
    Enum,
}

macro_rules! schema {
    ($($variant:ident => $key:literal, $kind:ident;)+) => {
        /// A field of the policy schema.
        ///
        /// Declaration order is the canonical output order.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum Field {
            $($variant,)+
        }

        impl Field {
            /// Every schema field in canonical order.
            pub const ALL: &'static [Field] = &[$(Field::$variant,)+];

            /// The output key, e.g. `POLICY_NO`.
            pub fn key(self) -> &'static str {
                match self {
                    $(Field::$variant => $key,)+
                }
            }

            /// The semantic type of the field.
            pub fn kind(self) -> FieldKind {
                match self {
                    $(Field::$variant => FieldKind::$kind,)+
                }
            }

            /// Look up a field by its output key (case-insensitive).
            pub fn from_key(key: &str) -> Option<Field> {
                let key = key.trim().to_ascii_uppercase();
                match key.as_str() {
                    $($key => Some(Field::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

schema! {
    BrokerName => "BROKER_NAME", FreeText;
    Cc => "CC", Amount;
    Cgst => "CGST", Amount;
    ChasisNumber => "CHASIS_NUMBER", Identifier;
    CityName => "CITY_NAME", FreeText;
    Cover => "COVER", FreeText;
    CustomerEmail => "CUSTOMER_EMAIL", Identifier;
    CustomerName => "CUSTOMER_NAME", FreeText;
    CvType => "CV_TYPE", FreeText;
    EngineNumber => "ENGINE_NUMBER", Identifier;
    FinancierName => "FINANCIER_NAME", FreeText;
    FuelType => "FUEL_TYPE", Enum;
    Gst => "GST", Amount;
    Gvw => "GVW", Amount;
    IdvSumInsured => "IDV_SUM_INSURED", Amount;
    Igst => "IGST", Amount;
    InsuranceCompanyName => "INSURANCE_COMPANY_NAME", Enum;
    CompleteLocationAddress => "COMPLETE_LOCATION_ADDRESS", FreeText;
    MobNo => "MOB_NO", Identifier;
    Ncb => "NCB", Amount;
    NetPremium => "NET_PREMIUM", Amount;
    NomineeName => "NOMINEE_NAME", FreeText;
    NomineeRelationship => "NOMINEE_RELATIONSHIP", Enum;
    OdExpireDate => "OD_EXPIRE_DATE", Date;
    OdPremium => "OD_PREMIUM", Amount;
    Pincode => "PINCODE", Identifier;
    PolicyIssueDate => "POLICY_ISSUE_DATE", Date;
    PolicyNo => "POLICY_NO", Identifier;
    ProductCode => "PRODUCT_CODE", FreeText;
    RegistrationDate => "REGISTRATION_DATE", Date;
    RegistrationNumber => "REGISTRATION_NUMBER", Identifier;
    RiskEndDate => "RISK_END_DATE", Date;
    RiskStartDate => "RISK_START_DATE", Date;
    Sgst => "SGST", Amount;
    StateName => "STATE_NAME", FreeText;
    TotalPremium => "TOTAL_PREMIUM", Amount;
    TpOnlyPremium => "TP_ONLY_PREMIUM", Amount;
    VehicleMake => "VEHICLE_MAKE", Enum;
    VehicleModel => "VEHICLE_MODEL", FreeText;
    VehicleSubType => "VEHICLE_SUB_TYPE", FreeText;
    VehicleVariant => "VEHICLE_VARIANT", FreeText;
    YearOfManufacture => "YEAR_OF_MANUFACTURE", Identifier;
}

impl Field {
    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Field {
    type Err = ExtractionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::from_key(s).ok_or_else(|| ExtractionError::UnknownField(s.to_string()))
    }
}

impl Serialize for Field {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

impl<'de> Deserialize<'de> for Field {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        key.parse().map_err(de::Error::custom)
    }
}

/// Whether a field was found in the document.
///
/// There is no confidence score: a non-empty value may still be a false
/// positive, and an empty one may be a false negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldStatus {
    Found,
    NotFound,
}

/// Extracted values for every schema field.
///
/// The record is total: it always holds exactly the keys of [`Field::ALL`],
/// with an empty string standing for "not found".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionRecord {
    values: Vec<String>,
}

impl ExtractionRecord {
    /// Create a record with every field empty.
    pub fn new() -> Self {
        Self {
            values: vec![String::new(); Field::ALL.len()],
        }
    }

    /// Value of a field (empty when not found).
    pub fn get(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    /// Set a field, trimming surrounding whitespace.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        self.values[field.index()] = value.trim().to_string();
    }

    /// Found/not-found status of a field.
    pub fn status(&self, field: Field) -> FieldStatus {
        if self.get(field).is_empty() {
            FieldStatus::NotFound
        } else {
            FieldStatus::Found
        }
    }

    /// Iterate over `(field, value)` in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        Field::ALL.iter().map(move |f| (*f, self.get(*f)))
    }

    /// Fields with a non-empty value.
    pub fn found(&self) -> Vec<Field> {
        self.iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(f, _)| f)
            .collect()
    }

    /// Fields left empty.
    pub fn missing(&self) -> Vec<Field> {
        self.iter()
            .filter(|(_, v)| v.is_empty())
            .map(|(f, _)| f)
            .collect()
    }

    /// Number of keys (always the schema size).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Build a record from a key/value map.
    ///
    /// Missing keys are filled with empty strings, unknown keys are rejected.
    pub fn from_map(map: BTreeMap<String, String>) -> Result<Self, ExtractionError> {
        let mut record = Self::new();
        for (key, value) in map {
            let field = Field::from_key(&key).ok_or(ExtractionError::UnknownField(key))?;
            record.set(field, value);
        }
        Ok(record)
    }

    /// Convert to a key/value map.
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.iter()
            .map(|(f, v)| (f.key().to_string(), v.to_string()))
            .collect()
    }
}

impl Default for ExtractionRecord {
    fn default() -> Self {
        Self::new()
    }
}

impl Serialize for ExtractionRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (field, value) in self.iter() {
            map.serialize_entry(field.key(), value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ExtractionRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = BTreeMap::<String, String>::deserialize(deserializer)?;
        ExtractionRecord::from_map(map).map_err(de::Error::custom)
    }
}

/// An extraction record with summary information about the run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionReport {
    /// Extracted values.
    pub record: ExtractionRecord,

    /// Length of the input text in characters.
    pub text_length: usize,

    /// Number of fields with a value.
    pub found_fields: usize,

    /// Fields left empty.
    pub missing_fields: Vec<Field>,

    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

impl ExtractionReport {
    /// Summarize a finished record.
    pub fn new(record: ExtractionRecord, text: &str, processing_time_ms: u64) -> Self {
        let missing_fields = record.missing();
        Self {
            found_fields: record.len() - missing_fields.len(),
            missing_fields,
            text_length: text.chars().count(),
            record,
            processing_time_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_schema_size_and_order() {
        assert_eq!(Field::ALL.len(), 42);
        assert_eq!(Field::ALL[0], Field::BrokerName);
        assert_eq!(Field::ALL[41], Field::YearOfManufacture);
    }

    #[test]
    fn test_field_key_round_trip() {
        for field in Field::ALL {
            assert_eq!(Field::from_key(field.key()), Some(*field));
        }
        assert_eq!(Field::from_key("policy_no"), Some(Field::PolicyNo));
        assert!("NOT_A_FIELD".parse::<Field>().is_err());
    }

    #[test]
    fn test_new_record_is_total_and_empty() {
        let record = ExtractionRecord::new();
        assert_eq!(record.len(), Field::ALL.len());
        assert!(record.found().is_empty());
        assert_eq!(record.missing().len(), 42);
        assert_eq!(record.status(Field::PolicyNo), FieldStatus::NotFound);
    }

    #[test]
    fn test_serialize_in_schema_order() {
        let mut record = ExtractionRecord::new();
        record.set(Field::PolicyNo, " P-1 ");

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.starts_with(r#"{"BROKER_NAME":"","CC":"#));
        assert!(json.contains(r#""POLICY_NO":"P-1""#));

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value.as_object().unwrap().len(), 42);
    }

    #[test]
    fn test_deserialize_fills_missing_keys() {
        let record: ExtractionRecord =
            serde_json::from_str(r#"{"FUEL_TYPE":"Diesel"}"#).unwrap();
        assert_eq!(record.get(Field::FuelType), "Diesel");
        assert_eq!(record.get(Field::Cc), "");
        assert_eq!(record.status(Field::FuelType), FieldStatus::Found);

        let err = serde_json::from_str::<ExtractionRecord>(r#"{"COLOUR":"Red"}"#);
        assert!(err.is_err());
    }

    #[test]
    fn test_report_counts() {
        let mut record = ExtractionRecord::new();
        record.set(Field::VehicleMake, "Honda");
        record.set(Field::Ncb, "20");

        let report = ExtractionReport::new(record, "Make: Honda", 3);
        assert_eq!(report.found_fields, 2);
        assert_eq!(report.missing_fields.len(), 40);
        assert_eq!(report.text_length, 11);
    }
}
