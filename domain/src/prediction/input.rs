//! Clinical form inputs (Value Objects)
//!
//! [`PredictionInput`] is the typed shape of the form. Every field is always
//! present, so a submission can never be partial. Single-field edits go
//! through [`FieldValue`], which names the field and carries its typed value.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Biological sex as accepted by the inference endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Sex {
    #[default]
    Male,
    Female,
}

impl Sex {
    pub const ALL: [Sex; 2] = [Sex::Male, Sex::Female];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
        }
    }
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Sex {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(Sex::Male),
            "female" | "f" => Ok(Sex::Female),
            _ => Err(DomainError::InvalidFieldValue {
                field: FieldName::Sex.as_str().to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Chest pain classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ChestPainType {
    #[serde(rename = "typical angina")]
    TypicalAngina,
    #[serde(rename = "atypical angina")]
    AtypicalAngina,
    #[serde(rename = "non-anginal")]
    NonAnginal,
    #[default]
    #[serde(rename = "asymptomatic")]
    Asymptomatic,
}

impl ChestPainType {
    /// Display order used by every locale's option list
    pub const ALL: [ChestPainType; 4] = [
        ChestPainType::TypicalAngina,
        ChestPainType::AtypicalAngina,
        ChestPainType::NonAnginal,
        ChestPainType::Asymptomatic,
    ];

    /// Literal value understood by the inference endpoint
    pub fn as_str(&self) -> &'static str {
        match self {
            ChestPainType::TypicalAngina => "typical angina",
            ChestPainType::AtypicalAngina => "atypical angina",
            ChestPainType::NonAnginal => "non-anginal",
            ChestPainType::Asymptomatic => "asymptomatic",
        }
    }
}

impl std::fmt::Display for ChestPainType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ChestPainType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_choice(s).as_str() {
            "typical-angina" | "typical" => Ok(ChestPainType::TypicalAngina),
            "atypical-angina" | "atypical" => Ok(ChestPainType::AtypicalAngina),
            "non-anginal" | "non-anginal-pain" => Ok(ChestPainType::NonAnginal),
            "asymptomatic" => Ok(ChestPainType::Asymptomatic),
            _ => Err(DomainError::InvalidFieldValue {
                field: FieldName::ChestPainType.as_str().to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Resting electrocardiographic result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RestEcg {
    #[default]
    #[serde(rename = "normal")]
    Normal,
    #[serde(rename = "st-t abnormality")]
    StTAbnormality,
    #[serde(rename = "lv hypertrophy")]
    LvHypertrophy,
}

impl RestEcg {
    /// Display order used by every locale's option list
    pub const ALL: [RestEcg; 3] = [RestEcg::Normal, RestEcg::StTAbnormality, RestEcg::LvHypertrophy];

    /// Literal value understood by the inference endpoint
    pub fn as_str(&self) -> &'static str {
        match self {
            RestEcg::Normal => "normal",
            RestEcg::StTAbnormality => "st-t abnormality",
            RestEcg::LvHypertrophy => "lv hypertrophy",
        }
    }
}

impl std::fmt::Display for RestEcg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RestEcg {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_choice(s).as_str() {
            "normal" => Ok(RestEcg::Normal),
            "st-t-abnormality" | "st-t" => Ok(RestEcg::StTAbnormality),
            "lv-hypertrophy" | "lvh" => Ok(RestEcg::LvHypertrophy),
            _ => Err(DomainError::InvalidFieldValue {
                field: FieldName::RestingEcg.as_str().to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Lowercase and fold spaces/underscores into dashes so that both the wire
/// literal (`st-t abnormality`) and the kebab form (`st-t-abnormality`) parse.
fn normalize_choice(s: &str) -> String {
    s.trim()
        .to_ascii_lowercase()
        .split(|c: char| c.is_whitespace() || c == '_')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// The eight clinical values collected by the form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionInput {
    /// Age in years (the form control constrains it to 1-120)
    pub age: u32,
    pub sex: Sex,
    pub chest_pain_type: ChestPainType,
    /// Resting blood pressure in mm Hg
    pub resting_blood_pressure: f64,
    /// Serum cholesterol in mg/dl
    pub serum_cholesterol: f64,
    /// Fasting blood sugar above 120 mg/dl
    pub fasting_blood_sugar_high: bool,
    pub exercise_induced_angina: bool,
    pub resting_ecg: RestEcg,
}

impl Default for PredictionInput {
    fn default() -> Self {
        Self {
            age: 50,
            sex: Sex::Male,
            chest_pain_type: ChestPainType::Asymptomatic,
            resting_blood_pressure: 120.0,
            serum_cholesterol: 200.0,
            fasting_blood_sugar_high: false,
            exercise_induced_angina: false,
            resting_ecg: RestEcg::Normal,
        }
    }
}

impl PredictionInput {
    /// Lowest age the form control accepts
    pub const MIN_AGE: u32 = 1;
    /// Highest age the form control accepts
    pub const MAX_AGE: u32 = 120;

    /// Replace exactly one field. No cross-field validation is performed.
    pub fn apply(&mut self, value: FieldValue) {
        match value {
            FieldValue::Age(v) => self.age = v,
            FieldValue::Sex(v) => self.sex = v,
            FieldValue::ChestPainType(v) => self.chest_pain_type = v,
            FieldValue::RestingBloodPressure(v) => self.resting_blood_pressure = v,
            FieldValue::SerumCholesterol(v) => self.serum_cholesterol = v,
            FieldValue::FastingBloodSugarHigh(v) => self.fasting_blood_sugar_high = v,
            FieldValue::ExerciseInducedAngina(v) => self.exercise_induced_angina = v,
            FieldValue::RestingEcg(v) => self.resting_ecg = v,
        }
    }

    /// Builder-style variant of [`apply`](Self::apply)
    pub fn with(mut self, value: FieldValue) -> Self {
        self.apply(value);
        self
    }

    /// Current value of one field
    pub fn value_of(&self, name: FieldName) -> FieldValue {
        match name {
            FieldName::Age => FieldValue::Age(self.age),
            FieldName::Sex => FieldValue::Sex(self.sex),
            FieldName::ChestPainType => FieldValue::ChestPainType(self.chest_pain_type),
            FieldName::RestingBloodPressure => {
                FieldValue::RestingBloodPressure(self.resting_blood_pressure)
            }
            FieldName::SerumCholesterol => FieldValue::SerumCholesterol(self.serum_cholesterol),
            FieldName::FastingBloodSugarHigh => {
                FieldValue::FastingBloodSugarHigh(self.fasting_blood_sugar_high)
            }
            FieldName::ExerciseInducedAngina => {
                FieldValue::ExerciseInducedAngina(self.exercise_induced_angina)
            }
            FieldName::RestingEcg => FieldValue::RestingEcg(self.resting_ecg),
        }
    }
}

/// Names of the form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    Age,
    Sex,
    ChestPainType,
    RestingBloodPressure,
    SerumCholesterol,
    FastingBloodSugarHigh,
    ExerciseInducedAngina,
    RestingEcg,
}

impl FieldName {
    /// Form order
    pub const ALL: [FieldName; 8] = [
        FieldName::Age,
        FieldName::Sex,
        FieldName::ChestPainType,
        FieldName::RestingBloodPressure,
        FieldName::SerumCholesterol,
        FieldName::RestingEcg,
        FieldName::FastingBloodSugarHigh,
        FieldName::ExerciseInducedAngina,
    ];

    /// Short name, identical to the wire key
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Age => "age",
            FieldName::Sex => "sex",
            FieldName::ChestPainType => "cp",
            FieldName::RestingBloodPressure => "trestbps",
            FieldName::SerumCholesterol => "chol",
            FieldName::FastingBloodSugarHigh => "fbs",
            FieldName::ExerciseInducedAngina => "exang",
            FieldName::RestingEcg => "restecg",
        }
    }

    /// Parse a raw user-supplied value into a typed value for this field.
    ///
    /// This is the type constraint of the form control, not clinical
    /// validation: numbers must be numbers, choices must be enum members and
    /// age must lie within the control's 1-120 range.
    pub fn parse_value(&self, raw: &str) -> Result<FieldValue, DomainError> {
        let invalid = || DomainError::InvalidFieldValue {
            field: self.as_str().to_string(),
            value: raw.to_string(),
        };
        let trimmed = raw.trim();

        Ok(match self {
            FieldName::Age => {
                let age: u32 = trimmed.parse().map_err(|_| invalid())?;
                if !(PredictionInput::MIN_AGE..=PredictionInput::MAX_AGE).contains(&age) {
                    return Err(invalid());
                }
                FieldValue::Age(age)
            }
            FieldName::Sex => FieldValue::Sex(trimmed.parse()?),
            FieldName::ChestPainType => FieldValue::ChestPainType(trimmed.parse()?),
            FieldName::RestingBloodPressure => {
                FieldValue::RestingBloodPressure(parse_measurement(trimmed).ok_or_else(invalid)?)
            }
            FieldName::SerumCholesterol => {
                FieldValue::SerumCholesterol(parse_measurement(trimmed).ok_or_else(invalid)?)
            }
            FieldName::FastingBloodSugarHigh => {
                FieldValue::FastingBloodSugarHigh(parse_flag(trimmed).ok_or_else(invalid)?)
            }
            FieldName::ExerciseInducedAngina => {
                FieldValue::ExerciseInducedAngina(parse_flag(trimmed).ok_or_else(invalid)?)
            }
            FieldName::RestingEcg => FieldValue::RestingEcg(trimmed.parse()?),
        })
    }
}

impl std::fmt::Display for FieldName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_choice(s).as_str() {
            "age" => Ok(FieldName::Age),
            "sex" | "gender" => Ok(FieldName::Sex),
            "cp" | "chest-pain" | "chest-pain-type" => Ok(FieldName::ChestPainType),
            "trestbps" | "bp" | "blood-pressure" | "resting-blood-pressure" => {
                Ok(FieldName::RestingBloodPressure)
            }
            "chol" | "cholesterol" | "serum-cholesterol" => Ok(FieldName::SerumCholesterol),
            "fbs" | "fasting-sugar" | "fasting-blood-sugar" => {
                Ok(FieldName::FastingBloodSugarHigh)
            }
            "exang" | "exercise-angina" => Ok(FieldName::ExerciseInducedAngina),
            "restecg" | "rest-ecg" | "ecg" => Ok(FieldName::RestingEcg),
            _ => Err(DomainError::UnknownField(s.to_string())),
        }
    }
}

fn parse_measurement(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" | "on" => Some(true),
        "false" | "no" | "n" | "0" | "off" => Some(false),
        _ => None,
    }
}

/// One typed value for one field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue {
    Age(u32),
    Sex(Sex),
    ChestPainType(ChestPainType),
    RestingBloodPressure(f64),
    SerumCholesterol(f64),
    FastingBloodSugarHigh(bool),
    ExerciseInducedAngina(bool),
    RestingEcg(RestEcg),
}

impl FieldValue {
    pub fn name(&self) -> FieldName {
        match self {
            FieldValue::Age(_) => FieldName::Age,
            FieldValue::Sex(_) => FieldName::Sex,
            FieldValue::ChestPainType(_) => FieldName::ChestPainType,
            FieldValue::RestingBloodPressure(_) => FieldName::RestingBloodPressure,
            FieldValue::SerumCholesterol(_) => FieldName::SerumCholesterol,
            FieldValue::FastingBloodSugarHigh(_) => FieldName::FastingBloodSugarHigh,
            FieldValue::ExerciseInducedAngina(_) => FieldName::ExerciseInducedAngina,
            FieldValue::RestingEcg(_) => FieldName::RestingEcg,
        }
    }
}
