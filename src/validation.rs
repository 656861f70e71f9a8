//! Measurement validation
//!
//! Callers pass raw values straight from a form or JSON payload. Numbers may
//! arrive as JSON numbers or numeric-looking strings. Any other JSON value
//! still deserializes and is reported against its field. Every field is
//! checked and all violations are reported together.

use serde::{Deserialize, Serialize};

use crate::error::{Field, GrowthError, Result, ValidationErrors};
use crate::reference::Sex;

/// A numeric field as supplied by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    Number(f64),
    Text(String),
    /// Booleans, arrays, objects: kept so validation can name the field
    Other(serde_json::Value),
}

impl From<f64> for RawNumber {
    fn from(value: f64) -> Self {
        RawNumber::Number(value)
    }
}

impl From<&str> for RawNumber {
    fn from(value: &str) -> Self {
        RawNumber::Text(value.to_string())
    }
}

impl From<String> for RawNumber {
    fn from(value: String) -> Self {
        RawNumber::Text(value)
    }
}

/// A text field as supplied by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawText {
    Text(String),
    Other(serde_json::Value),
}

impl From<&str> for RawText {
    fn from(value: &str) -> Self {
        RawText::Text(value.to_string())
    }
}

impl From<String> for RawText {
    fn from(value: String) -> Self {
        RawText::Text(value)
    }
}

/// Unvalidated measurement input
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawMeasurement {
    #[serde(default, alias = "ageMonths")]
    pub age_months: Option<RawNumber>,
    #[serde(default, alias = "weightKg")]
    pub weight_kg: Option<RawNumber>,
    #[serde(default, alias = "heightCm")]
    pub height_cm: Option<RawNumber>,
    #[serde(default)]
    pub sex: Option<RawText>,
}

impl RawMeasurement {
    pub fn new(
        age_months: impl Into<RawNumber>,
        weight_kg: impl Into<RawNumber>,
        height_cm: impl Into<RawNumber>,
        sex: &str,
    ) -> Self {
        Self {
            age_months: Some(age_months.into()),
            weight_kg: Some(weight_kg.into()),
            height_cm: Some(height_cm.into()),
            sex: Some(sex.into()),
        }
    }
}

/// Validated measurement: every numeric field finite and strictly positive
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GrowthMeasurement {
    age_months: f64,
    weight_kg: f64,
    height_cm: f64,
    sex: Sex,
}

impl GrowthMeasurement {
    pub fn new(age_months: f64, weight_kg: f64, height_cm: f64, sex: Sex) -> Result<Self> {
        let mut errors = ValidationErrors::default();
        let age_months = check_positive(Field::AgeMonths, age_months, &mut errors);
        let weight_kg = check_positive(Field::WeightKg, weight_kg, &mut errors);
        let height_cm = check_positive(Field::HeightCm, height_cm, &mut errors);

        match (age_months, weight_kg, height_cm) {
            (Some(age_months), Some(weight_kg), Some(height_cm)) => Ok(Self {
                age_months,
                weight_kg,
                height_cm,
                sex,
            }),
            _ => Err(GrowthError::Validation(errors)),
        }
    }

    pub fn age_months(&self) -> f64 {
        self.age_months
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }

    pub fn sex(&self) -> Sex {
        self.sex
    }

    /// Body-mass index, kg/m²
    pub fn bmi(&self) -> f64 {
        let height_m = self.height_cm / 100.0;
        self.weight_kg / (height_m * height_m)
    }
}

/// Validate every field of `raw`, collecting all violations before failing
pub fn validate(raw: &RawMeasurement) -> Result<GrowthMeasurement> {
    let mut errors = ValidationErrors::default();

    let age_months = parse_positive(Field::AgeMonths, raw.age_months.as_ref(), &mut errors);
    let weight_kg = parse_positive(Field::WeightKg, raw.weight_kg.as_ref(), &mut errors);
    let height_cm = parse_positive(Field::HeightCm, raw.height_cm.as_ref(), &mut errors);
    let sex = parse_sex(raw.sex.as_ref(), &mut errors);

    match (age_months, weight_kg, height_cm, sex) {
        (Some(age_months), Some(weight_kg), Some(height_cm), Some(sex)) => Ok(GrowthMeasurement {
            age_months,
            weight_kg,
            height_cm,
            sex,
        }),
        _ => Err(GrowthError::Validation(errors)),
    }
}

fn parse_positive(
    field: Field,
    value: Option<&RawNumber>,
    errors: &mut ValidationErrors,
) -> Option<f64> {
    let number = match value {
        None => {
            errors.push(field, "is required");
            return None;
        }
        Some(RawNumber::Number(n)) => *n,
        Some(RawNumber::Text(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                errors.push(field, "is required");
                return None;
            }
            match trimmed.parse::<f64>() {
                Ok(n) => n,
                Err(_) => {
                    errors.push(field, format!("'{}' is not a number", text));
                    return None;
                }
            }
        }
        Some(RawNumber::Other(other)) => {
            errors.push(field, format!("{} is not a number", other));
            return None;
        }
    };

    check_positive(field, number, errors)
}

fn check_positive(field: Field, value: f64, errors: &mut ValidationErrors) -> Option<f64> {
    if !value.is_finite() {
        errors.push(field, "must be a finite number");
        None
    } else if value <= 0.0 {
        errors.push(field, format!("must be greater than zero, got {}", value));
        None
    } else {
        Some(value)
    }
}

fn parse_sex(value: Option<&RawText>, errors: &mut ValidationErrors) -> Option<Sex> {
    match value {
        None => {
            errors.push(Field::Sex, "is required");
            None
        }
        Some(RawText::Other(other)) => {
            errors.push(Field::Sex, format!("must be a string, got {}", other));
            None
        }
        Some(RawText::Text(raw)) if raw.trim().is_empty() => {
            errors.push(Field::Sex, "is required");
            None
        }
        Some(RawText::Text(raw)) => {
            let sex = Sex::parse(raw);
            if sex.is_none() {
                errors.push(
                    Field::Sex,
                    format!("unrecognized value '{}' (expected male or female)", raw),
                );
            }
            sex
        }
    }
}
