//! Error types for growth assessment
//!
//! A single error enum covers the library surface. Validation failures carry
//! every offending field so callers can render field-level messages.

use serde::Serialize;
use smallvec::SmallVec;
use std::fmt;
use thiserror::Error;

use crate::reference::{Indicator, Sex};

/// Measurement field names as they appear in input payloads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    AgeMonths,
    WeightKg,
    HeightCm,
    Sex,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::AgeMonths => "age_months",
            Field::WeightKg => "weight_kg",
            Field::HeightCm => "height_cm",
            Field::Sex => "sex",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One rejected input field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldViolation {
    pub field: Field,
    pub reason: String,
}

/// All violations found in one measurement (never empty when returned as an error)
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    violations: SmallVec<[FieldViolation; 4]>,
}

impl ValidationErrors {
    pub fn push(&mut self, field: Field, reason: impl Into<String>) {
        self.violations.push(FieldViolation {
            field,
            reason: reason.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    pub fn fields(&self) -> Vec<Field> {
        self.violations.iter().map(|v| v.field).collect()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .violations
            .iter()
            .map(|v| format!("{}: {}", v.field, v.reason))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

#[derive(Debug, Error)]
pub enum GrowthError {
    /// One or more measurement fields were missing, non-numeric or out of range
    #[error("invalid measurement: {0}")]
    Validation(ValidationErrors),

    /// Non-finite or non-positive arguments passed to the LMS transform
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The active reference set has no table for this combination
    #[error("no {indicator} reference table for {sex}")]
    Lookup { indicator: Indicator, sex: Sex },

    /// The measurement is outside what the reference data can assess
    #[error("not supported: {0}")]
    Unsupported(String),

    /// Malformed reference data
    #[error("invalid reference data: {0}")]
    Reference(String),
}

impl GrowthError {
    pub fn is_validation(&self) -> bool {
        matches!(self, GrowthError::Validation(_))
    }
}

impl From<ValidationErrors> for GrowthError {
    fn from(errors: ValidationErrors) -> Self {
        GrowthError::Validation(errors)
    }
}

pub type Result<T> = std::result::Result<T, GrowthError>;
