//! LMS reference data
//!
//! Reference tables map an age (months) or height (cm) to the WHO L, M, S
//! parameters for one (indicator, sex) pair. The embedded set lives in
//! [`who_tables`]; a complete official set can be loaded from JSON and
//! overlaid on top of it.

pub mod who_tables;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::{GrowthError, Result};

// ============================================================================
// Enumerations
// ============================================================================

/// WHO growth indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Indicator {
    WeightForAge,
    HeightForAge,
    WeightForHeight,
    BmiForAge,
}

/// What a table's key measures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    AgeMonths,
    HeightCm,
}

impl Indicator {
    /// Which measurement a table for this indicator is keyed by
    pub fn axis(&self) -> Axis {
        match self {
            Indicator::WeightForHeight => Axis::HeightCm,
            _ => Axis::AgeMonths,
        }
    }

    /// Weight-based indicators are eligible for the restricted SD23 adjustment
    pub fn is_weight_based(&self) -> bool {
        !matches!(self, Indicator::HeightForAge)
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Indicator::WeightForAge => "weight-for-age",
            Indicator::HeightForAge => "height-for-age",
            Indicator::WeightForHeight => "weight-for-height",
            Indicator::BmiForAge => "bmi-for-age",
        };
        f.write_str(name)
    }
}

impl FromStr for Indicator {
    type Err = GrowthError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        match normalized.as_str() {
            "wfa" | "waz" | "weight_for_age" => Ok(Indicator::WeightForAge),
            "hfa" | "haz" | "height_for_age" | "length_for_age" => Ok(Indicator::HeightForAge),
            "wfh" | "whz" | "weight_for_height" | "weight_for_length" => {
                Ok(Indicator::WeightForHeight)
            }
            "bfa" | "baz" | "bmi_for_age" => Ok(Indicator::BmiForAge),
            _ => Err(GrowthError::InvalidInput(format!("unknown indicator '{}'", s))),
        }
    }
}

/// Biological sex of the child
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Case-insensitive parse; accepts male/female, m/f and boy/girl
    pub fn parse(raw: &str) -> Option<Sex> {
        match raw.trim().to_lowercase().as_str() {
            "male" | "m" | "boy" => Some(Sex::Male),
            "female" | "f" | "girl" => Some(Sex::Female),
            _ => None,
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Sex::Male => "male",
            Sex::Female => "female",
        })
    }
}

impl FromStr for Sex {
    type Err = GrowthError;

    fn from_str(s: &str) -> Result<Self> {
        Sex::parse(s).ok_or_else(|| GrowthError::InvalidInput(format!("unrecognized sex '{}'", s)))
    }
}

// ============================================================================
// LMS data
// ============================================================================

/// Box-Cox power (L), median (M) and coefficient of variation (S)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LmsParameters {
    pub l: f64,
    pub m: f64,
    pub s: f64,
}

impl LmsParameters {
    pub const fn new(l: f64, m: f64, s: f64) -> Self {
        Self { l, m, s }
    }

    pub fn is_finite(&self) -> bool {
        self.l.is_finite() && self.m.is_finite() && self.s.is_finite()
    }
}

/// One row of a reference table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LmsPoint {
    pub key: f64,
    #[serde(flatten)]
    pub params: LmsParameters,
}

impl LmsPoint {
    pub const fn new(key: f64, l: f64, m: f64, s: f64) -> Self {
        Self {
            key,
            params: LmsParameters::new(l, m, s),
        }
    }
}

/// Reference table for one (indicator, sex); keys strictly ascending, never empty
#[derive(Debug, Clone, PartialEq)]
pub struct LmsTable {
    points: Cow<'static, [LmsPoint]>,
}

impl LmsTable {
    /// Wrap embedded data. Callers guarantee ordering and a non-empty slice;
    /// the embedded tables are checked by unit tests.
    pub(crate) const fn from_static(points: &'static [LmsPoint]) -> Self {
        Self {
            points: Cow::Borrowed(points),
        }
    }

    /// Build a table from loaded rows: sorts by key and rejects empty tables,
    /// duplicate keys and non-finite values
    pub fn new(mut points: Vec<LmsPoint>) -> Result<Self> {
        if points.is_empty() {
            return Err(GrowthError::Reference("table has no entries".to_string()));
        }

        if let Some(bad) = points
            .iter()
            .find(|p| !p.key.is_finite() || !p.params.is_finite())
        {
            return Err(GrowthError::Reference(format!(
                "non-finite value in row with key {}",
                bad.key
            )));
        }

        points.sort_by(|a, b| a.key.total_cmp(&b.key));

        if let Some(pair) = points.windows(2).find(|w| w[0].key == w[1].key) {
            return Err(GrowthError::Reference(format!("duplicate key {}", pair[0].key)));
        }

        Ok(Self {
            points: Cow::Owned(points),
        })
    }

    pub fn points(&self) -> &[LmsPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> &LmsPoint {
        &self.points[0]
    }

    pub fn last(&self) -> &LmsPoint {
        &self.points[self.points.len() - 1]
    }

    /// Key range covered without clamping
    pub fn key_range(&self) -> (f64, f64) {
        (self.first().key, self.last().key)
    }
}

// ============================================================================
// Reference set
// ============================================================================

/// All tables available to an assessor, indexed by (indicator, sex)
#[derive(Debug, Clone, Default)]
pub struct ReferenceTables {
    tables: FxHashMap<(Indicator, Sex), LmsTable>,
}

/// On-disk JSON layout for a reference set
#[derive(Debug, Deserialize, Serialize)]
struct ReferenceFile {
    tables: Vec<TableRecord>,
}

#[derive(Debug, Deserialize, Serialize)]
struct TableRecord {
    indicator: Indicator,
    sex: Sex,
    points: Vec<LmsPoint>,
}

impl ReferenceTables {
    /// The embedded abbreviated WHO set (WFA, HFA, WFH; no BMI-for-age)
    pub fn who_embedded() -> Self {
        let mut tables = FxHashMap::default();
        for (indicator, sex, table) in who_tables::embedded_tables() {
            tables.insert((indicator, sex), table);
        }
        Self { tables }
    }

    /// Parse a reference set from JSON
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: ReferenceFile = serde_json::from_str(json)
            .map_err(|e| GrowthError::Reference(format!("failed to parse reference JSON: {}", e)))?;

        let mut tables = FxHashMap::default();
        for record in file.tables {
            let key = (record.indicator, record.sex);
            if tables.contains_key(&key) {
                return Err(GrowthError::Reference(format!(
                    "{} table for {} listed twice",
                    record.indicator, record.sex
                )));
            }
            let table = LmsTable::new(record.points).map_err(|e| match e {
                GrowthError::Reference(msg) => GrowthError::Reference(format!(
                    "{} table for {}: {}",
                    record.indicator, record.sex, msg
                )),
                other => other,
            })?;
            tables.insert(key, table);
        }

        Ok(Self { tables })
    }

    /// Load a reference set from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            GrowthError::Reference(format!("failed to read reference file {:?}: {}", path, e))
        })?;
        Self::from_json_str(&contents)
    }

    /// Replace (or add) every table present in `other`
    pub fn overlay(mut self, other: ReferenceTables) -> Self {
        self.tables.extend(other.tables);
        self
    }

    pub fn insert(&mut self, indicator: Indicator, sex: Sex, table: LmsTable) {
        self.tables.insert((indicator, sex), table);
    }

    /// Table for (indicator, sex); a missing or empty table is a lookup error
    pub fn table(&self, indicator: Indicator, sex: Sex) -> Result<&LmsTable> {
        self.tables
            .get(&(indicator, sex))
            .filter(|table| !table.is_empty())
            .ok_or(GrowthError::Lookup { indicator, sex })
    }

    pub fn has_table(&self, indicator: Indicator, sex: Sex) -> bool {
        self.table(indicator, sex).is_ok()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
