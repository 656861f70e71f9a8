//! Growth Assessor - Main coordinator for assessing a child's growth
//!
//! Integrates validation, the three indicators and classification into one
//! composite result. Includes both sequential and parallel (Rayon) batch
//! implementations.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

use crate::classify::{
    classify_height_for_age, classify_weight_for_age, classify_weight_for_height_or_bmi,
    HeightStatus, NutritionStatus, WeightStatus,
};
use crate::error::{GrowthError, Result};
use crate::indicators::{
    calculate_height_for_age, calculate_weight_for_age, calculate_weight_for_height_or_bmi,
    IndicatorScore,
};
use crate::reference::{Indicator, LmsParameters, ReferenceTables, Sex};
use crate::utils::lookup;
use crate::validation::{validate, GrowthMeasurement, RawMeasurement};
use crate::zscore::ZScoreMethod;

/// Assessor configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssessorConfig {
    /// JSON reference set overlaid on the embedded tables
    #[serde(default)]
    pub reference_path: Option<PathBuf>,
    #[serde(default)]
    pub z_score_method: ZScoreMethod,
}

impl AssessorConfig {
    /// Read `LMS_REFERENCE_PATH` and `ZSCORE_METHOD` from the environment
    pub fn from_env() -> Result<Self> {
        let reference_path = env::var("LMS_REFERENCE_PATH")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let z_score_method = match env::var("ZSCORE_METHOD") {
            Ok(value) => value.parse()?,
            Err(_) => ZScoreMethod::default(),
        };

        Ok(Self {
            reference_path,
            z_score_method,
        })
    }
}

/// Composite growth assessment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrowthAssessment {
    pub weight_for_age_z: f64,
    pub height_for_age_z: f64,
    pub weight_for_height_or_bmi_z: f64,
    pub weight_status: WeightStatus,
    pub height_status: HeightStatus,
    pub nutrition_status: NutritionStatus,
    /// WeightForHeight (≤ 60 months) or BmiForAge
    pub secondary_indicator: Indicator,
    pub bmi: f64,
    pub measurement: GrowthMeasurement,
    pub weight_for_age: IndicatorScore,
    pub height_for_age: IndicatorScore,
    pub weight_for_height_or_bmi: IndicatorScore,
    /// Indicators whose z-score falls outside the WHO plausibility range
    pub implausible: Vec<Indicator>,
}

/// Main growth assessor
#[derive(Debug, Clone)]
pub struct GrowthAssessor {
    tables: ReferenceTables,
    method: ZScoreMethod,
}

impl Default for GrowthAssessor {
    fn default() -> Self {
        Self::new()
    }
}

impl GrowthAssessor {
    /// Assessor over the embedded tables with plain LMS z-scores
    pub fn new() -> Self {
        Self {
            tables: ReferenceTables::who_embedded(),
            method: ZScoreMethod::Lms,
        }
    }

    /// Assessor over the embedded tables, overlaid with the configured reference file
    pub fn with_config(config: &AssessorConfig) -> Result<Self> {
        let mut tables = ReferenceTables::who_embedded();
        if let Some(path) = &config.reference_path {
            tables = tables.overlay(ReferenceTables::load(path)?);
        }
        Ok(Self {
            tables,
            method: config.z_score_method,
        })
    }

    pub fn with_tables(tables: ReferenceTables, method: ZScoreMethod) -> Self {
        Self { tables, method }
    }

    pub fn reference(&self) -> &ReferenceTables {
        &self.tables
    }

    pub fn method(&self) -> ZScoreMethod {
        self.method
    }

    /// Validate raw input and assess it; all-or-nothing
    pub fn assess(&self, raw: &RawMeasurement) -> Result<GrowthAssessment> {
        let measurement = validate(raw)?;
        self.assess_measurement(&measurement)
    }

    /// Assess an already validated measurement
    pub fn assess_measurement(&self, measurement: &GrowthMeasurement) -> Result<GrowthAssessment> {
        let weight_for_age = calculate_weight_for_age(measurement, &self.tables, self.method)?;
        let height_for_age = calculate_height_for_age(measurement, &self.tables, self.method)?;
        let weight_for_height_or_bmi =
            calculate_weight_for_height_or_bmi(measurement, &self.tables, self.method)?;

        let implausible = [weight_for_age, height_for_age, weight_for_height_or_bmi]
            .iter()
            .filter(|score| !score.plausible)
            .map(|score| score.indicator)
            .collect();

        Ok(GrowthAssessment {
            weight_for_age_z: weight_for_age.z_score,
            height_for_age_z: height_for_age.z_score,
            weight_for_height_or_bmi_z: weight_for_height_or_bmi.z_score,
            weight_status: classify_weight_for_age(weight_for_age.z_score),
            height_status: classify_height_for_age(height_for_age.z_score),
            nutrition_status: classify_weight_for_height_or_bmi(weight_for_height_or_bmi.z_score),
            secondary_indicator: weight_for_height_or_bmi.indicator,
            bmi: measurement.bmi(),
            measurement: *measurement,
            weight_for_age,
            height_for_age,
            weight_for_height_or_bmi,
            implausible,
        })
    }

    /// Assess many measurements in input order
    pub fn assess_batch(&self, raws: &[RawMeasurement]) -> Vec<Result<GrowthAssessment>> {
        raws.iter().map(|raw| self.assess(raw)).collect()
    }

    /// Parallel version of [`assess_batch`](Self::assess_batch); same order, same results
    pub fn assess_batch_parallel(&self, raws: &[RawMeasurement]) -> Vec<Result<GrowthAssessment>> {
        raws.par_iter().map(|raw| self.assess(raw)).collect()
    }

    /// Interpolated reference parameters for one (indicator, sex) at `key`
    pub fn reference_params(&self, indicator: Indicator, sex: Sex, key: f64) -> Result<LmsParameters> {
        if !key.is_finite() {
            return Err(GrowthError::InvalidInput(format!("key must be finite, got {}", key)));
        }
        let table = self.tables.table(indicator, sex)?;
        Ok(lookup(table, key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::LmsTable;

    #[test]
    fn test_default_uses_embedded_tables() {
        let assessor = GrowthAssessor::default();
        assert_eq!(assessor.reference().len(), 6);
        assert_eq!(assessor.method(), ZScoreMethod::Lms);
    }

    #[test]
    fn test_missing_reference_file_is_reference_error() {
        let config = AssessorConfig {
            reference_path: Some(PathBuf::from("/nonexistent/who_lms.json")),
            z_score_method: ZScoreMethod::Lms,
        };
        assert!(matches!(
            GrowthAssessor::with_config(&config),
            Err(GrowthError::Reference(_))
        ));
    }

    #[test]
    fn test_missing_table_is_lookup_error() {
        let assessor = GrowthAssessor::with_tables(ReferenceTables::default(), ZScoreMethod::Lms);
        let raw = RawMeasurement::new(24.0, 11.5, 92.0, "female");
        assert!(matches!(
            assessor.assess(&raw),
            Err(GrowthError::Lookup { indicator: Indicator::WeightForAge, sex: Sex::Female })
        ));
    }

    #[test]
    fn test_empty_table_is_lookup_error() {
        let mut tables = ReferenceTables::who_embedded();
        tables.insert(Indicator::WeightForAge, Sex::Male, LmsTable::from_static(&[]));
        let assessor = GrowthAssessor::with_tables(tables, ZScoreMethod::Lms);

        assert!(matches!(
            assessor.assess(&RawMeasurement::new(12.0, 9.0, 75.0, "m")),
            Err(GrowthError::Lookup { indicator: Indicator::WeightForAge, sex: Sex::Male })
        ));
        assert!(matches!(
            assessor.reference_params(Indicator::WeightForAge, Sex::Male, 12.0),
            Err(GrowthError::Lookup { .. })
        ));
        assert!(assessor.assess(&RawMeasurement::new(12.0, 9.0, 75.0, "f")).is_ok());
    }

    #[test]
    fn test_reference_params_rejects_nan_key() {
        let assessor = GrowthAssessor::new();
        assert!(assessor
            .reference_params(Indicator::WeightForAge, Sex::Male, f64::NAN)
            .is_err());
        let params = assessor
            .reference_params(Indicator::WeightForAge, Sex::Male, 0.0)
            .unwrap();
        assert_eq!(params, LmsParameters::new(0.3487, 3.3464, 0.14602));
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: AssessorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, AssessorConfig::default());

        let config: AssessorConfig =
            serde_json::from_str(r#"{"z_score_method": "who_restricted"}"#).unwrap();
        assert_eq!(config.z_score_method, ZScoreMethod::WhoRestricted);
    }
}
