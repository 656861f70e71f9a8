//! WEIGHT-FOR-HEIGHT (WHZ) / BMI-FOR-AGE (BAZ)
//!
//! The wasting/overweight indicator switches on age:
//! - age ≤ 60 months: weight (kg) against weight-for-height, keyed by height (cm)
//! - age > 60 months: BMI (kg/m²) against BMI-for-age, keyed by age (months)
//!
//! The embedded reference set has no BMI-for-age table, so older children are
//! rejected as unsupported unless a loaded reference set provides one.

use super::{score_indicator, IndicatorScore};
use crate::error::{GrowthError, Result};
use crate::reference::{Indicator, ReferenceTables};
use crate::validation::GrowthMeasurement;
use crate::zscore::ZScoreMethod;

/// Oldest age (inclusive) assessed with weight-for-height
pub const WFH_AGE_LIMIT_MONTHS: f64 = 60.0;

/// Which secondary indicator applies at this age
pub fn secondary_indicator(age_months: f64) -> Indicator {
    if age_months <= WFH_AGE_LIMIT_MONTHS {
        Indicator::WeightForHeight
    } else {
        Indicator::BmiForAge
    }
}

pub fn calculate_weight_for_height_or_bmi(
    measurement: &GrowthMeasurement,
    tables: &ReferenceTables,
    method: ZScoreMethod,
) -> Result<IndicatorScore> {
    let sex = measurement.sex();

    match secondary_indicator(measurement.age_months()) {
        Indicator::WeightForHeight => score_indicator(
            Indicator::WeightForHeight,
            measurement,
            measurement.weight_kg(),
            tables,
            method,
        ),
        indicator => {
            if !tables.has_table(indicator, sex) {
                return Err(GrowthError::Unsupported(format!(
                    "children older than {} months (got {}) need BMI-for-age reference data, \
                     which the active reference set does not include",
                    WFH_AGE_LIMIT_MONTHS,
                    measurement.age_months()
                )));
            }
            score_indicator(
                indicator,
                measurement,
                measurement.bmi(),
                tables,
                method,
            )
        }
    }
}
