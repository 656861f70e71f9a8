//! Indicator modules for growth scoring
//!
//! Each WHO indicator is implemented in its own module. All of them run the
//! same pipeline: select table → interpolate at the key → z-score →
//! percentile and plausibility flag.

pub mod weight_for_age;
pub mod height_for_age;
pub mod weight_for_height;

// Re-export indicator functions
pub use weight_for_age::calculate_weight_for_age;
pub use height_for_age::calculate_height_for_age;
pub use weight_for_height::{calculate_weight_for_height_or_bmi, WFH_AGE_LIMIT_MONTHS};

use serde::Serialize;

use crate::classify::is_plausible;
use crate::error::Result;
use crate::reference::{Axis, Indicator, LmsParameters, ReferenceTables};
use crate::utils::{lookup, z_to_percentile};
use crate::validation::GrowthMeasurement;
use crate::zscore::ZScoreMethod;

/// Result of one indicator calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IndicatorScore {
    pub indicator: Indicator,
    /// Age in months or height in cm, depending on the indicator's axis
    pub key: f64,
    /// Weight (kg), height (cm) or BMI (kg/m²)
    pub value: f64,
    /// Interpolated reference parameters at `key`
    pub params: LmsParameters,
    pub z_score: f64,
    /// Percentile (0-100) of `z_score` under the standard normal
    pub percentile: f64,
    /// False when the z-score is outside the WHO plausibility range
    pub plausible: bool,
}

/// Table key for `indicator`: age in months or height in cm
pub(crate) fn table_key(indicator: Indicator, measurement: &GrowthMeasurement) -> f64 {
    match indicator.axis() {
        Axis::AgeMonths => measurement.age_months(),
        Axis::HeightCm => measurement.height_cm(),
    }
}

/// Shared pipeline behind every indicator
pub(crate) fn score_indicator(
    indicator: Indicator,
    measurement: &GrowthMeasurement,
    value: f64,
    tables: &ReferenceTables,
    method: ZScoreMethod,
) -> Result<IndicatorScore> {
    let key = table_key(indicator, measurement);
    let table = tables.table(indicator, measurement.sex())?;
    let params = lookup(table, key);

    // Height-for-age is never rescaled
    let z_score = if indicator.is_weight_based() {
        method.compute(value, &params)?
    } else {
        ZScoreMethod::Lms.compute(value, &params)?
    };

    Ok(IndicatorScore {
        indicator,
        key,
        value,
        params,
        z_score,
        percentile: z_to_percentile(z_score),
        plausible: is_plausible(indicator, z_score),
    })
}
