//! HEIGHT-FOR-AGE (HAZ)
//!
//! Length/height in cm against the height-for-age table, keyed by age in
//! months. Always plain LMS; the restricted adjustment applies to weight only.

use super::{score_indicator, IndicatorScore};
use crate::error::Result;
use crate::reference::{Indicator, ReferenceTables};
use crate::validation::GrowthMeasurement;
use crate::zscore::ZScoreMethod;

pub fn calculate_height_for_age(
    measurement: &GrowthMeasurement,
    tables: &ReferenceTables,
    method: ZScoreMethod,
) -> Result<IndicatorScore> {
    score_indicator(
        Indicator::HeightForAge,
        measurement,
        measurement.height_cm(),
        tables,
        method,
    )
}
