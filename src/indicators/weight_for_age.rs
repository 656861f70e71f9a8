//! WEIGHT-FOR-AGE (WAZ)
//!
//! Weight in kg against the sex-specific weight-for-age table, keyed by age
//! in months.

use super::{score_indicator, IndicatorScore};
use crate::error::Result;
use crate::reference::{Indicator, ReferenceTables};
use crate::validation::GrowthMeasurement;
use crate::zscore::ZScoreMethod;

pub fn calculate_weight_for_age(
    measurement: &GrowthMeasurement,
    tables: &ReferenceTables,
    method: ZScoreMethod,
) -> Result<IndicatorScore> {
    score_indicator(
        Indicator::WeightForAge,
        measurement,
        measurement.weight_kg(),
        tables,
        method,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::{LmsParameters, Sex};
    use crate::zscore::z_score;
    use approx::assert_relative_eq;

    #[test]
    fn test_female_24_months_uses_exact_row() {
        let tables = ReferenceTables::who_embedded();
        let m = GrowthMeasurement::new(24.0, 11.5, 92.0, Sex::Female).unwrap();
        let score = calculate_weight_for_age(&m, &tables, ZScoreMethod::Lms).unwrap();

        let expected_params = LmsParameters::new(-0.6767, 10.665, 0.10111);
        assert_eq!(score.params, expected_params);
        assert_relative_eq!(
            score.z_score,
            z_score(11.5, &expected_params).unwrap(),
            epsilon = 1e-12
        );
        assert!(score.plausible);
    }

    #[test]
    fn test_median_weight_scores_zero() {
        let tables = ReferenceTables::who_embedded();
        let m = GrowthMeasurement::new(12.0, 9.6479, 75.0, Sex::Male).unwrap();
        let score = calculate_weight_for_age(&m, &tables, ZScoreMethod::Lms).unwrap();
        assert_relative_eq!(score.z_score, 0.0, epsilon = 1e-9);
        assert_relative_eq!(score.percentile, 50.0, epsilon = 1e-6);
    }
}
