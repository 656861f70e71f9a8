//! Embedded WHO Child Growth Standards LMS tables
//!
//! Abbreviated reference set: sparse age (months) and height (cm) points taken
//! from the WHO 2006 standards for children 0-60 months. Values between points
//! are linearly interpolated. Load the complete official tables through
//! [`ReferenceTables::load`](super::ReferenceTables::load) where exact WHO
//! agreement matters.
//!
//! Height-for-age uses L = 1 throughout (normally distributed). The weight
//! tables carry the WHO skewness terms.

use super::{Indicator, LmsPoint, LmsTable, Sex};

// ============================================================================
// WEIGHT-FOR-AGE (key: age in months)
// ============================================================================

static WFA_MALE: &[LmsPoint] = &[
    LmsPoint::new(0.0, 0.3487, 3.3464, 0.14602),
    LmsPoint::new(1.0, 0.2297, 4.4709, 0.13395),
    LmsPoint::new(2.0, 0.1970, 5.5675, 0.12385),
    LmsPoint::new(3.0, 0.1738, 6.3762, 0.11727),
    LmsPoint::new(6.0, 0.1257, 7.9340, 0.10958),
    LmsPoint::new(9.0, 0.0917, 8.9014, 0.10881),
    LmsPoint::new(12.0, 0.0644, 9.6479, 0.10925),
    LmsPoint::new(18.0, 0.0211, 10.9385, 0.11129),
    LmsPoint::new(24.0, -0.0137, 12.1515, 0.11426),
    LmsPoint::new(36.0, -0.0689, 14.3429, 0.12008),
    LmsPoint::new(48.0, -0.1308, 16.3489, 0.12551),
    LmsPoint::new(60.0, -0.1820, 18.3366, 0.13015),
];

static WFA_FEMALE: &[LmsPoint] = &[
    LmsPoint::new(0.0, 0.3809, 3.2322, 0.14171),
    LmsPoint::new(1.0, 0.1714, 4.1873, 0.13724),
    LmsPoint::new(2.0, 0.0962, 5.1282, 0.13000),
    LmsPoint::new(3.0, 0.0402, 5.8458, 0.12619),
    LmsPoint::new(6.0, -0.0756, 7.2970, 0.12204),
    LmsPoint::new(9.0, -0.1507, 8.2254, 0.12199),
    LmsPoint::new(12.0, -0.2024, 8.9481, 0.12268),
    LmsPoint::new(18.0, -0.2820, 10.2315, 0.12524),
    LmsPoint::new(24.0, -0.6767, 10.665, 0.10111),
    LmsPoint::new(36.0, -0.3760, 13.8503, 0.13453),
    LmsPoint::new(48.0, -0.4680, 16.0697, 0.14034),
    LmsPoint::new(60.0, -0.5508, 18.2193, 0.14554),
];

// ============================================================================
// HEIGHT-FOR-AGE (key: age in months; length below 24 months)
// ============================================================================

static HFA_MALE: &[LmsPoint] = &[
    LmsPoint::new(0.0, 1.0, 49.8842, 0.03795),
    LmsPoint::new(3.0, 1.0, 61.4292, 0.03328),
    LmsPoint::new(6.0, 1.0, 67.6236, 0.03165),
    LmsPoint::new(9.0, 1.0, 72.0000, 0.03141),
    LmsPoint::new(12.0, 1.0, 75.7488, 0.03137),
    LmsPoint::new(18.0, 1.0, 82.2587, 0.03224),
    LmsPoint::new(24.0, 1.0, 87.1161, 0.03507),
    LmsPoint::new(36.0, 1.0, 96.0835, 0.03802),
    LmsPoint::new(48.0, 1.0, 103.3273, 0.04001),
    LmsPoint::new(60.0, 1.0, 110.0000, 0.04164),
];

static HFA_FEMALE: &[LmsPoint] = &[
    LmsPoint::new(0.0, 1.0, 49.1477, 0.03790),
    LmsPoint::new(3.0, 1.0, 59.8029, 0.03640),
    LmsPoint::new(6.0, 1.0, 65.7311, 0.03448),
    LmsPoint::new(9.0, 1.0, 70.1435, 0.03479),
    LmsPoint::new(12.0, 1.0, 74.0150, 0.03479),
    LmsPoint::new(18.0, 1.0, 80.7079, 0.03598),
    LmsPoint::new(24.0, 1.0, 85.7153, 0.03764),
    LmsPoint::new(36.0, 1.0, 95.0515, 0.04020),
    LmsPoint::new(48.0, 1.0, 102.7312, 0.04237),
    LmsPoint::new(60.0, 1.0, 109.4233, 0.04385),
];

// ============================================================================
// WEIGHT-FOR-HEIGHT (key: height in cm)
// ============================================================================

static WFH_MALE: &[LmsPoint] = &[
    LmsPoint::new(45.0, -0.3521, 2.4410, 0.09182),
    LmsPoint::new(50.0, -0.3521, 3.3278, 0.08929),
    LmsPoint::new(55.0, -0.3521, 4.5200, 0.08600),
    LmsPoint::new(60.0, -0.3521, 5.9600, 0.08300),
    LmsPoint::new(65.0, -0.3521, 7.3200, 0.08100),
    LmsPoint::new(70.0, -0.3521, 8.5500, 0.08020),
    LmsPoint::new(75.0, -0.3521, 9.6300, 0.07980),
    LmsPoint::new(80.0, -0.3521, 10.6400, 0.07960),
    LmsPoint::new(85.0, -0.3521, 11.7200, 0.07990),
    LmsPoint::new(90.0, -0.3521, 12.9000, 0.08040),
    LmsPoint::new(95.0, -0.3521, 14.0500, 0.08110),
    LmsPoint::new(100.0, -0.3521, 15.3900, 0.08200),
    LmsPoint::new(105.0, -0.3521, 16.8400, 0.08310),
    LmsPoint::new(110.0, -0.3521, 18.4400, 0.08430),
    LmsPoint::new(115.0, -0.3521, 20.2100, 0.08530),
    LmsPoint::new(120.0, -0.3521, 22.1400, 0.08580),
];

static WFH_FEMALE: &[LmsPoint] = &[
    LmsPoint::new(45.0, -0.3833, 2.4607, 0.09029),
    LmsPoint::new(50.0, -0.3833, 3.4000, 0.09000),
    LmsPoint::new(55.0, -0.3833, 4.5400, 0.08900),
    LmsPoint::new(60.0, -0.3833, 5.8500, 0.08800),
    LmsPoint::new(65.0, -0.3833, 7.1300, 0.08700),
    LmsPoint::new(70.0, -0.3833, 8.2800, 0.08650),
    LmsPoint::new(75.0, -0.3833, 9.3300, 0.08600),
    LmsPoint::new(80.0, -0.3833, 10.3300, 0.08580),
    LmsPoint::new(85.0, -0.3833, 11.4700, 0.08590),
    LmsPoint::new(90.0, -0.3833, 12.7000, 0.08640),
    LmsPoint::new(95.0, -0.3833, 13.9600, 0.08730),
    LmsPoint::new(100.0, -0.3833, 15.2800, 0.08850),
    LmsPoint::new(105.0, -0.3833, 16.7400, 0.09000),
    LmsPoint::new(110.0, -0.3833, 18.3500, 0.09150),
    LmsPoint::new(115.0, -0.3833, 20.1300, 0.09290),
    LmsPoint::new(120.0, -0.3833, 22.0400, 0.09400),
];

/// Every embedded table with its (indicator, sex) tag
pub fn embedded_tables() -> [(Indicator, Sex, LmsTable); 6] {
    [
        (Indicator::WeightForAge, Sex::Male, LmsTable::from_static(WFA_MALE)),
        (Indicator::WeightForAge, Sex::Female, LmsTable::from_static(WFA_FEMALE)),
        (Indicator::HeightForAge, Sex::Male, LmsTable::from_static(HFA_MALE)),
        (Indicator::HeightForAge, Sex::Female, LmsTable::from_static(HFA_FEMALE)),
        (Indicator::WeightForHeight, Sex::Male, LmsTable::from_static(WFH_MALE)),
        (Indicator::WeightForHeight, Sex::Female, LmsTable::from_static(WFH_FEMALE)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_strictly_ascending() {
        for (indicator, sex, table) in embedded_tables() {
            assert!(table.len() >= 2, "{} {} needs at least two rows", indicator, sex);
            for pair in table.points().windows(2) {
                assert!(
                    pair[0].key < pair[1].key,
                    "{} {}: keys {} and {} out of order",
                    indicator,
                    sex,
                    pair[0].key,
                    pair[1].key
                );
            }
        }
    }

    #[test]
    fn test_parameters_positive_and_medians_increase() {
        for (indicator, sex, table) in embedded_tables() {
            for point in table.points() {
                assert!(point.params.is_finite());
                assert!(point.params.m > 0.0, "{} {} key {}", indicator, sex, point.key);
                assert!(point.params.s > 0.0, "{} {} key {}", indicator, sex, point.key);
            }
            for pair in table.points().windows(2) {
                assert!(
                    pair[0].params.m < pair[1].params.m,
                    "{} {}: median should grow between {} and {}",
                    indicator,
                    sex,
                    pair[0].key,
                    pair[1].key
                );
            }
        }
    }

    #[test]
    fn test_height_for_age_is_normal() {
        for table in [HFA_MALE, HFA_FEMALE] {
            assert!(table.iter().all(|p| p.params.l == 1.0));
        }
    }

    #[test]
    fn test_documented_female_weight_for_age_at_24_months() {
        let point = WFA_FEMALE.iter().find(|p| p.key == 24.0).unwrap();
        assert_eq!(point.params.l, -0.6767);
        assert_eq!(point.params.m, 10.665);
        assert_eq!(point.params.s, 0.10111);
    }
}
