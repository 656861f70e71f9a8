//! LMS Interpolation
//!
//! Locates the bracketing rows of a reference table and linearly interpolates
//! L, M and S independently. Queries outside the table are clamped to the
//! boundary row (no extrapolation).

use crate::reference::{LmsParameters, LmsTable};

/// Interpolated LMS parameters at `key`
///
/// Algorithm:
/// 1. `key <= first.key` returns the first row unchanged
/// 2. `key >= last.key` returns the last row unchanged
/// 3. Find the first adjacent pair [k_lo, k_hi] with k_lo <= key <= k_hi
/// 4. value = lo + (hi - lo) × (key - k_lo) / (k_hi - k_lo), per component
pub fn lookup(table: &LmsTable, key: f64) -> LmsParameters {
    let points = table.points();
    let first = table.first();
    let last = table.last();

    // Edge cases (also covers single-row tables)
    if key <= first.key {
        return first.params;
    }
    if key >= last.key {
        return last.params;
    }

    for pair in points.windows(2) {
        let (lo, hi) = (&pair[0], &pair[1]);
        if lo.key <= key && key <= hi.key {
            let fraction = (key - lo.key) / (hi.key - lo.key);
            return LmsParameters {
                l: lerp(lo.params.l, hi.params.l, fraction),
                m: lerp(lo.params.m, hi.params.m, fraction),
                s: lerp(lo.params.s, hi.params.s, fraction),
            };
        }
    }

    // Unreachable for a sorted table with finite key; NaN keys land here
    last.params
}

#[inline]
fn lerp(lo: f64, hi: f64, fraction: f64) -> f64 {
    lo + (hi - lo) * fraction
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::LmsPoint;
    use approx::assert_relative_eq;

    fn sample_table() -> LmsTable {
        LmsTable::new(vec![
            LmsPoint::new(0.0, 0.4, 3.0, 0.14),
            LmsPoint::new(12.0, 0.0, 9.0, 0.12),
            LmsPoint::new(24.0, -0.2, 12.0, 0.11),
        ])
        .unwrap()
    }

    #[test]
    fn test_clamps_outside_range() {
        let table = sample_table();
        assert_eq!(lookup(&table, -5.0), table.first().params);
        assert_eq!(lookup(&table, 0.0), table.first().params);
        assert_eq!(lookup(&table, 24.0), table.last().params);
        assert_eq!(lookup(&table, 1000.0), table.last().params);
    }

    #[test]
    fn test_exact_key_returns_row() {
        let table = sample_table();
        let params = lookup(&table, 12.0);
        assert_relative_eq!(params.l, 0.0, epsilon = 1e-12);
        assert_relative_eq!(params.m, 9.0, epsilon = 1e-12);
        assert_relative_eq!(params.s, 0.12, epsilon = 1e-12);
    }

    #[test]
    fn test_midpoint_is_componentwise_average() {
        let table = sample_table();
        let params = lookup(&table, 6.0);
        assert_relative_eq!(params.l, 0.2, epsilon = 1e-12);
        assert_relative_eq!(params.m, 6.0, epsilon = 1e-12);
        assert_relative_eq!(params.s, 0.13, epsilon = 1e-12);
    }

    #[test]
    fn test_quarter_point() {
        let table = sample_table();
        let params = lookup(&table, 15.0);
        assert_relative_eq!(params.l, -0.05, epsilon = 1e-12);
        assert_relative_eq!(params.m, 9.75, epsilon = 1e-12);
        assert_relative_eq!(params.s, 0.1175, epsilon = 1e-12);
    }

    #[test]
    fn test_single_row_table() {
        let table = LmsTable::new(vec![LmsPoint::new(10.0, 1.0, 70.0, 0.03)]).unwrap();
        for key in [-1.0, 10.0, 50.0] {
            assert_eq!(lookup(&table, key), table.first().params);
        }
    }
}
