//! Standard normal distribution helpers
//!
//! Converts z-scores to percentiles for reporting.

use std::f64::consts::SQRT_2;

/// Standard normal CDF Φ(z)
pub fn normal_cdf(z: f64) -> f64 {
    0.5 * (1.0 + libm::erf(z / SQRT_2))
}

/// Percentile (0-100) corresponding to a z-score
pub fn z_to_percentile(z: f64) -> f64 {
    100.0 * normal_cdf(z)
}
