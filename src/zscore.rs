//! Z-Score Transform
//!
//! Box-Cox (LMS) standardization used by the WHO Child Growth Standards:
//!
//! - L ≠ 0: z = ((x / M)^L − 1) / (L × S)
//! - L = 0: z = ln(x / M) / S
//!
//! Also provides the inverse transform (measurement at a given z) and the WHO
//! "restricted application" for weight-based indicators, which rescales values
//! beyond ±3 SD by the distance between the 2 SD and 3 SD curves.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{GrowthError, Result};
use crate::reference::LmsParameters;

/// |L| below this is treated as the log-normal case
const LAMBDA_ZERO_TOLERANCE: f64 = 1e-12;

/// How weight-based z-scores are computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZScoreMethod {
    /// Plain LMS transform everywhere
    #[default]
    Lms,
    /// WHO restricted application: SD23 rescaling beyond ±3 SD
    WhoRestricted,
}

impl ZScoreMethod {
    pub fn compute(&self, measurement: f64, params: &LmsParameters) -> Result<f64> {
        match self {
            ZScoreMethod::Lms => z_score(measurement, params),
            ZScoreMethod::WhoRestricted => restricted_z_score(measurement, params),
        }
    }
}

impl FromStr for ZScoreMethod {
    type Err = GrowthError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "lms" => Ok(ZScoreMethod::Lms),
            "restricted" | "who_restricted" | "sd23" => Ok(ZScoreMethod::WhoRestricted),
            other => Err(GrowthError::InvalidInput(format!(
                "unknown z-score method '{}' (expected lms or restricted)",
                other
            ))),
        }
    }
}

fn check_params(params: &LmsParameters) -> Result<()> {
    if !params.is_finite() {
        return Err(GrowthError::InvalidInput(format!(
            "LMS parameters must be finite (L={}, M={}, S={})",
            params.l, params.m, params.s
        )));
    }
    if params.m <= 0.0 || params.s <= 0.0 {
        return Err(GrowthError::InvalidInput(format!(
            "LMS median and coefficient of variation must be positive (M={}, S={})",
            params.m, params.s
        )));
    }
    Ok(())
}

/// LMS z-score of `measurement`
pub fn z_score(measurement: f64, params: &LmsParameters) -> Result<f64> {
    if !measurement.is_finite() || measurement <= 0.0 {
        return Err(GrowthError::InvalidInput(format!(
            "measurement must be a finite positive number, got {}",
            measurement
        )));
    }
    check_params(params)?;

    let ratio = measurement / params.m;
    let z = if params.l.abs() < LAMBDA_ZERO_TOLERANCE {
        ratio.ln() / params.s
    } else {
        (ratio.powf(params.l) - 1.0) / (params.l * params.s)
    };

    Ok(z)
}

/// Measurement lying exactly `z` SD from the median (inverse LMS transform)
pub fn value_at_z(z: f64, params: &LmsParameters) -> Result<f64> {
    if !z.is_finite() {
        return Err(GrowthError::InvalidInput(format!("z must be finite, got {}", z)));
    }
    check_params(params)?;

    if params.l.abs() < LAMBDA_ZERO_TOLERANCE {
        return Ok(params.m * (params.s * z).exp());
    }

    let base = 1.0 + params.l * params.s * z;
    if base <= 0.0 {
        return Err(GrowthError::InvalidInput(format!(
            "z = {} lies outside the support of L={}, S={}",
            z, params.l, params.s
        )));
    }

    Ok(params.m * base.powf(1.0 / params.l))
}

/// WHO restricted z-score for weight-based indicators
///
/// Beyond +3 SD: z = 3 + (x − SD3pos) / (SD3pos − SD2pos)
/// Below −3 SD:  z = −3 + (x − SD3neg) / (SD2neg − SD3neg)
/// Otherwise identical to [`z_score`].
pub fn restricted_z_score(measurement: f64, params: &LmsParameters) -> Result<f64> {
    let z = z_score(measurement, params)?;

    if z > 3.0 {
        let sd3 = value_at_z(3.0, params)?;
        let sd23 = sd3 - value_at_z(2.0, params)?;
        Ok(3.0 + (measurement - sd3) / sd23)
    } else if z < -3.0 {
        let sd3 = value_at_z(-3.0, params)?;
        let sd23 = value_at_z(-2.0, params)? - sd3;
        Ok(-3.0 + (measurement - sd3) / sd23)
    } else {
        Ok(z)
    }
}
