//! Classification functions for growth z-scores.
//!
//! WHO cut-offs at −3, −2, +2 and +3 SD. Comparisons are strict on every
//! cut-off, so a z-score exactly on a boundary falls in the less severe band.

use serde::{Deserialize, Serialize};

use crate::reference::Indicator;

// ============================================================================
// Thresholds
// ============================================================================

pub const SEVERE_CUTOFF: f64 = -3.0;
pub const MODERATE_CUTOFF: f64 = -2.0;
pub const OVERWEIGHT_CUTOFF: f64 = 2.0;
pub const OBESITY_CUTOFF: f64 = 3.0;

// ============================================================================
// Status labels
// ============================================================================

/// Weight-for-age status (underweight)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeightStatus {
    SeverelyUnderweight,
    ModeratelyUnderweight,
    Normal,
}

/// Height-for-age status (stunting)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeightStatus {
    SeverelyStunted,
    Stunted,
    Normal,
}

/// Weight-for-height / BMI-for-age status (wasting and overweight)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NutritionStatus {
    SevereWasting,
    Wasting,
    Normal,
    Overweight,
    Obesity,
}

impl WeightStatus {
    pub fn label(&self) -> &'static str {
        match self {
            WeightStatus::SeverelyUnderweight => "Severely underweight",
            WeightStatus::ModeratelyUnderweight => "Moderately underweight",
            WeightStatus::Normal => "Normal weight",
        }
    }
}

impl HeightStatus {
    pub fn label(&self) -> &'static str {
        match self {
            HeightStatus::SeverelyStunted => "Severely stunted",
            HeightStatus::Stunted => "Stunted",
            HeightStatus::Normal => "Normal height",
        }
    }
}

impl NutritionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            NutritionStatus::SevereWasting => "Severe wasting",
            NutritionStatus::Wasting => "Wasting",
            NutritionStatus::Normal => "Normal",
            NutritionStatus::Overweight => "Overweight",
            NutritionStatus::Obesity => "Obesity",
        }
    }
}

// ============================================================================
// Classifiers
// ============================================================================

/// Weight-for-age never reports overweight: WAZ alone is not diagnostic of it
pub fn classify_weight_for_age(z: f64) -> WeightStatus {
    if z < SEVERE_CUTOFF {
        WeightStatus::SeverelyUnderweight
    } else if z < MODERATE_CUTOFF {
        WeightStatus::ModeratelyUnderweight
    } else {
        WeightStatus::Normal
    }
}

pub fn classify_height_for_age(z: f64) -> HeightStatus {
    if z < SEVERE_CUTOFF {
        HeightStatus::SeverelyStunted
    } else if z < MODERATE_CUTOFF {
        HeightStatus::Stunted
    } else {
        HeightStatus::Normal
    }
}

pub fn classify_weight_for_height_or_bmi(z: f64) -> NutritionStatus {
    if z < SEVERE_CUTOFF {
        NutritionStatus::SevereWasting
    } else if z < MODERATE_CUTOFF {
        NutritionStatus::Wasting
    } else if z > OBESITY_CUTOFF {
        NutritionStatus::Obesity
    } else if z > OVERWEIGHT_CUTOFF {
        NutritionStatus::Overweight
    } else {
        NutritionStatus::Normal
    }
}

// ============================================================================
// Plausibility flags
// ============================================================================

/// WHO range outside which a z-score is flagged as biologically implausible
pub fn plausible_range(indicator: Indicator) -> (f64, f64) {
    match indicator {
        Indicator::WeightForAge => (-6.0, 5.0),
        Indicator::HeightForAge => (-6.0, 6.0),
        Indicator::WeightForHeight | Indicator::BmiForAge => (-5.0, 5.0),
    }
}

/// Flag only; implausible values are still reported
pub fn is_plausible(indicator: Indicator, z: f64) -> bool {
    let (lo, hi) = plausible_range(indicator);
    (lo..=hi).contains(&z)
}
