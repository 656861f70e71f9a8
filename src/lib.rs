//! Growth Scorer Rust Implementation
//!
//! WHO Child Growth Standards z-scores using the LMS (Box-Cox) method.
//!
//! Module layout:
//! - `reference/`: LMS reference tables (embedded WHO set + JSON loading)
//! - `utils/`: Interpolation and normal-distribution helpers
//! - `zscore`: LMS transform, inverse transform, restricted SD23 adjustment
//! - `classify`: WHO status bands and plausibility flags
//! - `indicators/`: Weight-for-age, height-for-age, weight-for-height / BMI-for-age
//! - `validation`: Raw input parsing, collecting every invalid field
//! - `assessor`: Composite assessment, sequential and parallel batches
//!
//! ```
//! use growth_scorer_rust::{GrowthAssessor, RawMeasurement, HeightStatus};
//!
//! let assessor = GrowthAssessor::new();
//! let result = assessor
//!     .assess(&RawMeasurement::new(24.0, 11.5, 92.0, "female"))
//!     .unwrap();
//! assert_eq!(result.height_status, HeightStatus::Normal);
//! ```

pub mod error;
pub mod reference;
pub mod utils;
pub mod zscore;
pub mod classify;
pub mod indicators;
pub mod validation;
pub mod assessor;

#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
pub use error::{Field, FieldViolation, GrowthError, ValidationErrors};
pub use reference::{Indicator, LmsParameters, LmsPoint, LmsTable, ReferenceTables, Sex};
pub use utils::{lookup, z_to_percentile};
pub use zscore::{restricted_z_score, value_at_z, z_score, ZScoreMethod};
pub use classify::{
    classify_height_for_age, classify_weight_for_age, classify_weight_for_height_or_bmi,
    HeightStatus, NutritionStatus, WeightStatus,
};
pub use indicators::IndicatorScore;
pub use validation::{validate, GrowthMeasurement, RawMeasurement, RawNumber, RawText};
pub use assessor::{AssessorConfig, GrowthAssessment, GrowthAssessor};

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
