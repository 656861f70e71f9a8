//! Utility modules for growth scoring
//!
//! Contains shared numeric helpers used across indicators:
//! - Interpolation: LMS lookup between reference table rows
//! - Distribution: z-score to percentile conversion

pub mod interpolation;
pub mod distribution;

// Re-export commonly used functions
pub use interpolation::lookup;
pub use distribution::{normal_cdf, z_to_percentile};
