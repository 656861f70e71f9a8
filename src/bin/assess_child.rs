//! Assess a single child from the command line
//!
//! Prints the composite assessment as JSON.
//!
//! Run with: cargo run --bin assess_child -- <age_months> <weight_kg> <height_cm> <sex> [--restricted]
//!
//! `LMS_REFERENCE_PATH` may point at a JSON reference set to overlay on the
//! embedded tables.

use anyhow::{bail, Context, Result};
use growth_scorer_rust::{AssessorConfig, GrowthAssessor, GrowthError, RawMeasurement, ZScoreMethod};

const USAGE: &str = "usage: assess_child <age_months> <weight_kg> <height_cm> <sex> [--restricted]";

/// Command-line arguments after the program name
#[derive(Debug, PartialEq)]
struct Args {
    positional: Vec<String>,
    restricted: bool,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Args> {
    let mut positional = Vec::new();
    let mut restricted = false;

    for arg in args {
        if arg == "--restricted" {
            restricted = true;
        } else if arg.starts_with("--") {
            bail!("unknown option '{}'\n{}", arg, USAGE);
        } else {
            positional.push(arg);
        }
    }

    if positional.len() != 4 {
        bail!(USAGE);
    }

    Ok(Args { positional, restricted })
}

fn main() -> Result<()> {
    let Args { positional, restricted } = parse_args(std::env::args().skip(1))?;

    let mut config = AssessorConfig::from_env().context("Invalid assessor configuration")?;
    if restricted {
        config.z_score_method = ZScoreMethod::WhoRestricted;
    }
    let assessor = GrowthAssessor::with_config(&config).context("Failed to load reference tables")?;

    // Strings go through the same validation as form input
    let raw = RawMeasurement::new(
        positional[0].as_str(),
        positional[1].as_str(),
        positional[2].as_str(),
        positional[3].as_str(),
    );

    match assessor.assess(&raw) {
        Ok(assessment) => {
            println!("{}", serde_json::to_string_pretty(&assessment)?);
            Ok(())
        }
        Err(GrowthError::Validation(errors)) => {
            for violation in errors.violations() {
                eprintln!("  {}: {}", violation.field, violation.reason);
            }
            bail!("{} invalid field(s)", errors.len())
        }
        Err(e) => Err(e.into()),
    }
}
