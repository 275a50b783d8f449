//! CLI command implementations

pub mod archetypes;
pub mod classify;
pub mod risk;

use crate::error::{CliError, CliResult};
use adm_types::{ApplicationProfile, RiskTier};
use colored::*;
use std::io::Read;

/// Read a profile from a JSON or YAML file, or from stdin when `file` is `-`.
///
/// Files ending in `.yaml` or `.yml` are parsed as YAML, everything else as
/// JSON. Stdin is tried as JSON first, then YAML.
pub fn read_profile(file: &str) -> CliResult<ApplicationProfile> {
    if file == "-" {
        let mut contents = String::new();
        std::io::stdin().read_to_string(&mut contents)?;
        return parse_stdin(&contents);
    }

    let contents = std::fs::read_to_string(file)?;
    let profile = if file.ends_with(".yaml") || file.ends_with(".yml") {
        serde_yaml::from_str(&contents)?
    } else {
        serde_json::from_str(&contents)?
    };
    tracing::debug!(file, "Profile loaded");
    Ok(profile)
}

fn parse_stdin(contents: &str) -> CliResult<ApplicationProfile> {
    if contents.trim().is_empty() {
        return Err(CliError::InvalidInput("empty profile on stdin".into()));
    }
    match serde_json::from_str(contents) {
        Ok(profile) => Ok(profile),
        Err(_) => Ok(serde_yaml::from_str(contents)?),
    }
}

/// Risk tier colored by severity
pub fn colorize_tier(tier: RiskTier) -> ColoredString {
    match tier {
        RiskTier::Low => tier.as_str().green(),
        RiskTier::Moderate => tier.as_str().yellow(),
        RiskTier::High => tier.as_str().red(),
        RiskTier::Critical => tier.as_str().red().bold(),
    }
}
