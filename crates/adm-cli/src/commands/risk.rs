//! Risk assessment command

use super::{colorize_tier, read_profile};
use crate::error::CliResult;
use crate::output::{self, OutputFormat};
use adm_engine::assess_risk;
use adm_types::RiskFactor;
use serde::Serialize;
use tabled::Tabled;

/// Table row for one contributing risk band
#[derive(Debug, Serialize, Tabled)]
struct FactorRow {
    #[tabled(rename = "Band")]
    band: String,
    #[tabled(rename = "Points")]
    points: u32,
    #[tabled(rename = "Detail")]
    detail: String,
}

impl From<&RiskFactor> for FactorRow {
    fn from(factor: &RiskFactor) -> Self {
        Self {
            band: format!("{:?}", factor.band),
            points: factor.points,
            detail: factor.detail.clone(),
        }
    }
}

/// Execute the risk command
pub fn execute(file: &str, format: OutputFormat) -> CliResult<()> {
    let profile = read_profile(file)?;
    let risk = assess_risk(&profile);

    match format {
        OutputFormat::Table => {
            output::print_table(risk.factors.iter().map(FactorRow::from).collect());
            println!("Risk score: {} ({})", risk.score, colorize_tier(risk.tier));
        }
        _ => output::print_single(&risk, format)?,
    }
    Ok(())
}
