//! Profile classification command

use super::{colorize_tier, read_profile};
use crate::error::CliResult;
use crate::output::{self, print_heading, print_list, print_warning, OutputFormat};
use adm_engine::Classifier;
use adm_types::{ArchetypeScore, ClassificationResult};
use colored::*;
use serde::Serialize;
use tabled::Tabled;

/// Table row for a surviving archetype
#[derive(Debug, Serialize, Tabled)]
struct ArchetypeRow {
    #[tabled(rename = "Code")]
    code: String,
    #[tabled(rename = "Archetype")]
    name: String,
    #[tabled(rename = "Score")]
    raw_score: u32,
    #[tabled(rename = "Probability")]
    probability: String,
}

impl From<&ArchetypeScore> for ArchetypeRow {
    fn from(score: &ArchetypeScore) -> Self {
        Self {
            code: score.code.to_string(),
            name: score.name.clone(),
            raw_score: score.raw_score,
            probability: format!("{:.3}", score.probability),
        }
    }
}

/// Execute the classify command
pub fn execute(
    file: &str,
    show_trace: bool,
    classifier: &Classifier,
    format: OutputFormat,
) -> CliResult<()> {
    let profile = read_profile(file)?;
    let result = classifier.classify(&profile);

    match format {
        OutputFormat::Table => print_result(&result, show_trace),
        _ => output::print_single(&result, format)?,
    }
    Ok(())
}

fn print_result(result: &ClassificationResult, show_trace: bool) {
    let primary = &result.primary_archetype;
    println!(
        "Primary:    {} {} (p={:.3})",
        primary.code.to_string().bold(),
        primary.name,
        primary.probability
    );
    println!("Dominant:   {}", result.dominant);
    println!(
        "Risk:       {} ({})",
        result.risk_score,
        colorize_tier(result.risk_tier)
    );
    println!("Confidence: {:.3}", result.confidence);

    let tags: Vec<&str> = result.modifiers.iter().map(|m| m.tag()).collect();
    if !tags.is_empty() {
        println!("Modifiers:  {}", tags.join(", "));
    }

    if result.is_unclassified() {
        println!();
        print_warning("No archetype reached the survival threshold; manual review required");
    } else {
        println!();
        output::print_table(result.archetypes.iter().map(ArchetypeRow::from).collect());
    }

    let rmf = &result.rmf_profile;
    print_list("Controls", &rmf.select_controls);
    print_list("Assessment packs", &rmf.assess_packs);
    print_list("Authorization thresholds", &rmf.authorize_thresholds);
    print_list("Monitoring", &rmf.monitoring);

    if show_trace {
        print_heading("Decision trace");
        for line in &result.decision_trace {
            println!("  {}", line.dimmed());
        }
    }
}
