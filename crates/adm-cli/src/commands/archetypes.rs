//! Archetype catalog listing

use crate::error::CliResult;
use crate::output::{self, OutputFormat};
use adm_types::{catalog, ArchetypeDefinition};
use serde::Serialize;
use tabled::Tabled;

#[derive(Debug, Serialize, Tabled)]
struct CatalogRow {
    #[tabled(rename = "Code")]
    code: String,
    #[tabled(rename = "Archetype")]
    name: &'static str,
    #[tabled(rename = "Summary")]
    summary: &'static str,
}

impl From<&ArchetypeDefinition> for CatalogRow {
    fn from(definition: &ArchetypeDefinition) -> Self {
        Self {
            code: definition.code.to_string(),
            name: definition.name,
            summary: definition.summary,
        }
    }
}

/// Execute the archetypes command
pub fn execute(format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Table => {
            output::print_table(catalog().iter().map(CatalogRow::from).collect());
            Ok(())
        }
        _ => output::print_single(&catalog(), format),
    }
}
