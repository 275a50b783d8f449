use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Code of a behavioral archetype.
///
/// The twelve catalog archetypes are declared in catalog order; that order
/// breaks every probability tie. [`ArchetypeCode::Unclassified`] is the
/// fallback used when no archetype survives filtering and is not part of
/// the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ArchetypeCode {
    #[serde(rename = "A1")]
    AssistiveTextGeneration,
    #[serde(rename = "A2")]
    ConversationalAssistant,
    #[serde(rename = "A3")]
    RagKnowledgeAssistant,
    #[serde(rename = "A4")]
    StructuredExtraction,
    #[serde(rename = "A5")]
    CodeAssistant,
    #[serde(rename = "A6")]
    AnalyticsInsight,
    #[serde(rename = "A7")]
    MultimodalProcessor,
    #[serde(rename = "A8")]
    ToolUsingAgent,
    #[serde(rename = "A9")]
    AutonomousWorkflowAgent,
    #[serde(rename = "A10")]
    FineTunedDomainExpert,
    #[serde(rename = "A11")]
    EnterpriseIntegrated,
    #[serde(rename = "A12")]
    SafetyCriticalRegulated,
    #[serde(rename = "U0")]
    Unclassified,
}

impl ArchetypeCode {
    /// The twelve catalog archetypes in declaration order.
    pub const ALL: [ArchetypeCode; 12] = [
        ArchetypeCode::AssistiveTextGeneration,
        ArchetypeCode::ConversationalAssistant,
        ArchetypeCode::RagKnowledgeAssistant,
        ArchetypeCode::StructuredExtraction,
        ArchetypeCode::CodeAssistant,
        ArchetypeCode::AnalyticsInsight,
        ArchetypeCode::MultimodalProcessor,
        ArchetypeCode::ToolUsingAgent,
        ArchetypeCode::AutonomousWorkflowAgent,
        ArchetypeCode::FineTunedDomainExpert,
        ArchetypeCode::EnterpriseIntegrated,
        ArchetypeCode::SafetyCriticalRegulated,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ArchetypeCode::AssistiveTextGeneration => "A1",
            ArchetypeCode::ConversationalAssistant => "A2",
            ArchetypeCode::RagKnowledgeAssistant => "A3",
            ArchetypeCode::StructuredExtraction => "A4",
            ArchetypeCode::CodeAssistant => "A5",
            ArchetypeCode::AnalyticsInsight => "A6",
            ArchetypeCode::MultimodalProcessor => "A7",
            ArchetypeCode::ToolUsingAgent => "A8",
            ArchetypeCode::AutonomousWorkflowAgent => "A9",
            ArchetypeCode::FineTunedDomainExpert => "A10",
            ArchetypeCode::EnterpriseIntegrated => "A11",
            ArchetypeCode::SafetyCriticalRegulated => "A12",
            ArchetypeCode::Unclassified => "U0",
        }
    }

    /// Position in the catalog, `None` for the unclassified fallback.
    pub fn catalog_index(&self) -> Option<usize> {
        Self::ALL.iter().position(|c| c == self)
    }

    /// Catalog entry for this code.
    pub fn definition(&self) -> &'static ArchetypeDefinition {
        match self.catalog_index() {
            Some(index) => &CATALOG[index],
            None => &UNCLASSIFIED,
        }
    }

    pub fn name(&self) -> &'static str {
        self.definition().name
    }
}

impl fmt::Display for ArchetypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing an archetype code.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown archetype code: {0}")]
pub struct UnknownArchetype(pub String);

impl FromStr for ArchetypeCode {
    type Err = UnknownArchetype;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        if wanted.eq_ignore_ascii_case(UNCLASSIFIED.code.as_str()) {
            return Ok(ArchetypeCode::Unclassified);
        }
        Self::ALL
            .iter()
            .copied()
            .find(|code| code.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownArchetype(s.to_string()))
    }
}

/// Static catalog entry describing an archetype.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ArchetypeDefinition {
    pub code: ArchetypeCode,
    pub name: &'static str,
    pub summary: &'static str,
}

/// The archetype catalog, in declaration order.
pub static CATALOG: [ArchetypeDefinition; 12] = [
    ArchetypeDefinition {
        code: ArchetypeCode::AssistiveTextGeneration,
        name: "Assistive Text Generation",
        summary: "Single-turn drafting, summarising, or rewriting without tools or retrieval",
    },
    ArchetypeDefinition {
        code: ArchetypeCode::ConversationalAssistant,
        name: "Conversational Assistant",
        summary: "Multi-turn dialogue that carries state across turns",
    },
    ArchetypeDefinition {
        code: ArchetypeCode::RagKnowledgeAssistant,
        name: "RAG Knowledge Assistant",
        summary: "Answers grounded in retrieved enterprise or public knowledge",
    },
    ArchetypeDefinition {
        code: ArchetypeCode::StructuredExtraction,
        name: "Structured Extraction",
        summary: "Turns documents or text into schema-constrained records",
    },
    ArchetypeDefinition {
        code: ArchetypeCode::CodeAssistant,
        name: "Code Assistant",
        summary: "Generates, explains, or executes source code",
    },
    ArchetypeDefinition {
        code: ArchetypeCode::AnalyticsInsight,
        name: "Analytics & Insight",
        summary: "Natural-language analytics, reporting, and dashboards over data",
    },
    ArchetypeDefinition {
        code: ArchetypeCode::MultimodalProcessor,
        name: "Multimodal Processor",
        summary: "Consumes or produces images, audio, or video",
    },
    ArchetypeDefinition {
        code: ArchetypeCode::ToolUsingAgent,
        name: "Tool-Using Agent",
        summary: "Calls tools or APIs on the user's behalf under supervision",
    },
    ArchetypeDefinition {
        code: ArchetypeCode::AutonomousWorkflowAgent,
        name: "Autonomous Workflow Agent",
        summary: "Plans and executes multi-step workflows with limited human approval",
    },
    ArchetypeDefinition {
        code: ArchetypeCode::FineTunedDomainExpert,
        name: "Fine-Tuned Domain Expert",
        summary: "Customised model weights specialised to a domain",
    },
    ArchetypeDefinition {
        code: ArchetypeCode::EnterpriseIntegrated,
        name: "Enterprise-Integrated",
        summary: "Embedded in systems of record behind enterprise release controls",
    },
    ArchetypeDefinition {
        code: ArchetypeCode::SafetyCriticalRegulated,
        name: "Safety-Critical / Regulated",
        summary: "Operates under regulatory oversight or where failures cause harm",
    },
];

/// Fallback entry used when no archetype survives filtering.
pub static UNCLASSIFIED: ArchetypeDefinition = ArchetypeDefinition {
    code: ArchetypeCode::Unclassified,
    name: "Unclassified",
    summary: "No archetype reached the survival threshold; requires manual review",
};

/// The twelve catalog archetypes.
pub fn catalog() -> &'static [ArchetypeDefinition] {
    &CATALOG
}
