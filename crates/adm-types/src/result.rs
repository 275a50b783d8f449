//! Classification output types.
//!
//! A [`ClassificationResult`] is fully populated when it is returned; nothing
//! in it is computed lazily, so it can be rendered or persisted as-is.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::archetype::{ArchetypeCode, UnknownArchetype};
use crate::risk::RiskTier;

/// One predicate match contributing points to an archetype.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalContribution {
    pub archetype: ArchetypeCode,
    pub description: String,
    pub weight: u32,
}

impl fmt::Display for SignalContribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: {} (+{})",
            self.archetype,
            self.archetype.name(),
            self.description,
            self.weight
        )
    }
}

/// Score of one archetype for one profile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchetypeScore {
    pub code: ArchetypeCode,
    pub name: String,
    pub raw_score: u32,
    /// Share of the total raw score (0.0–1.0)
    pub probability: f64,
    /// Trace labels of the signals that fired
    pub signals: Vec<String>,
}

impl ArchetypeScore {
    /// Synthetic score for the unclassified fallback.
    pub fn unclassified() -> Self {
        Self {
            code: ArchetypeCode::Unclassified,
            name: ArchetypeCode::Unclassified.name().to_string(),
            raw_score: 0,
            probability: 1.0,
            signals: Vec::new(),
        }
    }
}

/// Dominance label: a single archetype, or a mixed-pattern composite.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Dominance {
    Archetype(ArchetypeCode),
    Composite,
}

impl Dominance {
    pub fn is_composite(&self) -> bool {
        matches!(self, Dominance::Composite)
    }
}

impl fmt::Display for Dominance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dominance::Archetype(code) => f.write_str(code.as_str()),
            Dominance::Composite => f.write_str("composite"),
        }
    }
}

impl From<Dominance> for String {
    fn from(value: Dominance) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for Dominance {
    type Error = UnknownArchetype;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.eq_ignore_ascii_case("composite") {
            Ok(Dominance::Composite)
        } else {
            value.parse().map(Dominance::Archetype)
        }
    }
}

/// Wire tags of the capability modifiers. Every other tag is a data class.
pub const CAPABILITY_TAGS: [&str; 7] = ["RAG", "FT", "MM", "AG", "AUTO", "ENT", "REG"];

/// Cross-cutting capability tag attached alongside the classification.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Modifier {
    /// `RAG`: retrieval enabled
    Rag,
    /// `FT`: fine-tuned model
    FineTuned,
    /// `MM`: vision or speech capability
    Multimodal,
    /// `AG`: tool use or planner
    Agentic,
    /// `AUTO`: autonomy threshold above zero
    Autonomous,
    /// One declared data-sensitivity class, e.g. `PII`
    Data(String),
    /// `ENT`: strong enterprise integration
    Enterprise,
    /// `REG`: regulator scope or mandatory human-in-the-loop
    Regulated,
}

impl Modifier {
    pub fn tag(&self) -> &str {
        match self {
            Modifier::Rag => "RAG",
            Modifier::FineTuned => "FT",
            Modifier::Multimodal => "MM",
            Modifier::Agentic => "AG",
            Modifier::Autonomous => "AUTO",
            Modifier::Data(tag) => tag.as_str(),
            Modifier::Enterprise => "ENT",
            Modifier::Regulated => "REG",
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl From<Modifier> for String {
    fn from(value: Modifier) -> Self {
        value.tag().to_string()
    }
}

impl From<String> for Modifier {
    fn from(value: String) -> Self {
        match value.as_str() {
            "RAG" => Modifier::Rag,
            "FT" => Modifier::FineTuned,
            "MM" => Modifier::Multimodal,
            "AG" => Modifier::Agentic,
            "AUTO" => Modifier::Autonomous,
            "ENT" => Modifier::Enterprise,
            "REG" => Modifier::Regulated,
            _ => Modifier::Data(value),
        }
    }
}

/// Governance recommendations for an archetype + risk combination.
///
/// Each list is deduplicated and keeps first-occurrence order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RmfProfile {
    /// The computed risk tier, unchanged
    pub categorize: RiskTier,
    pub select_controls: Vec<String>,
    pub assess_packs: Vec<String>,
    pub authorize_thresholds: Vec<String>,
    pub monitoring: Vec<String>,
}

/// Complete output of one classification.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    /// Resolved primary archetype (after conflict rules)
    pub primary_archetype: ArchetypeScore,
    /// Top surviving archetypes, highest probability first
    pub archetypes: Vec<ArchetypeScore>,
    pub dominant: Dominance,
    /// Capability tags; may contain duplicates
    pub modifiers: Vec<Modifier>,
    pub risk_tier: RiskTier,
    pub risk_score: u32,
    pub confidence: f64,
    pub decision_trace: Vec<String>,
    /// All catalog archetypes, highest probability first
    pub mixture: Vec<ArchetypeScore>,
    pub rmf_profile: RmfProfile,
}

impl ClassificationResult {
    pub fn primary_code(&self) -> ArchetypeCode {
        self.primary_archetype.code
    }

    /// True when no archetype survived filtering.
    pub fn is_unclassified(&self) -> bool {
        self.primary_archetype.code == ArchetypeCode::Unclassified
    }

    pub fn has_modifier(&self, tag: &str) -> bool {
        self.modifiers.iter().any(|m| m.tag() == tag)
    }

    /// Score of a catalog archetype from the mixture.
    pub fn score_of(&self, code: ArchetypeCode) -> Option<&ArchetypeScore> {
        self.mixture.iter().find(|s| s.code == code)
    }
}
