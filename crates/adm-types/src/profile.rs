//! Application profile: the declarative description of a GenAI application.
//!
//! Every field is optional. Absent or `null` booleans read as `false`, lists as
//! empty, numbers as `0`. Enumerated fields carry an `Unrecognized`
//! catch-all so that values outside the known vocabulary deserialize instead
//! of failing; classification rules simply do not match them.
//!
//! On the wire the profile is one flat camelCase object. The grouped
//! sub-configurations are flattened into it.

use serde::{Deserialize, Deserializer, Serialize};

use crate::result::CAPABILITY_TAGS;

/// Structured description of a GenAI application, fed into classification.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApplicationProfile {
    /// Business domain (free text, e.g. "healthcare")
    pub domain: Option<String>,
    /// Declared data-sensitivity classes
    #[serde(deserialize_with = "null_as_default")]
    pub data_sensitivity: Vec<DataClass>,
    /// Where the application's outputs land
    pub impact_context: Option<ImpactContext>,
    /// How users interact with the application
    pub interaction_pattern: Option<InteractionPattern>,
    /// Declared input/output modalities
    #[serde(deserialize_with = "null_as_default")]
    pub modalities: Vec<Modality>,
    #[serde(flatten)]
    pub retrieval: RetrievalConfig,
    #[serde(flatten)]
    pub structured_output: StructuredOutputConfig,
    #[serde(flatten)]
    pub code_assist: CodeAssistConfig,
    #[serde(flatten)]
    pub analytics: AnalyticsConfig,
    #[serde(flatten)]
    pub multimodal: MultimodalConfig,
    #[serde(flatten)]
    pub model: ModelConfig,
    #[serde(flatten)]
    pub agentic: AgenticConfig,
    #[serde(flatten)]
    pub enterprise: EnterpriseConfig,
    #[serde(flatten)]
    pub regulatory: RegulatoryConfig,
}

impl ApplicationProfile {
    /// Whether a non-blank business domain is declared.
    pub fn has_domain(&self) -> bool {
        is_declared(self.domain.as_deref())
    }

    /// Whether any declared sensitivity class matches `class`.
    pub fn declares(&self, class: &DataClass) -> bool {
        self.data_sensitivity.iter().any(|c| c == class)
    }

    pub fn is_pattern(&self, pattern: InteractionPattern) -> bool {
        self.interaction_pattern == Some(pattern)
    }

    pub fn is_impact(&self, impact: ImpactContext) -> bool {
        self.impact_context == Some(impact)
    }
}

/// Impact context of the application's outputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactContext {
    Internal,
    CustomerFacing,
    MissionCritical,
    SafetyCritical,
    #[serde(other)]
    Unrecognized,
}

/// Interaction pattern between users and the application.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionPattern {
    SingleTurn,
    MultiTurn,
    Batch,
    #[serde(other)]
    Unrecognized,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modality {
    Text,
    Image,
    Audio,
    Video,
    #[serde(other)]
    Unrecognized,
}

/// Output format requested from the model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    None,
    Json,
    JsonSchema,
    Xml,
    #[serde(other)]
    Unrecognized,
}

impl OutputFormat {
    /// Whether the format constrains output to a machine-readable structure.
    pub fn is_structured(&self) -> bool {
        matches!(self, Self::Json | Self::JsonSchema | Self::Xml)
    }
}

/// Amount of human approval interleaved with agent steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalLevel {
    None,
    Low,
    Medium,
    High,
    #[serde(other)]
    Unrecognized,
}

/// Level of evidence the application must produce for oversight bodies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceLevel {
    None,
    Basic,
    AuditReady,
    RegulatorReady,
    #[serde(other)]
    Unrecognized,
}

/// A declared data-sensitivity class.
///
/// The vocabulary is open: classes outside the known set are kept verbatim
/// in [`DataClass::Other`] so they still surface as modifier tags.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DataClass {
    None,
    Pii,
    Phi,
    Financial,
    Other(String),
}

impl DataClass {
    /// Modifier tag for this class. `None` and blank names declare nothing
    /// and have no tag.
    ///
    /// A name that would uppercase into a capability tag (`rag`, `ent`, ...)
    /// is prefixed with `DATA_` so it cannot be read back as that capability.
    pub fn tag(&self) -> Option<String> {
        match self {
            DataClass::None => None,
            DataClass::Pii => Some("PII".into()),
            DataClass::Phi => Some("PHI".into()),
            DataClass::Financial => Some("FINANCIAL".into()),
            DataClass::Other(name) if name.trim().is_empty() => None,
            DataClass::Other(name) => {
                let tag = name.trim().to_uppercase();
                if CAPABILITY_TAGS.contains(&tag.as_str()) {
                    Some(format!("DATA_{tag}"))
                } else {
                    Some(tag)
                }
            }
        }
    }
}

impl From<String> for DataClass {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "none" => DataClass::None,
            "pii" => DataClass::Pii,
            "phi" => DataClass::Phi,
            "financial" => DataClass::Financial,
            _ => DataClass::Other(value.trim().to_string()),
        }
    }
}

impl From<DataClass> for String {
    fn from(value: DataClass) -> Self {
        match value {
            DataClass::None => "none".into(),
            DataClass::Pii => "pii".into(),
            DataClass::Phi => "phi".into(),
            DataClass::Financial => "financial".into(),
            DataClass::Other(name) => name,
        }
    }
}

/// Retrieval-augmented generation settings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RetrievalConfig {
    #[serde(deserialize_with = "null_as_default")]
    pub retrieval_enabled: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub citations_enabled: bool,
    /// Vector store backing retrieval (e.g. "pinecone")
    pub vector_db: Option<String>,
    /// Index refresh policy (e.g. "daily")
    pub freshness_policy: Option<String>,
}

impl RetrievalConfig {
    pub fn has_vector_store(&self) -> bool {
        is_declared(self.vector_db.as_deref())
    }

    pub fn has_freshness_policy(&self) -> bool {
        is_declared(self.freshness_policy.as_deref())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StructuredOutputConfig {
    pub structured_output: Option<OutputFormat>,
    #[serde(deserialize_with = "null_as_default")]
    pub schema_validation: bool,
}

impl StructuredOutputConfig {
    /// True when the format is unset or explicitly `none`.
    pub fn is_unstructured(&self) -> bool {
        matches!(self.structured_output, None | Some(OutputFormat::None))
    }

    pub fn is_structured(&self) -> bool {
        self.structured_output
            .map(|f| f.is_structured())
            .unwrap_or(false)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CodeAssistConfig {
    #[serde(deserialize_with = "null_as_default")]
    pub code_generation: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub code_execution: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub repo_access: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalyticsConfig {
    /// Natural-language questions answered against data sources
    #[serde(deserialize_with = "null_as_default")]
    pub analytics_queries: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub report_generation: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub dashboards: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MultimodalConfig {
    #[serde(deserialize_with = "null_as_default")]
    pub vision_input: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub image_generation: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub speech_input: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub speech_output: bool,
}

impl MultimodalConfig {
    /// Any vision or speech capability.
    pub fn any(&self) -> bool {
        self.vision_input || self.image_generation || self.speech_input || self.speech_output
    }
}

/// Foundation model configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ModelConfig {
    pub provider: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub fine_tuned: bool,
    /// Parameter-efficient adapters (LoRA and similar)
    #[serde(deserialize_with = "null_as_default")]
    pub adapters: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub custom_checkpoints: bool,
}

/// Agent capabilities and the guard rails around them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AgenticConfig {
    #[serde(deserialize_with = "null_as_default")]
    pub tool_use: bool,
    /// Planning strategy (e.g. "react")
    pub planner: Option<String>,
    /// Share of actions taken without a human (0–100)
    #[serde(deserialize_with = "null_as_default")]
    pub autonomy_threshold: f64,
    pub human_approval_steps: Option<ApprovalLevel>,
    #[serde(deserialize_with = "null_as_default")]
    pub quota_controls: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub policy_engine: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub rollback_killswitch: bool,
    /// Persistent memory across sessions
    #[serde(deserialize_with = "null_as_default")]
    pub memory: bool,
}

impl AgenticConfig {
    pub fn has_planner(&self) -> bool {
        is_declared(self.planner.as_deref())
    }

    /// Autonomy threshold with NaN read as zero.
    pub fn autonomy(&self) -> f64 {
        if self.autonomy_threshold.is_nan() {
            0.0
        } else {
            self.autonomy_threshold
        }
    }

    pub fn is_autonomous(&self) -> bool {
        self.autonomy() > 0.0
    }
}

/// Integration into enterprise systems of record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EnterpriseConfig {
    /// Systems of record the application reads or writes (e.g. "SAP")
    #[serde(deserialize_with = "null_as_default")]
    pub systems: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub sso: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub release_gates: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub audit_trails: bool,
}

impl EnterpriseConfig {
    pub fn has_systems(&self) -> bool {
        !self.systems.is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RegulatoryConfig {
    #[serde(deserialize_with = "null_as_default")]
    pub hitl_mandatory: bool,
    /// Regulatory regimes in scope (e.g. "HIPAA", "GDPR")
    #[serde(deserialize_with = "null_as_default")]
    pub regulator_scope: Vec<String>,
    pub evidence_required: Option<EvidenceLevel>,
}

impl RegulatoryConfig {
    pub fn has_regulator_scope(&self) -> bool {
        !self.regulator_scope.is_empty()
    }
}

fn is_declared(value: Option<&str>) -> bool {
    value.map(|v| !v.trim().is_empty()).unwrap_or(false)
}

/// Reads an explicit `null` as the field's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
