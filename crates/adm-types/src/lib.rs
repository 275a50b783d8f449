//! # adm-types
//!
//! Data model for the Archetype Determination Matrix (ADM).
//!
//! The ADM maps a structured description of a GenAI application onto one or
//! more of twelve behavioral archetypes, derives a composite risk tier, and
//! recommends a governance-control set. This crate holds the vocabulary that
//! the engine and its callers share:
//!
//! - **ApplicationProfile**: the input; every field optional, unknown enum
//!   values tolerated
//! - **ArchetypeCode / CATALOG**: the fixed twelve-entry archetype catalog
//! - **RiskTier**: the ordinal tiering rule, usable on its own
//! - **ClassificationResult**: the fully populated output, including the
//!   decision trace and RMF profile

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]

pub mod archetype;
pub mod profile;
pub mod result;
pub mod risk;

pub use archetype::{
    catalog, ArchetypeCode, ArchetypeDefinition, UnknownArchetype, CATALOG, UNCLASSIFIED,
};
pub use profile::{
    AgenticConfig, AnalyticsConfig, ApplicationProfile, ApprovalLevel, CodeAssistConfig, DataClass,
    EnterpriseConfig, EvidenceLevel, ImpactContext, InteractionPattern, Modality, ModelConfig,
    MultimodalConfig, OutputFormat, RegulatoryConfig, RetrievalConfig, StructuredOutputConfig,
};
pub use result::{
    ArchetypeScore, ClassificationResult, Dominance, Modifier, RmfProfile, SignalContribution,
    CAPABILITY_TAGS,
};
pub use risk::{RiskAssessment, RiskBand, RiskFactor, RiskTier};
