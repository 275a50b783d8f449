//! # adm-engine
//!
//! Deterministic classification engine for the Archetype Determination Matrix.
//!
//! A classification runs as a fixed pipeline over one [`ApplicationProfile`]:
//!
//! 1. **Signals** ([`signals`]): weighted predicates accumulate a raw score
//!    per archetype
//! 2. **Normalization** ([`normalize`]): raw scores become a probability
//!    distribution and survivors are filtered by threshold
//! 3. **Conflict resolution** ([`conflict`]): dominance labelling and the
//!    pairwise override rules pick the primary archetype
//! 4. **Modifiers** ([`modifiers`]): cross-cutting capability tags
//! 5. **Risk** ([`risk`]): additive risk score and tier
//! 6. **RMF** ([`rmf`]): governance controls for the resolved archetypes
//!
//! The same profile and configuration always produce the same result. There
//! is no I/O and no shared mutable state.
//!
//! ```
//! use adm_engine::classify;
//! use adm_types::{ApplicationProfile, ArchetypeCode};
//!
//! let result = classify(&ApplicationProfile::default());
//! assert_eq!(result.primary_code(), ArchetypeCode::AssistiveTextGeneration);
//! ```
//!
//! [`ApplicationProfile`]: adm_types::ApplicationProfile

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]

pub mod classifier;
pub mod confidence;
pub mod config;
pub mod conflict;
pub mod error;
pub mod modifiers;
pub mod normalize;
pub mod risk;
pub mod rmf;
pub mod signals;

pub use classifier::{classify, Classifier};
pub use confidence::confidence;
pub use config::{
    ClassifierConfig, DEFAULT_DOMINANCE_GAP, DEFAULT_ENTERPRISE_MODIFIER_SCORE,
    DEFAULT_MAX_ARCHETYPES, DEFAULT_SURVIVAL_THRESHOLD,
};
pub use conflict::{dominance, resolve_primary, ConflictRule, Resolution, CONFLICT_RULES};
pub use error::ConfigError;
pub use modifiers::detect_modifiers;
pub use normalize::Distribution;
pub use risk::assess_risk;
pub use rmf::{contribution, generate_rmf, modifier_overlay, RmfContribution};
pub use signals::{score_profile, signal_table, ArchetypeSignals, RawScore, ScoreSheet, Signal};
