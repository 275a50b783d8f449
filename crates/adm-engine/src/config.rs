//! Classifier configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default probability an archetype needs to survive filtering.
pub const DEFAULT_SURVIVAL_THRESHOLD: f64 = 0.15;

/// Default lead the top survivor needs over the runner-up to be dominant.
pub const DEFAULT_DOMINANCE_GAP: f64 = 0.10;

/// Default number of survivors reported in a result.
pub const DEFAULT_MAX_ARCHETYPES: usize = 3;

/// Default enterprise-integrated raw score that earns the `ENT` modifier.
pub const DEFAULT_ENTERPRISE_MODIFIER_SCORE: u32 = 6;

/// Tunable classifier parameters.
///
/// Missing keys fall back to the defaults, so a partial TOML table is valid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Minimum probability for an archetype to survive (0.0–1.0, exclusive of 0)
    pub survival_threshold: f64,
    /// Minimum top-1 minus top-2 probability for a dominant label (0.0–1.0)
    pub dominance_gap: f64,
    /// Maximum number of survivors returned as `archetypes`
    pub max_archetypes: usize,
    /// Enterprise-integrated raw score required for the `ENT` modifier
    pub enterprise_modifier_score: u32,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            survival_threshold: DEFAULT_SURVIVAL_THRESHOLD,
            dominance_gap: DEFAULT_DOMINANCE_GAP,
            max_archetypes: DEFAULT_MAX_ARCHETYPES,
            enterprise_modifier_score: DEFAULT_ENTERPRISE_MODIFIER_SCORE,
        }
    }
}

impl ClassifierConfig {
    pub fn with_survival_threshold(mut self, threshold: f64) -> Self {
        self.survival_threshold = threshold;
        self
    }

    pub fn with_dominance_gap(mut self, gap: f64) -> Self {
        self.dominance_gap = gap;
        self
    }

    pub fn with_max_archetypes(mut self, max: usize) -> Self {
        self.max_archetypes = max;
        self
    }

    /// Parse and validate a TOML table of classifier parameters.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&contents)
    }

    /// Check that every parameter is usable.
    ///
    /// A zero survival threshold is rejected: it would let zero-probability
    /// archetypes survive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.survival_threshold > 0.0 && self.survival_threshold <= 1.0) {
            return Err(ConfigError::OutOfRange {
                name: "survival_threshold",
                value: self.survival_threshold,
                min: 0.0,
                max: 1.0,
            });
        }
        if !(0.0..=1.0).contains(&self.dominance_gap) {
            return Err(ConfigError::OutOfRange {
                name: "dominance_gap",
                value: self.dominance_gap,
                min: 0.0,
                max: 1.0,
            });
        }
        if self.max_archetypes == 0 {
            return Err(ConfigError::NoArchetypes);
        }
        Ok(())
    }
}
