//! CLI configuration

use crate::error::{CliError, CliResult};
use crate::output::OutputFormat;
use adm_engine::ClassifierConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// CLI configuration
///
/// ```toml
/// default_output = "json"
///
/// [classifier]
/// survival_threshold = 0.2
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CliConfig {
    /// Output format used when `--output` is not given
    pub default_output: Option<OutputFormat>,

    /// Classifier parameters
    pub classifier: ClassifierConfig,

    /// File the configuration was read from, if any
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl CliConfig {
    /// Load configuration from file, falling back to defaults when it is absent
    pub fn load(path: Option<&str>) -> CliResult<Self> {
        let config_path = match path {
            Some(p) => PathBuf::from(p),
            None => Self::default_config_path()?,
        };

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "No config file, using defaults");
            return Ok(CliConfig::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;
        let mut config: CliConfig = toml::from_str(&contents)?;
        config.classifier.validate()?;
        config.source = Some(config_path);
        Ok(config)
    }

    /// Get the default configuration file path
    fn default_config_path() -> CliResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CliError::Config("Cannot find config directory".into()))?;
        Ok(config_dir.join("adm").join("config.toml"))
    }
}
