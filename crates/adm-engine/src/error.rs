use thiserror::Error;

/// Errors from classifier configuration.
///
/// Classification itself never fails; only a configuration that cannot be
/// read or is out of range is rejected, when the
/// [`Classifier`](crate::Classifier) is built.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be between {min} and {max}, got {value}")]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("max_archetypes must be at least 1")]
    NoArchetypes,

    #[error("invalid configuration: {0}")]
    Parse(String),

    #[error("cannot read {path}: {message}")]
    Io { path: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ConfigError::OutOfRange {
            name: "survival_threshold",
            value: 1.5,
            min: 0.0,
            max: 1.0,
        };
        let message = err.to_string();
        assert!(message.contains("survival_threshold"));
        assert!(message.contains("1.5"));
    }
}
