//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::FetchConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<FetchConfig, ConfigError> {
    let config: FetchConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<FetchConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::TimeoutPolicy;

    #[test]
    fn test_parse_full_config() {
        let config = parse_config(
            r#"
            [timeouts]
            request_ms = 5000
            connect_ms = 1000
            on_timeout = "abort"

            [request]
            default_method = "POST"

            [observability]
            log_level = "debug"
            log_format = "json"
            metrics_enabled = false
            "#,
        )
        .unwrap();

        assert_eq!(config.timeouts.request_ms, 5000);
        assert_eq!(config.timeouts.on_timeout, TimeoutPolicy::Abort);
        assert_eq!(config.request.default_method, "POST");
        assert!(!config.observability.metrics_enabled);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.timeouts.request_ms, 30_000);
    }

    #[test]
    fn test_validation_error_message_lists_every_problem() {
        let err = parse_config(
            r#"
            [timeouts]
            request_ms = 0
            connect_ms = 0
            "#,
        )
        .unwrap_err();

        let message = err.to_string();
        assert!(message.starts_with("Validation failed: "));
        assert!(message.contains("timeouts.request_ms"));
        assert!(message.contains("timeouts.connect_ms"));
    }

    #[test]
    fn test_parse_error() {
        let err = parse_config("[timeouts\nrequest_ms = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = load_config(Path::new("/nonexistent/resilient-fetch.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
