//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0)
//! - Check that the default method is a usable HTTP token
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: FetchConfig → Result<(), Vec<ValidationError>>

use thiserror::Error;

use crate::config::schema::FetchConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("timeouts.{field} must be greater than zero")]
    ZeroTimeout { field: &'static str },

    #[error("request.default_method '{0}' is not a valid HTTP method")]
    InvalidMethod(String),

    #[error("observability.log_level '{0}' is not one of trace, debug, info, warn, error")]
    InvalidLogLevel(String),
}

/// Validate a configuration, collecting every error found.
pub fn validate_config(config: &FetchConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.timeouts.request_ms == 0 {
        errors.push(ValidationError::ZeroTimeout { field: "request_ms" });
    }
    if config.timeouts.connect_ms == 0 {
        errors.push(ValidationError::ZeroTimeout { field: "connect_ms" });
    }

    let method = &config.request.default_method;
    if reqwest::Method::from_bytes(method.as_bytes()).is_err() {
        errors.push(ValidationError::InvalidMethod(method.clone()));
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::InvalidLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
