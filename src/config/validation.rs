//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check that the log filter parses
//! - Check that help text is usable
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::schema::AppConfig;

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("observability.log_level {value:?} is not a valid filter: {reason}")]
    InvalidLogLevel { value: String, reason: String },

    #[error("{field} must not be empty")]
    Empty { field: &'static str },
}

/// Validate a deserialized configuration.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let level = config.observability.log_level.trim();
    if level.is_empty() {
        errors.push(ValidationError::Empty {
            field: "observability.log_level",
        });
    } else if let Err(e) = EnvFilter::try_new(level) {
        errors.push(ValidationError::InvalidLogLevel {
            value: level.to_string(),
            reason: e.to_string(),
        });
    }

    if config.help.header.trim().is_empty() {
        errors.push(ValidationError::Empty {
            field: "help.header",
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
