//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check every pipeline has a usable endpoint and at least one operation
//! - Validate endpoint URLs are absolute
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: BridgeConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use url::Url;

use crate::config::schema::BridgeConfig;

/// A single semantic problem found in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("pipeline '{pipeline}': endpoint must not be empty")]
    EmptyEndpoint { pipeline: String },

    #[error("pipeline '{pipeline}': endpoint '{endpoint}' is not an absolute URL ({reason})")]
    InvalidEndpoint {
        pipeline: String,
        endpoint: String,
        reason: String,
    },

    #[error("pipeline '{pipeline}': at least one operation is required")]
    NoOperations { pipeline: String },

    #[error("pipeline '{pipeline}': operation '{operation}' has a blank display name")]
    BlankOperationName { pipeline: String, operation: String },
}

/// Validate a parsed configuration, collecting every problem found.
pub fn validate_config(config: &BridgeConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for (name, pipeline) in &config.pipelines {
        if pipeline.endpoint.trim().is_empty() {
            errors.push(ValidationError::EmptyEndpoint {
                pipeline: name.clone(),
            });
        } else if let Err(e) = Url::parse(&pipeline.endpoint) {
            errors.push(ValidationError::InvalidEndpoint {
                pipeline: name.clone(),
                endpoint: pipeline.endpoint.clone(),
                reason: e.to_string(),
            });
        }

        if pipeline.operations.is_empty() {
            errors.push(ValidationError::NoOperations {
                pipeline: name.clone(),
            });
        }

        for (op, display) in &pipeline.operations {
            if display.trim().is_empty() {
                errors.push(ValidationError::BlankOperationName {
                    pipeline: name.clone(),
                    operation: op.clone(),
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
