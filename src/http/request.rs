//! Inbound request parsing and field-presence validation.
//!
//! # Responsibilities
//! - Deserialize the `/notify` body into a raw, all-optional shape
//! - Reject missing required fields with field-specific 400 messages
//! - Hand a fully-present NotifyRequest to the dispatcher
//!
//! # Design Decisions
//! - Presence is checked here; blank values are the dispatcher's guard
//! - Rejection bodies are plain text, matching the existing contract
//! - `source_id` absent is valid and distinct from empty string

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

/// Raw `/notify` body before field-presence validation.
#[derive(Debug, Default, Deserialize)]
pub struct RawNotify {
    pub destination: Option<String>,
    pub operation: Option<String>,
    pub source: Option<String>,
    pub source_id: Option<String>,
}

/// A `/notify` body with every required field present.
#[derive(Debug, Clone)]
pub struct NotifyRequest {
    pub destination: String,
    pub operation: String,
    pub source: String,
    pub source_id: Option<String>,
}

/// Boundary validation failure, answered as a 400 with a plain-text body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyRejection {
    InvalidBody,
    MissingDestination,
    MissingOperation,
    MissingSource,
}

impl NotifyRejection {
    pub fn message(self) -> &'static str {
        match self {
            Self::InvalidBody => "Invalid request body",
            Self::MissingDestination => "destination is required",
            Self::MissingOperation => "operation is required",
            Self::MissingSource => "source is required",
        }
    }
}

impl IntoResponse for NotifyRejection {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, self.message()).into_response()
    }
}

impl RawNotify {
    /// Check field presence, in the order callers expect the messages.
    pub fn validate(self) -> Result<NotifyRequest, NotifyRejection> {
        let destination = self.destination.ok_or(NotifyRejection::MissingDestination)?;
        let operation = self.operation.ok_or(NotifyRejection::MissingOperation)?;
        let source = self.source.ok_or(NotifyRejection::MissingSource)?;

        Ok(NotifyRequest {
            destination,
            operation,
            source,
            source_id: self.source_id,
        })
    }
}
