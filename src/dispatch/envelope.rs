//! The uniform result envelope returned for every dispatched notification.

use serde::{Deserialize, Serialize};

/// Placeholder reported when the caller supplied no `source_id`.
pub const SOURCE_ID_PLACEHOLDER: &str = "N/A";

/// Outcome of routing one notification.
///
/// Serializes with a `status` tag and the exact wire field names consumed
/// by existing callers (`source_id`, `response_status`, `response_body`,
/// `message`). Domain failures are values here, never HTTP-level errors:
/// the transport always answers 200 once the request body validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum RouteOutcome {
    Success {
        destination: String,
        /// Display name of the operation, not its id.
        operation: String,
        source: String,
        /// Caller-supplied id, or [`SOURCE_ID_PLACEHOLDER`] when absent.
        source_id: String,
        /// Remote HTTP status code, stringified. Non-2xx codes still land
        /// here: the bridge forwards the remote verdict, it does not judge it.
        response_status: String,
        /// Remote response body, verbatim.
        response_body: String,
    },
    Error {
        message: String,
    },
}

impl RouteOutcome {
    /// Build a domain-level error envelope.
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    /// Build a success envelope for a received remote response.
    pub fn success(
        destination: &str,
        operation_name: &str,
        source: &str,
        source_id: Option<&str>,
        response_status: u16,
        response_body: String,
    ) -> Self {
        Self::Success {
            destination: destination.to_string(),
            operation: operation_name.to_string(),
            source: source.to_string(),
            source_id: source_id.unwrap_or(SOURCE_ID_PLACEHOLDER).to_string(),
            response_status: response_status.to_string(),
            response_body,
        }
    }

    /// Tag value used for the `status` field, also used as a metrics label.
    pub fn status(&self) -> &'static str {
        match self {
            Self::Success { .. } => "success",
            Self::Error { .. } => "error",
        }
    }
}
