//! Notification dispatch: resolve, forward, classify.

use std::error::Error as _;
use std::sync::Arc;

use serde::Serialize;

use crate::dispatch::envelope::RouteOutcome;
use crate::observability::metrics;
use crate::routing::RoutingTable;

/// Payload forwarded to the resolved endpoint. `source_id` serializes as
/// `null` when absent, matching the existing pipeline contract.
#[derive(Debug, Serialize)]
struct ForwardPayload<'a> {
    operation: &'a str,
    source: &'a str,
    source_id: Option<&'a str>,
}

/// Resolves notifications against the routing table and forwards them.
///
/// Holds the immutable table and a shared HTTP client; both are safe for
/// concurrent use by any number of in-flight `route` calls. Each call
/// performs at most one outbound request and mutates no local state.
pub struct Dispatcher {
    table: Arc<RoutingTable>,
    client: reqwest::Client,
}

impl Dispatcher {
    /// Create a dispatcher over an already-built routing table.
    pub fn new(table: Arc<RoutingTable>) -> Self {
        Self {
            table,
            client: reqwest::Client::new(),
        }
    }

    /// Route one notification and classify the outcome.
    ///
    /// Resolution failures and transport failures come back as `error`
    /// envelopes; any received remote response, whatever its status code,
    /// comes back as a `success` envelope carrying that status and body.
    pub async fn route(
        &self,
        destination: &str,
        operation: &str,
        source: &str,
        source_id: Option<&str>,
    ) -> RouteOutcome {
        tracing::info!(
            destination,
            operation,
            source,
            source_id = source_id.unwrap_or("N/A"),
            "Routing notification"
        );

        let outcome = self
            .resolve_and_forward(destination, operation, source, source_id)
            .await;
        metrics::record_notification(destination, outcome.status());
        outcome
    }

    async fn resolve_and_forward(
        &self,
        destination: &str,
        operation: &str,
        source: &str,
        source_id: Option<&str>,
    ) -> RouteOutcome {
        // The HTTP layer rejects missing fields; blank values are refused
        // here so nothing empty ever reaches the network.
        for (value, field) in [
            (destination, "destination"),
            (operation, "operation"),
            (source, "source"),
        ] {
            if value.trim().is_empty() {
                return RouteOutcome::error(format!("{field} is required"));
            }
        }

        let Some(entry) = self.table.lookup(destination) else {
            tracing::warn!(destination, "Destination not found");
            return RouteOutcome::error(format!("Destination not found: {destination}"));
        };

        let Some(operation_name) = entry.operation(operation) else {
            tracing::warn!(destination, operation, "Operation not supported");
            return RouteOutcome::error(format!(
                "Operation not supported: {operation} for {destination}"
            ));
        };

        let payload = ForwardPayload {
            operation,
            source,
            source_id,
        };

        let response = match self
            .client
            .post(&entry.endpoint)
            .json(&payload)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return self.classify_send_error(destination, &entry.endpoint, e),
        };

        let status = response.status().as_u16();
        match response.text().await {
            Ok(body) => {
                tracing::debug!(destination, status, "Pipeline responded");
                RouteOutcome::success(destination, operation_name, source, source_id, status, body)
            }
            Err(e) => self.classify_send_error(destination, &entry.endpoint, e),
        }
    }

    fn classify_send_error(
        &self,
        destination: &str,
        endpoint: &str,
        error: reqwest::Error,
    ) -> RouteOutcome {
        if is_unresolved_address(&error) {
            tracing::error!(destination, endpoint, "Unresolved address");
            return RouteOutcome::error(format!(
                "Failed to send request to {destination}: Unresolved address {endpoint}"
            ));
        }

        tracing::error!(destination, endpoint, error = %error, "Failed to reach pipeline");
        RouteOutcome::error(format!(
            "Failed to send request to {destination}: {error}"
        ))
    }
}

/// Whether a transport error is a DNS-resolution failure.
///
/// reqwest has no typed variant for this, so walk the source chain for the
/// connector's dns error (hyper-util) or the resolver's io error text.
fn is_unresolved_address(error: &reqwest::Error) -> bool {
    let mut source = error.source();
    while let Some(inner) = source {
        let text = inner.to_string();
        if text.contains("dns error") || text.contains("failed to lookup address") {
            return true;
        }
        source = inner.source();
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::PipelineConfig;
    use std::collections::HashMap;

    fn dispatcher_with(destination: &str, endpoint: &str, ops: &[(&str, &str)]) -> Dispatcher {
        let mut pipelines = HashMap::new();
        pipelines.insert(
            destination.to_string(),
            PipelineConfig {
                endpoint: endpoint.to_string(),
                delivery_path: None,
                operations: ops
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            },
        );
        Dispatcher::new(Arc::new(RoutingTable::from_config(pipelines)))
    }

    #[tokio::test]
    async fn test_blank_fields_refused_before_resolution() {
        let dispatcher = dispatcher_with(
            "rxgen",
            "http://127.0.0.1:1/unreachable",
            &[("annotate", "Annotate VCF")],
        );

        assert_eq!(
            dispatcher.route("  ", "annotate", "sample123", None).await,
            RouteOutcome::error("destination is required")
        );
        assert_eq!(
            dispatcher.route("rxgen", "", "sample123", None).await,
            RouteOutcome::error("operation is required")
        );
        assert_eq!(
            dispatcher.route("rxgen", "annotate", "", None).await,
            RouteOutcome::error("source is required")
        );
    }

    #[tokio::test]
    async fn test_unknown_destination_names_it() {
        let dispatcher = dispatcher_with(
            "rxgen",
            "http://127.0.0.1:1/unreachable",
            &[("annotate", "Annotate VCF")],
        );

        assert_eq!(
            dispatcher.route("imaging", "scan", "sample123", None).await,
            RouteOutcome::error("Destination not found: imaging")
        );
    }

    #[tokio::test]
    async fn test_unsupported_operation_names_both() {
        let dispatcher = dispatcher_with(
            "rxgen",
            "http://127.0.0.1:1/unreachable",
            &[("annotate", "Annotate VCF")],
        );

        assert_eq!(
            dispatcher.route("rxgen", "deliver", "sample123", None).await,
            RouteOutcome::error("Operation not supported: deliver for rxgen")
        );
    }

    #[test]
    fn test_forward_payload_serializes_absent_source_id_as_null() {
        let payload = ForwardPayload {
            operation: "annotate",
            source: "sample123",
            source_id: None,
        };
        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"{"operation":"annotate","source":"sample123","source_id":null}"#
        );
    }
}
