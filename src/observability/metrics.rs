//! Metrics collection and exposition.
//!
//! # Metrics
//! - `databridge_notifications_total` (counter): notifications by
//!   destination and envelope status
//!
//! # Design Decisions
//! - Recording is a no-op until an exporter is installed, so the
//!   dispatcher records unconditionally and tests need no recorder

use std::net::SocketAddr;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on the given address.
pub fn init_metrics(addr: SocketAddr) {
    let builder = PrometheusBuilder::new().with_http_listener(addr);
    match builder.install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Count one routed notification.
pub fn record_notification(destination: &str, status: &'static str) {
    metrics::counter!(
        "databridge_notifications_total",
        "destination" => destination.to_string(),
        "status" => status
    )
    .increment(1);
}
