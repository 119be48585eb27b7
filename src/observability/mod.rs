//! Observability subsystem.
//!
//! # Responsibilities
//! - Initialize structured logging (tracing + EnvFilter)
//! - Expose Prometheus-compatible metrics endpoint
//! - Count notifications per destination and outcome

pub mod logging;
pub mod metrics;
