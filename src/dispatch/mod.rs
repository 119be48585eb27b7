//! Dispatch subsystem: the core of the bridge.
//!
//! # Data Flow
//! ```text
//! Validated NotifyRequest
//!     → dispatcher.rs (blank guard, table resolution)
//!     → outbound JSON POST to the resolved endpoint
//!     → envelope.rs (classify: success / error)
//!     → RouteOutcome back to the HTTP layer
//! ```
//!
//! # Design Decisions
//! - Domain failures are values (RouteOutcome::Error), never exceptions
//! - At most one outbound call per notification; no retries
//! - Remote status codes are forwarded, not judged (a 500 from the
//!   pipeline is still a delivered notification)
//! - DNS failures get a distinct "Unresolved address" message

pub mod dispatcher;
pub mod envelope;

pub use dispatcher::Dispatcher;
pub use envelope::{RouteOutcome, SOURCE_ID_PLACEHOLDER};
