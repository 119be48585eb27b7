//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (parse body, field-presence validation)
//!     → dispatch layer resolves and forwards
//!     → RouteOutcome serialized back to the caller
//! ```

pub mod request;
pub mod server;

pub use request::{NotifyRejection, NotifyRequest, RawNotify};
pub use server::HttpServer;
