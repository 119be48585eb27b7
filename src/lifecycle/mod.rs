//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Validate → Build routing table → Start listener
//!
//! Shutdown (shutdown.rs):
//!     Ctrl+C → broadcast signal → server drains → Exit
//! ```
//!
//! # Design Decisions
//! - Ordered startup: config first, then dispatcher, then listener, so
//!   the first accepted request always sees a complete routing table
//! - Config failure aborts before the listener binds

pub mod shutdown;

pub use shutdown::Shutdown;
