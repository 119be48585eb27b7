//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Inbound notification (destination, operation)
//!     → table.rs (destination lookup)
//!     → entry.operation() (display-name lookup)
//!     → Return: resolved endpoint + operation name, or explicit absence
//!
//! Table Construction (at startup):
//!     BridgeConfig.pipelines
//!     → RoutingTable::from_config
//!     → Freeze as immutable table behind Arc
//! ```
//!
//! # Design Decisions
//! - Table built at startup, immutable at runtime (thread-safe without locks)
//! - O(1) destination lookup via HashMap
//! - Explicit Option returns rather than silent defaults
//! - Deterministic: same input always resolves the same way

pub mod table;

pub use table::{RoutingEntry, RoutingTable};
