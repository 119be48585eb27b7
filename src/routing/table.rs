//! The immutable destination routing table.

use std::collections::HashMap;

use crate::config::schema::PipelineConfig;

/// One configured destination: where to forward, and which operations it
/// accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingEntry {
    /// Absolute URL notifications are forwarded to.
    pub endpoint: String,

    /// Optional secondary delivery path, carried through from config.
    pub delivery_path: Option<String>,

    /// Supported operations: operation id → display name.
    operations: HashMap<String, String>,
}

impl RoutingEntry {
    /// Resolve an operation id to its display name.
    pub fn operation(&self, operation: &str) -> Option<&str> {
        self.operations.get(operation).map(String::as_str)
    }
}

/// Immutable mapping from destination id to [`RoutingEntry`].
///
/// Built exactly once at startup from validated configuration and shared
/// read-only for the process lifetime. Lookups are pure and O(1).
#[derive(Debug, Clone, Default)]
pub struct RoutingTable {
    entries: HashMap<String, RoutingEntry>,
}

impl RoutingTable {
    /// Build the table from the configured pipelines.
    pub fn from_config(pipelines: HashMap<String, PipelineConfig>) -> Self {
        let entries = pipelines
            .into_iter()
            .map(|(destination, pipeline)| {
                (
                    destination,
                    RoutingEntry {
                        endpoint: pipeline.endpoint,
                        delivery_path: pipeline.delivery_path,
                        operations: pipeline.operations,
                    },
                )
            })
            .collect();
        Self { entries }
    }

    /// Look up a destination.
    pub fn lookup(&self, destination: &str) -> Option<&RoutingEntry> {
        self.entries.get(destination)
    }

    /// Number of configured destinations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no destinations.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
