//! DataBridge notification router library.

pub mod config;
pub mod dispatch;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::BridgeConfig;
pub use dispatch::{Dispatcher, RouteOutcome};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::RoutingTable;
