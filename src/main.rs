//! DataBridge notification router.
//!
//! Accepts `POST /notify` requests naming a destination, operation and
//! data source, resolves them against a config-defined routing table, and
//! forwards a JSON POST to the matching pipeline endpoint.
//!
//! ```text
//!                    ┌──────────────────────────────────────────┐
//!                    │                DATA BRIDGE                │
//!   POST /notify     │  ┌──────┐   ┌──────────┐   ┌──────────┐  │
//!   ─────────────────┼─▶│ http │──▶│ dispatch │──▶│ routing  │  │
//!                    │  └──────┘   └────┬─────┘   │  table   │  │
//!                    │                  │         └──────────┘  │
//!   RouteOutcome     │                  ▼                       │
//!   ◀────────────────┼───────── outbound POST ──────────────────┼──▶ pipeline
//!                    └──────────────────────────────────────────┘     endpoint
//! ```
//!
//! Startup order is fixed: config (fail fast), then tracing, then the
//! routing table and dispatcher, and only then the listener, so requests
//! never observe a partially-built table.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use databridge::config::load_config;
use databridge::dispatch::Dispatcher;
use databridge::http::HttpServer;
use databridge::lifecycle::Shutdown;
use databridge::observability::{logging, metrics};
use databridge::routing::RoutingTable;

#[derive(Parser)]
#[command(name = "databridge")]
#[command(about = "Configuration-driven notification router", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, default_value = "databridge.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Config decides the default log level, so it loads before the
    // subscriber installs; a load failure falls back to "info".
    let config = match load_config(&cli.config) {
        Ok(config) => {
            logging::init_tracing(&config.observability.log_level);
            config
        }
        Err(e) => {
            logging::init_tracing("info");
            tracing::error!(error = %e, "Configuration load failed");
            return Err(e.into());
        }
    };

    tracing::info!(
        config = %cli.config.display(),
        bind_address = %config.server.bind_address,
        pipelines = config.pipelines.len(),
        "databridge v0.1.0 starting"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let table = Arc::new(RoutingTable::from_config(config.pipelines.clone()));
    let dispatcher = Arc::new(Dispatcher::new(table));

    let listener = TcpListener::bind(&config.server.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_rx = shutdown.subscribe();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            shutdown.trigger();
        }
    });

    let server = HttpServer::new(&config, dispatcher);
    server.run(listener, server_rx).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
