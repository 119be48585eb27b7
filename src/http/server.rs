//! HTTP server setup and the `/notify` handler.
//!
//! # Responsibilities
//! - Create Axum Router with the notify and health handlers
//! - Wire up middleware (tracing, request timeout)
//! - Bind server to listener, drain on shutdown signal
//! - Hand validated requests to the dispatcher

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::BridgeConfig;
use crate::dispatch::Dispatcher;
use crate::http::request::{NotifyRejection, RawNotify};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<Dispatcher>,
}

/// HTTP server for the data bridge.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server over an already-built dispatcher.
    pub fn new(config: &BridgeConfig, dispatcher: Arc<Dispatcher>) -> Self {
        let state = AppState { dispatcher };
        let router = Self::build_router(config, state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &BridgeConfig, state: AppState) -> Router {
        Router::new()
            .route("/notify", post(notify_handler))
            .route("/health", get(health_handler))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.server.request_timeout_secs,
            )))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections until the shutdown signal.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// `POST /notify`: validate the body, dispatch, answer with the envelope.
///
/// Validation failures are the only 400s; every domain or transport
/// failure downstream comes back as a 200-wrapped error envelope.
async fn notify_handler(
    State(state): State<AppState>,
    body: Result<Json<RawNotify>, JsonRejection>,
) -> Response {
    let Ok(Json(raw)) = body else {
        return NotifyRejection::InvalidBody.into_response();
    };

    let request = match raw.validate() {
        Ok(request) => request,
        Err(rejection) => return rejection.into_response(),
    };

    let outcome = state
        .dispatcher
        .route(
            &request.destination,
            &request.operation,
            &request.source,
            request.source_id.as_deref(),
        )
        .await;

    Json(outcome).into_response()
}

/// `GET /health`: liveness probe.
async fn health_handler() -> &'static str {
    "OK"
}
