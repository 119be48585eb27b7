//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use axum::{http::StatusCode, routing::post, Router};
use tokio::net::TcpListener;

/// A mock pipeline endpoint on an ephemeral port, counting every call.
pub struct MockPipeline {
    pub addr: SocketAddr,
    calls: Arc<AtomicU32>,
}

impl MockPipeline {
    /// Endpoint URL for routing-table configuration.
    pub fn endpoint(&self) -> String {
        format!("http://{}/api/v1/process", self.addr)
    }

    /// How many requests the pipeline has received.
    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

/// Start a mock pipeline that answers every POST with a fixed response.
pub async fn start_mock_pipeline(status: StatusCode, body: &'static str) -> MockPipeline {
    let calls = Arc::new(AtomicU32::new(0));
    let counter = calls.clone();

    let app = Router::new().route(
        "/api/v1/process",
        post(move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                (status, body)
            }
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockPipeline { addr, calls }
}
