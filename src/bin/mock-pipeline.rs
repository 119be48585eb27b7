//! Standalone mock annotation pipeline for local runs.
//!
//! Answers the endpoint the default config points at, so a full
//! notify → forward → envelope loop can be exercised without a real
//! pipeline deployment.

use axum::{routing::get, routing::post, Router};
use std::net::SocketAddr;

#[tokio::main]
async fn main() {
    let app = Router::new()
        .route("/api/v1/process", post(|| async { "VCF file annotated successfully!" }))
        .route("/health", get(|| async { "OK" }));

    let addr = SocketAddr::from(([127, 0, 0, 1], 8082));
    println!("Mock pipeline is listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
