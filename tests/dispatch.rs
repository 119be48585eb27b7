//! Dispatcher behavior against live mock pipelines.

use std::collections::HashMap;
use std::sync::Arc;

use axum::http::StatusCode;
use databridge::config::PipelineConfig;
use databridge::dispatch::{Dispatcher, RouteOutcome};
use databridge::routing::RoutingTable;

mod common;

fn pipeline(endpoint: String, ops: &[(&str, &str)]) -> PipelineConfig {
    PipelineConfig {
        endpoint,
        delivery_path: None,
        operations: ops
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    }
}

fn dispatcher(pipelines: HashMap<String, PipelineConfig>) -> Dispatcher {
    Dispatcher::new(Arc::new(RoutingTable::from_config(pipelines)))
}

fn rxgen_dispatcher(endpoint: String) -> Dispatcher {
    let mut pipelines = HashMap::new();
    pipelines.insert(
        "rxgen".to_string(),
        pipeline(endpoint, &[("annotate", "Annotate VCF")]),
    );
    dispatcher(pipelines)
}

#[tokio::test]
async fn test_unknown_destination_makes_no_network_call() {
    let mock = common::start_mock_pipeline(StatusCode::OK, "unused").await;
    let dispatcher = rxgen_dispatcher(mock.endpoint());

    let outcome = dispatcher.route("imaging", "scan", "sample123", None).await;

    assert_eq!(
        outcome,
        RouteOutcome::error("Destination not found: imaging")
    );
    assert_eq!(mock.calls(), 0);
}

#[tokio::test]
async fn test_unsupported_operation_makes_no_network_call() {
    let mock = common::start_mock_pipeline(StatusCode::OK, "unused").await;
    let dispatcher = rxgen_dispatcher(mock.endpoint());

    let outcome = dispatcher.route("rxgen", "deliver", "sample123", None).await;

    assert_eq!(
        outcome,
        RouteOutcome::error("Operation not supported: deliver for rxgen")
    );
    assert_eq!(mock.calls(), 0);
}

#[tokio::test]
async fn test_successful_dispatch_envelope() {
    let mock =
        common::start_mock_pipeline(StatusCode::OK, "VCF file annotated successfully!").await;
    let dispatcher = rxgen_dispatcher(mock.endpoint());

    let outcome = dispatcher
        .route("rxgen", "annotate", "sample123", Some("s1"))
        .await;

    let value = serde_json::to_value(&outcome).unwrap();
    assert_eq!(value["status"], "success");
    assert_eq!(value["destination"], "rxgen");
    assert_eq!(value["operation"], "Annotate VCF");
    assert_eq!(value["source"], "sample123");
    assert_eq!(value["source_id"], "s1");
    assert_eq!(value["response_status"], "200");
    assert_eq!(value["response_body"], "VCF file annotated successfully!");
    assert_eq!(mock.calls(), 1);
}

#[tokio::test]
async fn test_identical_inputs_yield_identical_envelopes() {
    let mock =
        common::start_mock_pipeline(StatusCode::OK, "VCF file annotated successfully!").await;
    let dispatcher = rxgen_dispatcher(mock.endpoint());

    let first = dispatcher
        .route("rxgen", "annotate", "sample123", Some("s1"))
        .await;
    let second = dispatcher
        .route("rxgen", "annotate", "sample123", Some("s1"))
        .await;

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_vec(&first).unwrap(),
        serde_json::to_vec(&second).unwrap()
    );
    assert_eq!(mock.calls(), 2);
}

#[tokio::test]
async fn test_absent_source_id_surfaces_as_placeholder() {
    let mock = common::start_mock_pipeline(StatusCode::OK, "ok").await;
    let dispatcher = rxgen_dispatcher(mock.endpoint());

    let outcome = dispatcher.route("rxgen", "annotate", "sample123", None).await;

    let value = serde_json::to_value(&outcome).unwrap();
    assert_eq!(value["status"], "success");
    assert_eq!(value["source_id"], "N/A");
}

#[tokio::test]
async fn test_remote_server_error_is_still_a_success_envelope() {
    let mock =
        common::start_mock_pipeline(StatusCode::INTERNAL_SERVER_ERROR, "pipeline exploded").await;
    let dispatcher = rxgen_dispatcher(mock.endpoint());

    let outcome = dispatcher.route("rxgen", "annotate", "sample123", None).await;

    let value = serde_json::to_value(&outcome).unwrap();
    assert_eq!(value["status"], "success");
    assert_eq!(value["response_status"], "500");
    assert_eq!(value["response_body"], "pipeline exploded");
}

#[tokio::test]
async fn test_unresolvable_host_reports_unresolved_address() {
    let endpoint = "http://databridge-no-such-host.invalid/api/v1/process".to_string();
    let dispatcher = rxgen_dispatcher(endpoint.clone());

    let outcome = dispatcher.route("rxgen", "annotate", "sample123", None).await;

    match outcome {
        RouteOutcome::Error { message } => {
            assert!(
                message.contains("Unresolved address"),
                "message was: {message}"
            );
            assert!(message.contains(&endpoint), "message was: {message}");
            assert!(message.contains("rxgen"), "message was: {message}");
        }
        RouteOutcome::Success { .. } => panic!("expected error envelope"),
    }
}

#[tokio::test]
async fn test_connection_refused_reports_generic_transport_failure() {
    // Bind-then-drop guarantees a port that refuses connections.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let endpoint = format!("http://{}/api/v1/process", listener.local_addr().unwrap());
    drop(listener);

    let dispatcher = rxgen_dispatcher(endpoint);
    let outcome = dispatcher.route("rxgen", "annotate", "sample123", None).await;

    match outcome {
        RouteOutcome::Error { message } => {
            assert!(
                message.starts_with("Failed to send request to rxgen:"),
                "message was: {message}"
            );
            assert!(
                !message.contains("Unresolved address"),
                "message was: {message}"
            );
        }
        RouteOutcome::Success { .. } => panic!("expected error envelope"),
    }
}

#[tokio::test]
async fn test_concurrent_routes_resolve_independently() {
    let mut pipelines = HashMap::new();
    let mut mocks = Vec::new();
    for i in 0..8 {
        let mock = common::start_mock_pipeline(StatusCode::OK, "done").await;
        pipelines.insert(
            format!("dest{i}"),
            pipeline(mock.endpoint(), &[("annotate", "Annotate VCF")]),
        );
        mocks.push(mock);
    }

    let dispatcher = Arc::new(dispatcher(pipelines));

    let mut handles = Vec::new();
    for i in 0..8 {
        let dispatcher = dispatcher.clone();
        handles.push(tokio::spawn(async move {
            (
                i,
                dispatcher
                    .route(&format!("dest{i}"), "annotate", &format!("src{i}"), None)
                    .await,
            )
        }));
    }

    for handle in handles {
        let (i, outcome) = handle.await.unwrap();
        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value["status"], "success", "dest{i} failed: {value}");
        assert_eq!(value["destination"], format!("dest{i}"));
    }
    for mock in &mocks {
        assert_eq!(mock.calls(), 1);
    }
}
