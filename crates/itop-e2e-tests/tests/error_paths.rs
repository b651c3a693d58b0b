//! E2E tests for error paths: invalid input, backend errors, transport failures.

mod helpers;

use serde_json::json;
use wiremock::matchers::method;
use wiremock::{Mock, ResponseTemplate};

use helpers::{ITopHarness, objects};

/// Empty input is rejected before any HTTP call.
#[tokio::test]
async fn e2e_empty_query_sends_nothing() {
    let h = ITopHarness::start().await;

    let text = h.ask("   ").await;

    assert!(text.starts_with("❌ **Invalid Query**"));
    assert!(h.bodies().await.is_empty());
}

/// A class the instance lacks is reported with a suggestion.
#[tokio::test]
async fn e2e_unknown_class_message() {
    let h = ITopHarness::start().await;
    h.on_class(
        "Incident",
        json!({"code": 100, "message": "Error: Unknown class 'Incident'"}),
    )
    .await;

    let text = h.ask("show open incidents").await;

    assert!(text.starts_with("⚠️ **Incident Class Not Available**"), "{text}");
    assert!(text.contains("Unknown class 'Incident'"));
}

/// Other backend codes surface the backend's own message.
#[tokio::test]
async fn e2e_backend_error_message() {
    let h = ITopHarness::start().await;
    h.on_class(
        "Server",
        json!({"code": 100, "message": "Error: Invalid OQL query"}),
    )
    .await;

    let text = h.ask("Show all production servers").await;

    assert_eq!(text, "❌ **Server Query Error**: Error: Invalid OQL query");
}

/// HTTP failures are connection errors.
#[tokio::test]
async fn e2e_http_failure_is_connection_error() {
    let h = ITopHarness::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&h.server)
        .await;

    let text = h.ask("Show all production servers").await;

    assert!(text.starts_with("❌ **Connection Error**"), "{text}");
    assert!(text.contains("503"));
}

/// Nothing matched: the filters are echoed back.
#[tokio::test]
async fn e2e_empty_result_echoes_filters() {
    let h = ITopHarness::start().await;
    h.on_class("Server", objects("Server", &[])).await;

    let text = h.ask("Show all obsolete servers").await;

    assert!(text.contains("No Servers found matching your criteria."), "{text}");
    assert!(text.contains("Filters used: status: obsolete"));
}

/// Capability listing goes through the same client.
#[tokio::test]
async fn e2e_list_operations() {
    let h = ITopHarness::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 0,
            "message": "Operations: 2",
            "operations": [
                {"verb": "core/get", "description": "Search for objects"},
                {"verb": "core/create", "description": "Create an object"}
            ]
        })))
        .mount(&h.server)
        .await;

    let text = h.processor.list_operations().await;

    assert_eq!(
        text,
        "Available iTop REST API operations:\n\n• core/get: Search for objects\n• core/create: Create an object"
    );
}

/// A refused capability listing reads as a backend error, not a connection one.
#[tokio::test]
async fn e2e_list_operations_backend_error() {
    let h = ITopHarness::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 1,
            "message": "Error: Invalid login"
        })))
        .mount(&h.server)
        .await;

    let text = h.processor.list_operations().await;

    assert_eq!(text, "❌ **iTop Query Error**: Error: Invalid login");
}
