//! Poll behavior against a mock events endpoint.
//!
//! Exercises the whole failure taxonomy: connection problems, non-success
//! statuses, and bodies that do not decode as event lists.

use hookwatch_core::client::{EventsClient, PollError};
use serde_json::json;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn events_url(server: &MockServer) -> Url {
    Url::parse(&format!("{}/events", server.uri())).unwrap()
}

async fn mount_events(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn fetch_returns_records_in_server_order() {
    let server = MockServer::start().await;
    mount_events(
        &server,
        json!([
            {"event": "push", "payload": {"ref": "refs/heads/main"}},
            {"event": "pull_request", "payload": {"action": "opened", "number": 7}},
        ]),
    )
    .await;

    let client = EventsClient::new(events_url(&server));
    let events = client.fetch_events().await.unwrap();

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].event, "push");
    assert_eq!(events[0].payload, json!({"ref": "refs/heads/main"}));
    assert_eq!(events[1].event, "pull_request");
}

#[tokio::test]
async fn fetch_accepts_an_empty_list() {
    let server = MockServer::start().await;
    mount_events(&server, json!([])).await;

    let client = EventsClient::new(events_url(&server));
    let events = client.fetch_events().await.unwrap();
    assert!(events.is_empty());
}

#[tokio::test]
async fn extra_fields_in_records_are_tolerated() {
    let server = MockServer::start().await;
    mount_events(
        &server,
        json!([{"event": "ping", "payload": {"ok": true}, "delivery_id": "abc123"}]),
    )
    .await;

    let client = EventsClient::new(events_url(&server));
    let events = client.fetch_events().await.unwrap();
    assert_eq!(events[0].event, "ping");
}

#[tokio::test]
async fn server_error_status_is_a_protocol_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/events"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = EventsClient::new(events_url(&server));
    match client.fetch_events().await {
        Err(PollError::Protocol { status }) => assert_eq!(status.as_u16(), 500),
        other => panic!("expected protocol failure, got {other:?}"),
    }
}

#[tokio::test]
async fn non_json_body_is_a_decode_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/events"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let client = EventsClient::new(events_url(&server));
    match client.fetch_events().await {
        Err(PollError::Decode(_)) => {}
        other => panic!("expected decode failure, got {other:?}"),
    }
}

#[tokio::test]
async fn wrong_json_shape_is_a_decode_failure() {
    // an object where the array should be
    let server = MockServer::start().await;
    mount_events(&server, json!({"events": []})).await;

    let client = EventsClient::new(events_url(&server));
    assert!(matches!(
        client.fetch_events().await,
        Err(PollError::Decode(_))
    ));
}

#[tokio::test]
async fn record_missing_payload_is_a_decode_failure() {
    let server = MockServer::start().await;
    mount_events(&server, json!([{"event": "push"}])).await;

    let client = EventsClient::new(events_url(&server));
    assert!(matches!(
        client.fetch_events().await,
        Err(PollError::Decode(_))
    ));
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_failure() {
    // bind a port, then free it so the connection is refused
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = EventsClient::new(Url::parse(&format!("http://{addr}/events")).unwrap());
    match client.fetch_events().await {
        Err(PollError::Transport(_)) => {}
        other => panic!("expected transport failure, got {other:?}"),
    }
}
