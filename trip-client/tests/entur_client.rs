//! HTTP tests for the Entur client against a local mock server.

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use trip_client::entur::{EnturClient, EnturConfig, EnturError, Transport, parse_trip};

fn client_for(server: &MockServer) -> EnturClient {
    let config = EnturConfig::new("acme-journeys")
        .with_endpoint(format!("{}/graphql", server.uri()))
        .with_timeout(5);
    EnturClient::new(config).unwrap()
}

#[tokio::test]
async fn posts_query_and_unwraps_data() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(header("et-client-name", "acme-journeys"))
        .and(body_json(json!({"query": "{ trip }"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"trip": {"tripPatterns": []}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let data = client_for(&server).send("{ trip }").await.unwrap();
    let trip = parse_trip(&data).unwrap();
    assert!(trip.is_empty());
}

#[tokio::test]
async fn server_error_is_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let err = client_for(&server).send("{ trip }").await.unwrap_err();
    assert!(
        matches!(err, EnturError::Api { status: 503, ref message } if message == "maintenance")
    );
}

#[tokio::test]
async fn graphql_errors_are_reported() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": null,
            "errors": [{"message": "Unknown stop place NSR:StopPlace:0"}]
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).send("{ trip }").await.unwrap_err();
    assert!(
        matches!(err, EnturError::GraphQl(ref messages) if messages == &["Unknown stop place NSR:StopPlace:0"])
    );
}

#[tokio::test]
async fn non_json_body_is_json_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).send("{ trip }").await.unwrap_err();
    match err {
        EnturError::Json { body, .. } => assert_eq!(body.as_deref(), Some("<html>oops</html>")),
        other => panic!("expected JSON error, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_server_is_http_error() {
    let server = MockServer::start().await;
    let client = client_for(&server);
    drop(server);

    let err = client.send("{ trip }").await.unwrap_err();
    assert!(matches!(err, EnturError::Http(_)));
}
