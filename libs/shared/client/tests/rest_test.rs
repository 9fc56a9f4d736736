// libs/shared/client/tests/rest_test.rs

use assert_matches::assert_matches;
use reqwest::Method;
use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shared_client::RestClient;
use shared_models::error::{ApiError, ErrorResponse};
use shared_utils::test_utils::TestConfig;

fn client_for(base_url: &str) -> RestClient {
    RestClient::new(&TestConfig::with_base_url(base_url).to_app_config())
}

#[tokio::test]
async fn test_trailing_slash_in_base_url_is_not_doubled() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/patients"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&format!("{}/", mock_server.uri()));
    let patients: Vec<Value> = client.request(Method::GET, "/patients", None).await.unwrap();

    assert!(patients.is_empty());
    assert_eq!(client.get_base_url(), mock_server.uri());
}

#[tokio::test]
async fn test_json_body_is_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/patients/7"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"age": 40})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "ok"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server.uri());
    let response: Value = client
        .request(Method::PUT, "/patients/7", Some(json!({"age": 40})))
        .await
        .unwrap();

    assert_eq!(response["message"], "ok");
}

#[tokio::test]
async fn test_empty_success_body_reads_as_null() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/delete_patient/7"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server.uri());
    let response: Value = client.request(Method::DELETE, "/delete_patient/7", None).await.unwrap();

    assert_eq!(response, Value::Null);
}

#[tokio::test]
async fn test_error_detail_is_typed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/patients"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Not here"})))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server.uri());
    let result: Result<Value, ApiError> = client.request(Method::GET, "/patients", None).await;

    assert_matches!(
        result,
        Err(ApiError::Remote { status: 404, body: ErrorResponse::Detail(detail) }) if detail == "Not here"
    );
}

#[tokio::test]
async fn test_unexpected_success_body_is_a_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/patients"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server.uri());
    let result: Result<Vec<Value>, ApiError> = client.request(Method::GET, "/patients", None).await;

    assert_matches!(result, Err(ApiError::Decode(_)));
}
