//! Integration tests for the HTTP transport.
//!
//! Every test points a client at a `wiremock` server and checks what goes
//! over the wire and how responses come back.

use bigcommerce_api::clients::{HttpClient, HttpError, HttpMethod, SDK_VERSION};
use bigcommerce_api::rest::{Envelope, QueryParams, SortDirection};
use bigcommerce_api::{ApiRoot, AuthToken, BigCommerceConfig, StoreHash};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Builds a client whose API root is the mock server.
fn create_test_client(server: &MockServer) -> HttpClient {
    let config = BigCommerceConfig::builder()
        .store_hash(StoreHash::new("abc123").unwrap())
        .auth_token(AuthToken::new("test-token").unwrap())
        .api_root(ApiRoot::new(server.uri()).unwrap())
        .build()
        .unwrap();
    HttpClient::new(&config).unwrap()
}

#[tokio::test]
async fn test_default_headers_are_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stores/abc123/v3/catalog/products"))
        .and(header("X-Auth-Token", "test-token"))
        .and(header("Accept", "application/json"))
        .and(header("Content-Type", "application/json"))
        .and(header(
            "User-Agent",
            format!("bigcommerce-api-rust/{SDK_VERSION}").as_str(),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [], "meta": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let request = client
        .build_request(HttpMethod::Get, "catalog/products")
        .unwrap();
    let envelope: Envelope<Vec<serde_json::Value>> = client.decode_into(request).await.unwrap();

    assert!(envelope.is_empty());
    assert!(!envelope.has_next_page());
}

#[tokio::test]
async fn test_query_is_encoded_in_sorted_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stores/abc123/v3/catalog/categories"))
        .and(query_param("direction", "asc"))
        .and(query_param("sort", "name"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [], "meta": {}})))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let params = QueryParams {
        direction: Some(SortDirection::Asc),
        sort: "name".to_string(),
        ..QueryParams::paged(2, 50)
    };
    let request = client
        .build_request(HttpMethod::Get, "catalog/categories")
        .unwrap()
        .with_query(&params);
    assert_eq!(
        request.url().query(),
        Some("direction=asc&limit=50&page=2&sort=name")
    );

    let _: Envelope<Vec<serde_json::Value>> = client.decode_into(request).await.unwrap();
}

#[tokio::test]
async fn test_body_is_sent_as_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/stores/abc123/v3/catalog/brands"))
        .and(body_json(json!({"name": "Acme"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": {"id": 3, "name": "Acme"}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let request = client
        .build_request_with_body(HttpMethod::Post, "catalog/brands", &json!({"name": "Acme"}))
        .unwrap();
    let envelope: Envelope<serde_json::Value> = client.decode_into(request).await.unwrap();

    assert_eq!(envelope.data["id"], 3);
    assert_eq!(envelope.pagination().total, 0);
}

#[tokio::test]
async fn test_api_error_carries_request_and_details() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/stores/abc123/v3/catalog/products"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "status": 422,
            "title": "Validation Failed",
            "type": "https://developer.bigcommerce.com/api-docs/getting-started/api-status-codes",
            "errors": ["price is required"]
        })))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let request = client
        .build_request_with_body(HttpMethod::Post, "catalog/products", &json!({"name": "Kite"}))
        .unwrap();
    let result: Result<serde_json::Value, HttpError> = client.decode_into(request).await;

    let Err(HttpError::Api(error)) = result else {
        panic!("expected an API error");
    };
    assert_eq!(error.method, HttpMethod::Post);
    assert_eq!(
        error.url,
        format!("{}/stores/abc123/v3/catalog/products", server.uri())
    );
    assert_eq!(error.status, 422);
    assert_eq!(error.title, "Validation Failed");
    assert_eq!(error.errors, vec!["price is required".to_string()]);
}

#[tokio::test]
async fn test_keyed_error_details_are_flattened() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/stores/abc123/v3/catalog/categories/4"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "status": 409,
            "title": "Category name conflict",
            "errors": {"name": "already in use"}
        })))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let request = client
        .build_request_with_body(HttpMethod::Put, "catalog/categories/4", &json!({"name": "Toys"}))
        .unwrap();
    let error = client.execute(request).await.unwrap_err();

    assert_eq!(error.status(), Some(409));
    assert_eq!(
        error.api_error().unwrap().errors,
        vec!["name: already in use".to_string()]
    );
}

#[tokio::test]
async fn test_empty_error_body_keeps_status() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/stores/abc123/v3/catalog/brands/99"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let request = client
        .build_request(HttpMethod::Delete, "catalog/brands/99")
        .unwrap();
    let error = client.execute(request).await.unwrap_err();

    let api = error.api_error().unwrap();
    assert_eq!(api.status, 404);
    assert!(api.title.is_empty());
    assert!(api.errors.is_empty());
}

#[tokio::test]
async fn test_malformed_error_body_is_a_decoding_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stores/abc123/v3/catalog/brands"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let request = client.build_request(HttpMethod::Get, "catalog/brands").unwrap();
    let error = client.execute(request).await.unwrap_err();

    assert!(matches!(error, HttpError::Decoding { status: 502, .. }));
}

#[tokio::test]
async fn test_wrong_success_shape_is_a_decoding_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stores/abc123/v3/catalog/products/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": "not a number"})))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let request = client
        .build_request(HttpMethod::Get, "catalog/products/1")
        .unwrap();
    let result: Result<Envelope<u64>, HttpError> = client.decode_into(request).await;

    assert!(matches!(result, Err(HttpError::Decoding { status: 200, .. })));
}

#[tokio::test]
async fn test_copy_raw_bytes_writes_body_unchanged() {
    let server = MockServer::start().await;
    let body = r#"{"data":{"id":7},"meta":{}}"#;
    Mock::given(method("GET"))
        .and(path("/stores/abc123/v3/catalog/products/7"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let request = client
        .build_request(HttpMethod::Get, "catalog/products/7")
        .unwrap();
    let mut sink: Vec<u8> = Vec::new();
    let written = client.copy_raw_bytes(request, &mut sink).await.unwrap();

    assert_eq!(written, body.len() as u64);
    assert_eq!(sink, body.as_bytes());
}

#[tokio::test]
async fn test_copy_raw_bytes_reports_api_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stores/abc123/v3/catalog/products/8"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "status": 404,
            "title": "The requested resource was not found."
        })))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let request = client
        .build_request(HttpMethod::Get, "catalog/products/8")
        .unwrap();
    let mut sink: Vec<u8> = Vec::new();
    let error = client.copy_raw_bytes(request, &mut sink).await.unwrap_err();

    assert_eq!(error.status(), Some(404));
    assert!(sink.is_empty());
}

#[test]
fn test_user_agent_prefix_is_sent() {
    tokio_test::block_on(async {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/stores/abc123/v3/catalog/summary"))
            .and(header(
                "User-Agent",
                format!("Seeder/2.0 | bigcommerce-api-rust/{SDK_VERSION}").as_str(),
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
            .expect(1)
            .mount(&server)
            .await;

        let config = BigCommerceConfig::builder()
            .store_hash(StoreHash::new("abc123").unwrap())
            .auth_token(AuthToken::new("test-token").unwrap())
            .api_root(ApiRoot::new(server.uri()).unwrap())
            .user_agent_prefix("Seeder/2.0")
            .build()
            .unwrap();
        let client = HttpClient::new(&config).unwrap();
        let request = client
            .build_request(HttpMethod::Get, "catalog/summary")
            .unwrap();

        client.execute(request).await.unwrap();
    });
}

#[tokio::test]
async fn test_connection_refused_is_a_transport_error() {
    // Nothing listens on port 1.
    let config = BigCommerceConfig::builder()
        .store_hash(StoreHash::new("abc123").unwrap())
        .auth_token(AuthToken::new("test-token").unwrap())
        .api_root(ApiRoot::new("http://127.0.0.1:1").unwrap())
        .build()
        .unwrap();
    let client = HttpClient::new(&config).unwrap();
    let request = client
        .build_request(HttpMethod::Get, "catalog/products")
        .unwrap();

    let error = client.execute(request).await.unwrap_err();

    assert!(matches!(error, HttpError::Transport(_)));
    assert_eq!(error.status(), None);
    assert!(error.api_error().is_none());
}
