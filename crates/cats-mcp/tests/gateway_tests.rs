//! Request gateway tests against a mock CATS API.
//!
//! Covers authentication, retry classification and the backoff schedule. The
//! gateway's sleeper is replaced with a recorder so the schedule is observed
//! without real delays.

use async_trait::async_trait;
use cats_mcp::clients::{ApiConfig, ApiRequest, GatewayError, RequestGateway};
use cats_mcp::retry::Sleeper;
use serde_json::json;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Sleeper that records requested delays and returns immediately.
#[derive(Debug, Default)]
struct RecordingSleeper {
    slept: Mutex<Vec<Duration>>,
}

impl RecordingSleeper {
    fn delays(&self) -> Vec<u64> {
        self.slept.lock().unwrap().iter().map(|d| d.as_secs()).collect()
    }
}

#[async_trait]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.slept.lock().unwrap().push(duration);
    }
}

/// Test fixture: a mock API plus a gateway pointed at it.
struct TestFixture {
    server: MockServer,
    sleeper: Arc<RecordingSleeper>,
    gateway: RequestGateway,
}

impl TestFixture {
    async fn new() -> Self {
        let server = MockServer::start().await;
        let sleeper = Arc::new(RecordingSleeper::default());
        let gateway = gateway_for(&server.uri(), sleeper.clone());

        Self {
            server,
            sleeper,
            gateway,
        }
    }
}

fn gateway_for(base_url: &str, sleeper: Arc<RecordingSleeper>) -> RequestGateway {
    RequestGateway::new(Arc::new(ApiConfig::new(base_url, "test-key")))
        .unwrap()
        .with_sleeper(sleeper)
}

#[tokio::test]
async fn test_success_sends_token_and_query() {
    let fx = TestFixture::new().await;

    Mock::given(method("GET"))
        .and(path("/candidates"))
        .and(header("Authorization", "Token test-key"))
        .and(header("Content-Type", "application/json"))
        .and(query_param("per_page", "25"))
        .and(query_param("page", "1"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-Rate-Limit-Remaining", "499")
                .set_body_json(json!({"_embedded": {"candidates": []}, "total": 0})),
        )
        .expect(1)
        .mount(&fx.server)
        .await;

    let result = fx
        .gateway
        .execute(
            ApiRequest::get("/candidates")
                .with_query("per_page", 25)
                .with_query("page", 1),
        )
        .await
        .unwrap();

    assert_eq!(result["total"], 0);
    assert!(fx.sleeper.delays().is_empty());
}

#[tokio::test]
async fn test_json_body_is_sent() {
    let fx = TestFixture::new().await;

    Mock::given(method("POST"))
        .and(path("/candidates"))
        .and(body_json(json!({"first_name": "Ada", "last_name": "Lovelace"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 42})))
        .expect(1)
        .mount(&fx.server)
        .await;

    let result = fx
        .gateway
        .execute(
            ApiRequest::post("/candidates")
                .with_body(json!({"first_name": "Ada", "last_name": "Lovelace"})),
        )
        .await
        .unwrap();

    assert_eq!(result, json!({"id": 42}));
}

#[tokio::test]
async fn test_rate_limit_then_success() {
    let fx = TestFixture::new().await;

    Mock::given(method("GET"))
        .and(path("/jobs"))
        .respond_with(ResponseTemplate::new(429))
        .up_to_n_times(2)
        .expect(2)
        .mount(&fx.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/jobs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"jobs": [{"id": 1}]})))
        .expect(1)
        .mount(&fx.server)
        .await;

    let result = fx.gateway.execute(ApiRequest::get("/jobs")).await.unwrap();

    assert_eq!(result["jobs"][0]["id"], 1);
    assert_eq!(fx.sleeper.delays(), vec![1, 2]);
}

#[tokio::test]
async fn test_rate_limit_exhausted() {
    let fx = TestFixture::new().await;

    Mock::given(method("GET"))
        .and(path("/jobs"))
        .respond_with(ResponseTemplate::new(429))
        .expect(4)
        .mount(&fx.server)
        .await;

    let err = fx.gateway.execute(ApiRequest::get("/jobs")).await.unwrap_err();

    assert!(matches!(err, GatewayError::RateLimitExceeded));
    assert_eq!(err.to_string(), "Rate limit exceeded after max retries");
    assert_eq!(fx.sleeper.delays(), vec![1, 2, 4]);
}

#[tokio::test]
async fn test_client_error_is_not_retried() {
    let fx = TestFixture::new().await;

    Mock::given(method("GET"))
        .and(path("/candidates/999"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .expect(1)
        .mount(&fx.server)
        .await;

    let err = fx
        .gateway
        .execute(ApiRequest::get("/candidates/999"))
        .await
        .unwrap_err();

    match err {
        GatewayError::Http { status, ref body } => {
            assert_eq!(status, 404);
            assert_eq!(body, "Not Found");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.to_string(), "API HTTP error 404: Not Found");
    assert!(fx.sleeper.delays().is_empty());
}

#[tokio::test]
async fn test_server_error_retried_then_success() {
    let fx = TestFixture::new().await;

    Mock::given(method("GET"))
        .and(path("/site"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .expect(1)
        .mount(&fx.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/site"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "Acme Recruiting"})))
        .expect(1)
        .mount(&fx.server)
        .await;

    let result = fx.gateway.execute(ApiRequest::get("/site")).await.unwrap();

    assert_eq!(result["name"], "Acme Recruiting");
    assert_eq!(fx.sleeper.delays(), vec![1]);
}

#[tokio::test]
async fn test_server_error_exhausted() {
    let fx = TestFixture::new().await;

    Mock::given(method("GET"))
        .and(path("/site"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(4)
        .mount(&fx.server)
        .await;

    let err = fx.gateway.execute(ApiRequest::get("/site")).await.unwrap_err();

    assert!(matches!(err, GatewayError::Http { status: 500, .. }));
    assert_eq!(fx.sleeper.delays(), vec![1, 2, 4]);
}

#[tokio::test]
async fn test_no_content_returns_success_marker() {
    let fx = TestFixture::new().await;

    Mock::given(method("DELETE"))
        .and(path("/candidates/7"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&fx.server)
        .await;

    let result = fx
        .gateway
        .execute(ApiRequest::delete("/candidates/7"))
        .await
        .unwrap();

    assert_eq!(result, json!({"status": "success", "status_code": 204}));
}

#[tokio::test]
async fn test_empty_body_returns_success_marker() {
    let fx = TestFixture::new().await;

    Mock::given(method("PUT"))
        .and(path("/portals/3/jobs/9"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&fx.server)
        .await;

    let result = fx
        .gateway
        .execute(ApiRequest::put("/portals/3/jobs/9"))
        .await
        .unwrap();

    assert_eq!(result, json!({"status": "success", "status_code": 200}));
}

#[tokio::test]
async fn test_connection_failure_exhausts_retries() {
    // Reserve a port, then release it so nothing is listening.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let sleeper = Arc::new(RecordingSleeper::default());
    let gateway = gateway_for(&format!("http://127.0.0.1:{}", port), sleeper.clone());

    let err = gateway.execute(ApiRequest::get("/site")).await.unwrap_err();

    assert!(matches!(err, GatewayError::Network { attempts: 4, .. }));
    assert!(err.to_string().starts_with("HTTP error after 4 attempts"));
    assert_eq!(sleeper.delays(), vec![1, 2, 4]);
}

#[tokio::test]
async fn test_base_url_trailing_slash() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/site"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = gateway_for(
        &format!("{}/v3/", server.uri()),
        Arc::new(RecordingSleeper::default()),
    );

    let result = gateway.execute(ApiRequest::get("/site")).await.unwrap();
    assert_eq!(result["ok"], true);
}

/// Sleeper that never wakes up.
#[derive(Debug)]
struct StalledSleeper;

#[async_trait]
impl Sleeper for StalledSleeper {
    async fn sleep(&self, _duration: Duration) {
        std::future::pending::<()>().await
    }
}

#[tokio::test]
async fn test_dropped_call_makes_no_further_attempts() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/site"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = RequestGateway::new(Arc::new(ApiConfig::new(server.uri(), "test-key")))
        .unwrap()
        .with_sleeper(Arc::new(StalledSleeper));

    let outcome =
        tokio::time::timeout(Duration::from_secs(2), gateway.execute(ApiRequest::get("/site"))).await;
    assert!(outcome.is_err());

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}
