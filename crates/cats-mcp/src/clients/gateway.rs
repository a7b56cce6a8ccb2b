//! CATS API request gateway.
//!
//! Every tool talks to the CATS API through [`RequestGateway::execute`]. The
//! gateway owns authentication, URL construction, the retry/backoff policy and
//! the classification of failures into [`GatewayError`].

use super::config::ApiConfig;
use crate::retry::{run_with_backoff, AttemptOutcome, RetryConfig, Sleeper, TokioSleeper};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode};
use serde_json::{json, Map, Value};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error, instrument};

/// Per-attempt timeout covering connect, send and body read.
pub const ATTEMPT_TIMEOUT: Duration = Duration::from_secs(30);

/// Header carrying the remaining request quota.
const RATE_LIMIT_REMAINING: &str = "X-Rate-Limit-Remaining";

/// Gateway errors.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Credentials are missing; never retried.
    #[error("{0}")]
    Configuration(String),

    /// The API answered 429 on every attempt.
    #[error("Rate limit exceeded after max retries")]
    RateLimitExceeded,

    /// Non-2xx response that was not retried or ran out of retries.
    #[error("API HTTP error {status}: {body}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Response body text.
        body: String,
    },

    /// Every attempt hit the per-attempt timeout.
    #[error("Request timeout after {attempts} attempts: {message}")]
    Timeout {
        /// Attempts made.
        attempts: u32,
        /// Transport error detail.
        message: String,
    },

    /// Connection-level failure on every attempt.
    #[error("HTTP error after {attempts} attempts: {message}")]
    Network {
        /// Attempts made.
        attempts: u32,
        /// Transport error detail.
        message: String,
    },

    /// A 2xx body that is not valid JSON.
    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl GatewayError {
    /// HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            GatewayError::RateLimitExceeded => Some(429),
            GatewayError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// A single outbound API operation.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP method.
    pub method: Method,

    /// Endpoint path relative to the base URL (e.g., "/candidates/7").
    pub path: String,

    /// Query parameters; values are scalars.
    pub query: Map<String, Value>,

    /// JSON body.
    pub body: Option<Value>,
}

impl ApiRequest {
    /// Create a request with no query and no body.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Map::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Add one query parameter.
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Set the JSON body.
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Query parameters rendered as string pairs.
    ///
    /// `null` values are dropped; strings are sent unquoted.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.query
            .iter()
            .filter_map(|(key, value)| {
                let rendered = match value {
                    Value::Null => return None,
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                Some((key.clone(), rendered))
            })
            .collect()
    }
}

/// Authenticated, retrying client for the CATS API.
///
/// Holds no per-call state; concurrent calls are independent.
#[derive(Debug, Clone)]
pub struct RequestGateway {
    /// HTTP client instance (no idle connections are kept between attempts).
    client: Client,

    /// API endpoint and credentials.
    config: Arc<ApiConfig>,

    /// Retry policy.
    retry: RetryConfig,

    /// Waits between attempts.
    sleeper: Arc<dyn Sleeper>,

    /// Per-attempt timeout.
    attempt_timeout: Duration,
}

impl RequestGateway {
    /// Create a gateway for the given configuration.
    pub fn new(config: Arc<ApiConfig>) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|e| GatewayError::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            config,
            retry: RetryConfig::gateway(),
            sleeper: Arc::new(TokioSleeper),
            attempt_timeout: ATTEMPT_TIMEOUT,
        })
    }

    /// Replace the sleeper used between attempts.
    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    pub(crate) fn with_attempt_timeout(mut self, timeout: Duration) -> Self {
        self.attempt_timeout = timeout;
        self
    }

    /// The API configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Perform one logical API operation.
    ///
    /// Returns the parsed JSON body, or `{"status": "success", "status_code": N}`
    /// for 204 and empty responses.
    #[instrument(skip(self, request), fields(method = %request.method, path = %request.path))]
    pub async fn execute(&self, request: ApiRequest) -> Result<Value, GatewayError> {
        let Some(api_key) = self.config.api_key() else {
            error!("CATS_API_KEY not configured");
            return Err(GatewayError::Configuration(
                "CATS_API_KEY not configured".to_string(),
            ));
        };

        let url = self.config.url(&request.path);
        debug!("Making {} request to {}", request.method, request.path);

        let result = run_with_backoff(&self.retry, self.sleeper.as_ref(), |_| {
            self.attempt(&url, api_key, &request)
        })
        .await;

        if let Err(ref e) = result {
            error!("Request to {} failed: {}", request.path, e);
        }
        result
    }

    async fn attempt(
        &self,
        url: &str,
        api_key: &str,
        request: &ApiRequest,
    ) -> AttemptOutcome<Value, GatewayError> {
        let mut builder = self
            .client
            .request(request.method.clone(), url)
            .timeout(self.attempt_timeout)
            .header(AUTHORIZATION, format!("Token {}", api_key))
            .header(CONTENT_TYPE, "application/json");

        if !request.query.is_empty() {
            builder = builder.query(&request.query_pairs());
        }
        if let Some(ref body) = request.body {
            builder = builder.json(body);
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => return AttemptOutcome::Retry(self.transport_error(e)),
        };

        let status = response.status();

        if let Some(remaining) = response
            .headers()
            .get(RATE_LIMIT_REMAINING)
            .and_then(|v| v.to_str().ok())
        {
            debug!("Rate limit remaining: {}", remaining);
        }

        if status == StatusCode::TOO_MANY_REQUESTS {
            return AttemptOutcome::Retry(GatewayError::RateLimitExceeded);
        }

        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => return AttemptOutcome::Retry(self.transport_error(e)),
        };

        if !status.is_success() {
            let error = GatewayError::Http {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&bytes).into_owned(),
            };
            return if status.is_server_error() {
                AttemptOutcome::Retry(error)
            } else {
                AttemptOutcome::Fail(error)
            };
        }

        if status == StatusCode::NO_CONTENT || bytes.is_empty() {
            return AttemptOutcome::Success(success_marker(status));
        }

        match serde_json::from_slice(&bytes) {
            Ok(value) => AttemptOutcome::Success(value),
            Err(e) => AttemptOutcome::Fail(GatewayError::InvalidResponse(e.to_string())),
        }
    }

    fn transport_error(&self, e: reqwest::Error) -> GatewayError {
        let attempts = self.retry.max_attempts;
        if e.is_timeout() {
            GatewayError::Timeout {
                attempts,
                message: e.to_string(),
            }
        } else {
            GatewayError::Network {
                attempts,
                message: e.to_string(),
            }
        }
    }
}

/// Canonical value returned for bodiless successes.
pub fn success_marker(status: StatusCode) -> Value {
    json!({
        "status": "success",
        "status_code": status.as_u16()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Debug, Default)]
    struct NoSleep;

    #[async_trait::async_trait]
    impl Sleeper for NoSleep {
        async fn sleep(&self, _duration: Duration) {}
    }

    fn gateway(base_url: &str) -> RequestGateway {
        RequestGateway::new(Arc::new(ApiConfig::new(base_url, "test-key")))
            .unwrap()
            .with_sleeper(Arc::new(NoSleep))
    }

    #[test]
    fn test_query_pairs() {
        let request = ApiRequest::get("/candidates")
            .with_query("per_page", 25)
            .with_query("q", "smith")
            .with_query("active", true)
            .with_query("skip", Value::Null);

        let mut pairs = request.query_pairs();
        pairs.sort();
        assert_eq!(
            pairs,
            vec![
                ("active".to_string(), "true".to_string()),
                ("per_page".to_string(), "25".to_string()),
                ("q".to_string(), "smith".to_string()),
            ]
        );
    }

    #[test]
    fn test_error_messages() {
        let err = GatewayError::Http {
            status: 404,
            body: "Not Found".to_string(),
        };
        assert_eq!(err.to_string(), "API HTTP error 404: Not Found");
        assert_eq!(err.status(), Some(404));
        assert_eq!(
            GatewayError::RateLimitExceeded.to_string(),
            "Rate limit exceeded after max retries"
        );
    }

    #[tokio::test]
    async fn test_missing_key_fails_without_network() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let config = ApiConfig {
            base_url: server.uri(),
            api_key: None,
        };
        let gateway = RequestGateway::new(Arc::new(config)).unwrap();

        let err = gateway
            .execute(ApiRequest::get("/candidates"))
            .await
            .unwrap_err();

        assert!(matches!(err, GatewayError::Configuration(_)));
        assert!(err.to_string().contains("not configured"));
    }

    #[tokio::test]
    async fn test_timeout_on_every_attempt() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/slow"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"ok": true}))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let gateway = gateway(&server.uri()).with_attempt_timeout(Duration::from_millis(50));

        let err = gateway.execute(ApiRequest::get("/slow")).await.unwrap_err();

        assert!(matches!(err, GatewayError::Timeout { attempts: 4, .. }));
    }

    #[tokio::test]
    async fn test_invalid_json_is_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/broken"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .expect(1)
            .mount(&server)
            .await;

        let err = gateway(&server.uri())
            .execute(ApiRequest::get("/broken"))
            .await
            .unwrap_err();

        assert!(matches!(err, GatewayError::InvalidResponse(_)));
    }
}
