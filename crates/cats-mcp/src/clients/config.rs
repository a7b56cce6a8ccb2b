//! CATS API configuration.
//!
//! Holds the base URL and API key used for every outbound call. Loaded once
//! at process start and shared immutably (behind an `Arc`) with the gateway.

use serde::{Deserialize, Serialize};

/// Default CATS API v3 base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.catsone.com/v3";

/// Credentials and endpoint for the CATS API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL for the API (e.g., "https://api.catsone.com/v3").
    pub base_url: String,

    /// API key sent as `Authorization: Token <key>`.
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
        }
    }
}

impl ApiConfig {
    /// Create a configuration for the given base URL and key.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: Some(api_key.into()),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CATS_API_BASE_URL`: API base URL (default: https://api.catsone.com/v3)
    /// - `CATS_API_KEY`: API key; unset or empty means "not configured"
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("CATS_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let api_key = std::env::var("CATS_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        Self { base_url, api_key }
    }

    /// Build a full URL by joining the base URL and an endpoint path.
    ///
    /// Exactly one slash separates the two, whatever either side carries.
    pub fn url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// The API key, if one is configured and non-empty.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|key| !key.is_empty())
    }

    /// Check if API key authentication is available.
    pub fn has_auth(&self) -> bool {
        self.api_key().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "https://api.catsone.com/v3");
        assert!(!config.has_auth());
    }

    #[test]
    fn test_url_join() {
        let config = ApiConfig::new("https://api.example.com/v3", "key");

        assert_eq!(config.url("/candidates"), "https://api.example.com/v3/candidates");
        assert_eq!(config.url("candidates/7"), "https://api.example.com/v3/candidates/7");
    }

    #[test]
    fn test_url_join_trailing_slash() {
        let config = ApiConfig::new("https://api.example.com/v3/", "key");

        assert_eq!(config.url("/jobs/search"), "https://api.example.com/v3/jobs/search");
    }

    #[test]
    fn test_empty_key_is_not_auth() {
        let config = ApiConfig::new("https://api.example.com", "");
        assert!(!config.has_auth());
        assert_eq!(config.api_key(), None);
    }

    #[test]
    fn test_api_key_not_serialized() {
        let config = ApiConfig::new("https://api.example.com", "secret");
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("secret"));
    }
}
