//! Health report served at `GET /health` by the HTTP transport.
//!
//! The report is local: it states whether the server is running and whether
//! API credentials are configured, without calling the CATS API.

use crate::clients::config::ApiConfig;
use serde::{Deserialize, Serialize};

/// Service name reported by the health endpoint.
pub const SERVICE_NAME: &str = "CATS MCP Server";

/// Overall health status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// The server is accepting requests.
    Healthy,
}

/// Health report body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    /// Overall status.
    pub status: HealthStatus,

    /// Service name.
    pub service: String,

    /// Whether an API key is configured.
    pub api_configured: bool,

    /// Base URL tool calls are sent to.
    pub api_base_url: String,

    /// Number of registered tools.
    pub tools: usize,

    /// Server version.
    pub version: String,

    /// Timestamp of the check (ISO 8601).
    pub timestamp: String,
}

impl HealthReport {
    /// Build a report for the given configuration.
    pub fn new(config: &ApiConfig, tools: usize) -> Self {
        Self {
            status: HealthStatus::Healthy,
            service: SERVICE_NAME.to_string(),
            api_configured: config.has_auth(),
            api_base_url: config.base_url.clone(),
            tools,
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_without_key() {
        let report = HealthReport::new(&ApiConfig::default(), 77);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["service"], "CATS MCP Server");
        assert_eq!(json["api_configured"], false);
        assert_eq!(json["api_base_url"], "https://api.catsone.com/v3");
        assert_eq!(json["tools"], 77);
        assert!(json.get("api_key").is_none());
    }

    #[test]
    fn test_report_with_key() {
        let config = ApiConfig::new("http://localhost:9000", "secret");
        let report = HealthReport::new(&config, 0);

        assert!(report.api_configured);
        assert!(!serde_json::to_string(&report).unwrap().contains("secret"));
    }
}
