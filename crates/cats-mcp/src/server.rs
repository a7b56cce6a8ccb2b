//! MCP server implementation
//!
//! This module provides the MCP server that exposes the CATS tool catalogue
//! over JSON-RPC. Transports hand it decoded requests (or raw lines) and
//! write back whatever it returns.

use crate::clients::gateway::GatewayError;
use crate::toolset::Toolset;
use crate::types::*;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, info_span, warn, Instrument};
use uuid::Uuid;

/// Upper bound on the text returned by a single tool call.
pub const MAX_RESPONSE_BYTES: usize = 100_000;

/// MCP server error types.
#[derive(Debug, Error)]
pub enum McpServerError {
    /// Tool not found
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    /// Invalid parameters
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    /// The CATS API call failed
    #[error(transparent)]
    Upstream(#[from] GatewayError),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type for MCP server operations.
pub type McpServerResult<T> = Result<T, McpServerError>;

/// Trait for tool implementations.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Get the tool definition.
    fn definition(&self) -> ToolDefinition;

    /// Execute the tool with given arguments.
    async fn execute(
        &self,
        args: serde_json::Value,
        context: &ToolContext,
    ) -> McpServerResult<ToolResult>;
}

/// Context for tool execution.
#[derive(Debug, Clone)]
pub struct ToolContext {
    /// Identifier of this tool call, recorded on its tracing span
    pub call_id: Uuid,
}

impl ToolContext {
    /// Create a context for a new call.
    pub fn new() -> Self {
        Self {
            call_id: Uuid::now_v7(),
        }
    }
}

impl Default for ToolContext {
    fn default() -> Self {
        Self::new()
    }
}

/// CATS MCP server.
pub struct McpServer {
    /// Server info
    info: ServerInfo,

    /// Server capabilities
    capabilities: ServerCapabilities,

    /// Registered tools
    tools: Arc<RwLock<HashMap<String, Arc<dyn Tool>>>>,
}

impl McpServer {
    /// Create a new MCP server.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            info: ServerInfo {
                name: name.into(),
                version: version.into(),
            },
            capabilities: ServerCapabilities {
                tools: Some(ToolCapabilities {
                    list_changed: false,
                }),
            },
            tools: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create with the crate's name and version.
    pub fn cats() -> Self {
        Self::new("cats-mcp", env!("CARGO_PKG_VERSION"))
    }

    /// Register a tool, replacing any tool with the same name.
    pub async fn register_tool(&self, tool: Arc<dyn Tool>) {
        let name = tool.definition().name;
        let mut tools = self.tools.write().await;
        if tools.insert(name.clone(), tool).is_some() {
            warn!("Tool {} registered twice; keeping the latest", name);
        }
    }

    /// Register multiple tools.
    pub async fn register_tools(&self, tools: Vec<Arc<dyn Tool>>) {
        for tool in tools {
            self.register_tool(tool).await;
        }
    }

    /// Get all tool definitions, sorted by name.
    pub async fn list_tools(&self) -> Vec<ToolDefinition> {
        let tools = self.tools.read().await;
        let mut definitions: Vec<ToolDefinition> = tools.values().map(|t| t.definition()).collect();
        definitions.sort_by(|a, b| a.name.cmp(&b.name));
        definitions
    }

    /// Get tools by toolset.
    pub async fn list_tools_by_toolset(&self, toolset: Toolset) -> Vec<ToolDefinition> {
        self.list_tools()
            .await
            .into_iter()
            .filter(|d| d.toolset == Some(toolset))
            .collect()
    }

    /// Number of registered tools.
    pub async fn tool_count(&self) -> usize {
        self.tools.read().await.len()
    }

    /// Execute a tool.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
        context: &ToolContext,
    ) -> McpServerResult<ToolResult> {
        // Clone the handle so the lock is not held across the API call.
        let tool = {
            let tools = self.tools.read().await;
            tools
                .get(name)
                .cloned()
                .ok_or_else(|| McpServerError::ToolNotFound(name.to_string()))?
        };

        tool.execute(arguments, context).await
    }

    /// Handle one raw JSON-RPC message.
    ///
    /// Returns the serialized response, or `None` for notifications.
    pub async fn handle_message(&self, message: &str) -> Option<String> {
        let response = match serde_json::from_str::<McpRequest>(message) {
            Ok(request) => self.handle_request(request).await?,
            Err(e) => {
                debug!("Rejecting malformed message: {}", e);
                McpResponse::error(RequestId::Null, McpError::parse_error(e))
            }
        };

        match serde_json::to_string(&response) {
            Ok(json) => Some(json),
            Err(e) => {
                warn!("Failed to serialize response: {}", e);
                None
            }
        }
    }

    /// Handle an MCP request. Notifications produce no response.
    pub async fn handle_request(&self, request: McpRequest) -> Option<McpResponse> {
        if request.is_notification() {
            debug!("Received notification: {}", request.method);
            return None;
        }

        let response = match request.method.as_str() {
            "initialize" => self.handle_initialize(request.id),
            "ping" => McpResponse::success(request.id, serde_json::json!({})),
            "tools/list" => self.handle_tools_list(request.id).await,
            "tools/call" => self.handle_tools_call(request.id, request.params).await,
            _ => McpResponse::error(request.id, McpError::method_not_found(&request.method)),
        };
        Some(response)
    }

    fn handle_initialize(&self, id: RequestId) -> McpResponse {
        McpResponse::success(
            id,
            serde_json::json!({
                "protocolVersion": MCP_PROTOCOL_VERSION,
                "capabilities": self.capabilities,
                "serverInfo": self.info
            }),
        )
    }

    async fn handle_tools_list(&self, id: RequestId) -> McpResponse {
        let tools = self.list_tools().await;
        McpResponse::success(id, serde_json::json!({ "tools": tools }))
    }

    async fn handle_tools_call(
        &self,
        id: RequestId,
        params: Option<serde_json::Value>,
    ) -> McpResponse {
        let params = match params {
            Some(p) => p,
            None => return McpResponse::error(id, McpError::invalid_params("Missing params")),
        };

        let call: ToolCall = match serde_json::from_value(params) {
            Ok(c) => c,
            Err(e) => return McpResponse::error(id, McpError::invalid_params(e.to_string())),
        };

        let context = ToolContext::new();
        let span = info_span!("tools/call", tool = %call.name, call_id = %context.call_id);

        let outcome = self
            .call_tool(&call.name, call.arguments, &context)
            .instrument(span)
            .await;

        let result = match outcome {
            Ok(result) => result,
            Err(McpServerError::Upstream(e)) => {
                warn!(
                    tool = %call.name,
                    call_id = %context.call_id,
                    status = ?e.status(),
                    "Tool call failed: {}",
                    e
                );
                ToolResult::error(e.to_string())
            }
            Err(e @ McpServerError::ToolNotFound(_)) => {
                return McpResponse::error(
                    id,
                    McpError::new(McpError::METHOD_NOT_FOUND, e.to_string()),
                )
            }
            Err(e @ McpServerError::InvalidParams(_)) => {
                return McpResponse::error(id, McpError::invalid_params(e.to_string()))
            }
            Err(e) => return McpResponse::error(id, McpError::internal_error(e.to_string())),
        };

        let result = result.limit_size(MAX_RESPONSE_BYTES);
        match serde_json::to_value(result) {
            Ok(value) => McpResponse::success(id, value),
            Err(e) => McpResponse::error(id, McpError::internal_error(e.to_string())),
        }
    }

    /// Get server info.
    pub fn info(&self) -> &ServerInfo {
        &self.info
    }

    /// Get server capabilities.
    pub fn capabilities(&self) -> &ServerCapabilities {
        &self.capabilities
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct EchoTool;

    #[async_trait]
    impl Tool for EchoTool {
        fn definition(&self) -> ToolDefinition {
            ToolDefinition::new("echo", "Echo the arguments").with_toolset(Toolset::Context)
        }

        async fn execute(
            &self,
            args: serde_json::Value,
            _context: &ToolContext,
        ) -> McpServerResult<ToolResult> {
            match args.get("fail").and_then(|v| v.as_str()) {
                Some("upstream") => Err(GatewayError::RateLimitExceeded.into()),
                Some("params") => Err(McpServerError::InvalidParams("bad".to_string())),
                _ => Ok(ToolResult::json(args)),
            }
        }
    }

    struct HugeTool;

    #[async_trait]
    impl Tool for HugeTool {
        fn definition(&self) -> ToolDefinition {
            ToolDefinition::new("huge", "Returns a very large payload")
        }

        async fn execute(
            &self,
            _args: serde_json::Value,
            _context: &ToolContext,
        ) -> McpServerResult<ToolResult> {
            Ok(ToolResult::text("x".repeat(MAX_RESPONSE_BYTES * 2)))
        }
    }

    async fn server() -> McpServer {
        let server = McpServer::cats();
        server.register_tool(Arc::new(EchoTool)).await;
        server.register_tool(Arc::new(HugeTool)).await;
        server
    }

    fn call(name: &str, arguments: serde_json::Value) -> McpRequest {
        McpRequest::new(1i64, "tools/call").with_params(json!({"name": name, "arguments": arguments}))
    }

    #[tokio::test]
    async fn test_server_creation() {
        let server = McpServer::cats();
        assert_eq!(server.info().name, "cats-mcp");
        assert_eq!(server.tool_count().await, 0);
    }

    #[tokio::test]
    async fn test_register_and_list() {
        let server = server().await;

        let tools = server.list_tools().await;
        assert_eq!(tools.len(), 2);
        assert_eq!(tools[0].name, "echo");

        let context_tools = server.list_tools_by_toolset(Toolset::Context).await;
        assert_eq!(context_tools.len(), 1);
        assert!(server.list_tools_by_toolset(Toolset::Jobs).await.is_empty());
    }

    #[tokio::test]
    async fn test_initialize() {
        let server = server().await;

        let resp = server
            .handle_request(McpRequest::new("1", "initialize"))
            .await
            .unwrap();

        let result = resp.result.unwrap();
        assert_eq!(result["protocolVersion"], "2024-11-05");
        assert_eq!(result["serverInfo"]["name"], "cats-mcp");
        assert!(result["capabilities"]["tools"].is_object());
    }

    #[tokio::test]
    async fn test_notification_has_no_response() {
        let server = server().await;
        let reply = server
            .handle_message(r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#)
            .await;
        assert!(reply.is_none());
    }

    #[tokio::test]
    async fn test_parse_error() {
        let server = server().await;
        let reply = server.handle_message("{not json").await.unwrap();
        let value: serde_json::Value = serde_json::from_str(&reply).unwrap();

        assert_eq!(value["error"]["code"], McpError::PARSE_ERROR);
        assert_eq!(value["id"], serde_json::Value::Null);
    }

    #[tokio::test]
    async fn test_unknown_method() {
        let server = server().await;
        let resp = server
            .handle_request(McpRequest::new(2i64, "resources/list"))
            .await
            .unwrap();
        assert_eq!(resp.error.unwrap().code, McpError::METHOD_NOT_FOUND);
    }

    #[tokio::test]
    async fn test_tools_call_success() {
        let server = server().await;
        let resp = server
            .handle_request(call("echo", json!({"hello": "world"})))
            .await
            .unwrap();

        let result: ToolResult = serde_json::from_value(resp.result.unwrap()).unwrap();
        assert!(!result.is_error);
        assert!(result.text_content().contains("\"hello\": \"world\""));
    }

    #[tokio::test]
    async fn test_upstream_error_is_tool_error() {
        let server = server().await;
        let resp = server
            .handle_request(call("echo", json!({"fail": "upstream"})))
            .await
            .unwrap();

        assert!(resp.error.is_none());
        let result: ToolResult = serde_json::from_value(resp.result.unwrap()).unwrap();
        assert!(result.is_error);
        assert_eq!(result.text_content(), "Rate limit exceeded after max retries");
    }

    #[tokio::test]
    async fn test_invalid_params_and_unknown_tool() {
        let server = server().await;

        let resp = server
            .handle_request(call("echo", json!({"fail": "params"})))
            .await
            .unwrap();
        assert_eq!(resp.error.unwrap().code, McpError::INVALID_PARAMS);

        let resp = server.handle_request(call("nope", json!({}))).await.unwrap();
        let error = resp.error.unwrap();
        assert_eq!(error.code, McpError::METHOD_NOT_FOUND);
        assert!(error.message.contains("nope"));

        let resp = server
            .handle_request(McpRequest::new(3i64, "tools/call"))
            .await
            .unwrap();
        assert_eq!(resp.error.unwrap().code, McpError::INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_large_result_is_truncated() {
        let server = server().await;
        let resp = server.handle_request(call("huge", json!({}))).await.unwrap();

        let result: ToolResult = serde_json::from_value(resp.result.unwrap()).unwrap();
        let text = result.text_content();
        assert!(text.len() < MAX_RESPONSE_BYTES + 200);
        assert!(text.contains("Response truncated"));
    }
}
