//! # CATS MCP
//!
//! This crate provides an MCP (Model Context Protocol) server for the CATS
//! applicant tracking API (v3). AI assistants use it to read and manage
//! candidates, jobs, pipelines, companies, contacts and related records.
//!
//! ## Overview
//!
//! The cats-mcp crate handles:
//! - **Gateway**: authenticated CATS API requests with retry and backoff
//! - **Summaries**: compact list responses with pagination hints
//! - **Tools**: 170 tools grouped into 17 toolsets, selectable at startup
//! - **JSON-RPC**: MCP protocol implementation over stdio or HTTP
//!
//! ## MCP Protocol
//!
//! Supported methods:
//! - `initialize`: Initialize the MCP session
//! - `ping`: Liveness check
//! - `tools/list`: List available tools
//! - `tools/call`: Execute a tool
//!
//! ## Request Gateway
//!
//! Every call goes through [`RequestGateway::execute`]. A call makes at most
//! four attempts; rate limiting (429), server errors (5xx), timeouts and
//! connection failures are retried after 1s, 2s and 4s. Other 4xx responses
//! fail immediately.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cats_mcp::clients::{ApiConfig, RequestGateway};
//! use cats_mcp::toolset::parse_toolsets;
//! use cats_mcp::{tools, McpServer};
//! use std::sync::Arc;
//!
//! async fn setup() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = Arc::new(ApiConfig::from_env());
//!     let gateway = Arc::new(RequestGateway::new(api)?);
//!
//!     let server = McpServer::cats();
//!     let selected = parse_toolsets("candidates,companies")?;
//!     server.register_tools(tools::tools_for(&selected, gateway)).await;
//!
//!     let reply = server
//!         .handle_message(r#"{"jsonrpc":"2.0","id":1,"method":"tools/list"}"#)
//!         .await;
//!     println!("{}", reply.unwrap_or_default());
//!     Ok(())
//! }
//! ```

pub mod clients;
pub mod config;
pub mod health;
pub mod retry;
pub mod server;
pub mod summarize;
pub mod tools;
pub mod toolset;
pub mod transport;
pub mod types;

// Re-export main types
pub use clients::{ApiConfig, ApiRequest, GatewayError, RequestGateway};
pub use retry::{run_with_backoff, AttemptOutcome, RetryConfig, Sleeper, TokioSleeper};
pub use server::{McpServer, McpServerError, McpServerResult, Tool, ToolContext, MAX_RESPONSE_BYTES};
pub use summarize::summarize_list_response;
pub use toolset::{parse_toolsets, Toolset, ToolsetError};
pub use types::{
    ContentBlock, McpError, McpRequest, McpResponse, RequestId, ServerCapabilities, ServerInfo,
    ToolCall, ToolCapabilities, ToolDefinition, ToolResult,
};

// Re-export tool construction
pub use tools::{all_tools, tools_for, Endpoint, EndpointTool};

// Re-export health check types
pub use health::{HealthReport, HealthStatus};
