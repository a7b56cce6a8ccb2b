//! `cats-mcp-server` binary.

use anyhow::{Context, Result};
use cats_mcp::clients::{ApiConfig, RequestGateway};
use cats_mcp::config::{toolset_catalogue, CliArgs, ServerConfig, Transport};
use cats_mcp::transport::{self, HttpState};
use cats_mcp::{tools, McpServer};
use clap::Parser;
use std::sync::Arc;
use tracing::{debug, info, level_filters::LevelFilter, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();

    if args.list_toolsets {
        print!("{}", toolset_catalogue());
        return Ok(());
    }

    // stdout carries protocol frames on the stdio transport, so logs go to stderr.
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    let config = ServerConfig::resolve(&args, ApiConfig::from_env())?;
    if !config.api.has_auth() {
        warn!("CATS_API_KEY not set; tool calls will fail until it is configured");
    }

    let api = Arc::new(config.api.clone());
    let gateway = Arc::new(RequestGateway::new(api.clone())?);

    let server = Arc::new(McpServer::cats());
    server
        .register_tools(tools::tools_for(&config.toolsets, gateway))
        .await;

    for toolset in &config.toolsets {
        let loaded = server.list_tools_by_toolset(*toolset).await;
        debug!("Loaded {} tools from toolset {}", loaded.len(), toolset);
    }

    info!(
        toolsets = %config.toolset_names(),
        tools = server.tool_count().await,
        base_url = %api.base_url,
        "CATS MCP server ready"
    );

    match config.transport {
        Transport::Stdio => transport::serve_stdio(server).await?,
        Transport::Http => {
            transport::serve_http(HttpState { server, api }, &config.host, config.port)
                .await
                .with_context(|| format!("Failed to serve HTTP on {}:{}", config.host, config.port))?
        }
    }

    Ok(())
}
