//! MCP transports.
//!
//! - stdio: newline-delimited JSON-RPC. Each request runs as its own task;
//!   a single writer task serializes responses onto stdout.
//! - HTTP: `POST /mcp` takes one JSON-RPC message per request and
//!   `GET /health` reports liveness and credential status.

use crate::clients::config::ApiConfig;
use crate::health::HealthReport;
use crate::server::McpServer;
use axum::{
    extract::State,
    http::{header::CONTENT_TYPE, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use std::io;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Serve MCP over the process's stdin and stdout.
pub async fn serve_stdio(server: Arc<McpServer>) -> io::Result<()> {
    info!("Serving MCP over stdio");
    serve_lines(server, tokio::io::stdin(), tokio::io::stdout()).await
}

/// Serve newline-delimited JSON-RPC from `reader`, writing responses to `writer`.
///
/// Returns once the reader is exhausted and every in-flight response has
/// been written.
pub async fn serve_lines<R, W>(server: Arc<McpServer>, reader: R, writer: W) -> io::Result<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin + Send + 'static,
{
    let (tx, mut rx) = mpsc::unbounded_channel::<String>();

    let writer_task = tokio::spawn(async move {
        let mut writer = writer;
        while let Some(message) = rx.recv().await {
            writer.write_all(message.as_bytes()).await?;
            writer.write_all(b"\n").await?;
            writer.flush().await?;
        }
        Ok::<(), io::Error>(())
    });

    let mut lines = BufReader::new(reader).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let server = server.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            if let Some(response) = server.handle_message(&line).await {
                if tx.send(response).is_err() {
                    debug!("Writer closed; dropping response");
                }
            }
        });
    }

    debug!("Input closed, draining pending responses");
    drop(tx);
    writer_task
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?
}

/// Shared state for the HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub server: Arc<McpServer>,
    pub api: Arc<ApiConfig>,
}

/// HTTP routes.
pub fn router(state: HttpState) -> Router {
    Router::new()
        .route("/mcp", post(handle_mcp))
        .route("/health", get(handle_health))
        .with_state(state)
}

/// Bind the HTTP listener. `host` may be an IP address or a host name.
pub async fn bind_listener(host: &str, port: u16) -> io::Result<TcpListener> {
    TcpListener::bind((host, port)).await
}

/// Serve MCP over HTTP until Ctrl-C.
pub async fn serve_http(state: HttpState, host: &str, port: u16) -> io::Result<()> {
    let listener = bind_listener(host, port).await?;
    info!("Serving MCP over HTTP on {}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}

async fn handle_mcp(State(state): State<HttpState>, body: String) -> Response {
    match state.server.handle_message(&body).await {
        Some(response) => ([(CONTENT_TYPE, "application/json")], response).into_response(),
        None => StatusCode::ACCEPTED.into_response(),
    }
}

async fn handle_health(State(state): State<HttpState>) -> Json<HealthReport> {
    Json(HealthReport::new(&state.api, state.server.tool_count().await))
}
