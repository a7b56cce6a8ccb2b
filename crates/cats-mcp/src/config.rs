//! Process configuration.
//!
//! Command-line flags take precedence over environment variables, which take
//! precedence over the built-in defaults:
//! - `--toolsets` / `CATS_TOOLSETS`: comma-separated toolsets, or `all`
//! - `--transport` / `CATS_TRANSPORT`: `stdio` (default) or `http`
//! - `--host` / `CATS_HOST`: HTTP bind address (default: 0.0.0.0)
//! - `--port` / `CATS_PORT`: HTTP port (default: 8000)

use crate::clients::config::ApiConfig;
use crate::tools;
use crate::toolset::{parse_toolsets, Toolset, ToolsetError, ToolsetGroup};
use clap::{Parser, ValueEnum};
use std::collections::BTreeSet;
use std::fmt::Write;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Toolset selection names unknown toolsets.
    #[error(transparent)]
    Toolsets(#[from] ToolsetError),
}

/// How MCP messages reach the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Transport {
    /// Newline-delimited JSON-RPC over stdin/stdout.
    Stdio,
    /// JSON-RPC over HTTP POST.
    Http,
}

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "cats-mcp-server", version, about = "CATS API v3 MCP Server")]
pub struct CliArgs {
    /// Comma-separated list of toolsets to load (default: core set).
    #[arg(long, env = "CATS_TOOLSETS")]
    pub toolsets: Option<String>,

    /// List available toolsets and exit.
    #[arg(long)]
    pub list_toolsets: bool,

    /// Transport to serve.
    #[arg(long, env = "CATS_TRANSPORT", value_enum, default_value_t = Transport::Stdio)]
    pub transport: Transport,

    /// Address the HTTP transport binds to.
    #[arg(long, env = "CATS_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port the HTTP transport listens on.
    #[arg(long, env = "CATS_PORT", default_value_t = 8000)]
    pub port: u16,
}

/// Resolved server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub toolsets: BTreeSet<Toolset>,
    pub transport: Transport,
    pub host: String,
    pub port: u16,
    pub api: ApiConfig,
}

impl ServerConfig {
    /// Resolve the configuration from parsed arguments and API settings.
    pub fn resolve(args: &CliArgs, api: ApiConfig) -> Result<Self, ConfigError> {
        let toolsets = parse_toolsets(args.toolsets.as_deref().unwrap_or_default())?;

        Ok(Self {
            toolsets,
            transport: args.transport,
            host: args.host.clone(),
            port: args.port,
            api,
        })
    }

    /// Selected toolset names, comma-separated, in catalogue order.
    pub fn toolset_names(&self) -> String {
        self.toolsets
            .iter()
            .map(|t| t.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Human-readable toolset catalogue printed by `--list-toolsets`.
pub fn toolset_catalogue() -> String {
    let sections = [
        (ToolsetGroup::Default, "DEFAULT toolsets (loaded by default)"),
        (ToolsetGroup::Recruiting, "RECRUITING toolsets"),
        (ToolsetGroup::Data, "DATA & CONFIG toolsets"),
    ];

    let mut out = String::from("CATS API v3 MCP Server - Available Toolsets\n");
    let mut grand_total = 0;

    for (group, title) in sections {
        let members: Vec<(Toolset, usize)> = Toolset::ALL
            .into_iter()
            .filter(|t| t.group() == group)
            .map(|t| (t, tools::endpoints(t).len()))
            .collect();
        let total: usize = members.iter().map(|(_, count)| count).sum();
        grand_total += total;

        let _ = writeln!(out, "\n{} ({} tools):", title, total);
        for (toolset, count) in members {
            let noun = if count == 1 { "tool" } else { "tools" };
            let _ = writeln!(
                out,
                "  - {} ({} {}) - {}",
                toolset,
                count,
                noun,
                toolset.description()
            );
        }
    }

    let _ = writeln!(out, "\nUsage:");
    let _ = writeln!(out, "  cats-mcp-server                              # Default toolsets");
    let _ = writeln!(out, "  cats-mcp-server --toolsets candidates,jobs   # Specific toolsets");
    let _ = writeln!(out, "  cats-mcp-server --toolsets all               # All {} tools", grand_total);
    let _ = writeln!(out, "  CATS_TOOLSETS=candidates,companies cats-mcp-server");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliArgs {
        let mut argv = vec!["cats-mcp-server"];
        argv.extend_from_slice(args);
        CliArgs::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_explicit_flags() {
        let args = parse(&[
            "--toolsets",
            "candidates,companies",
            "--transport",
            "http",
            "--host",
            "127.0.0.1",
            "--port",
            "9000",
        ]);
        let config = ServerConfig::resolve(&args, ApiConfig::default()).unwrap();

        assert_eq!(config.transport, Transport::Http);
        assert_eq!(config.toolset_names(), "candidates, companies");
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9000);
    }

    #[test]
    fn test_invalid_toolset_is_error() {
        let args = parse(&["--toolsets", "candidates,nope"]);
        let err = ServerConfig::resolve(&args, ApiConfig::default()).unwrap_err();
        assert!(err.to_string().contains("Invalid toolsets specified: nope"));
    }

    #[test]
    fn test_host_name_accepted() {
        let args = parse(&["--host", "localhost", "--toolsets", "jobs"]);
        let config = ServerConfig::resolve(&args, ApiConfig::default()).unwrap();
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 8000);
    }

    #[test]
    fn test_unknown_transport_rejected() {
        let result = CliArgs::try_parse_from(["cats-mcp-server", "--transport", "carrier-pigeon"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_catalogue() {
        let catalogue = toolset_catalogue();
        assert!(catalogue.contains("DEFAULT toolsets (loaded by default) (77 tools):"));
        assert!(catalogue.contains("  - events (1 tool) - Audit event stream"));
        assert!(catalogue.contains("All 170 tools"));
    }
}
