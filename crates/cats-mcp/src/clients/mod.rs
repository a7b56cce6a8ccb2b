//! CATS API client modules.
//!
//! - `config`: base URL and API key, loaded once from the environment
//! - `gateway`: the authenticated, retrying request path every tool uses

pub mod config;
pub mod gateway;

pub use config::ApiConfig;
pub use gateway::{ApiRequest, GatewayError, RequestGateway};
