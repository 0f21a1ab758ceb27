//! dev.to (Forem) REST API as MCP tools.
//!
//! Reads are anonymous; writes and a few account-scoped reads send the `api-key` header when a
//! key is configured. Without a key the server still starts and authenticated tools fail with the
//! backend's own 401.

mod tools;

use rest_mcp_tools::Result;
use rest_mcp_tools::config::{BackendConfig, Credential};
use rest_mcp_tools::executor::{AuthScheme, AuthStrategy, CredentialPolicy, RequestExecutor};
use rest_mcp_tools::response::ErrorScheme;
use rest_mcp_tools::server::RestToolServer;
use rest_mcp_tools::tool::Catalog;

pub const DEFAULT_BASE_URL: &str = "https://dev.to/api";
pub const API_KEY_ENV: &str = "DEVTO_API_KEY";
pub const BASE_URL_ENV: &str = "DEVTO_BASE_URL";
pub const SERVER_NAME: &str = "devto";

pub const AUTH: AuthStrategy = AuthStrategy {
    scheme: AuthScheme::Header("api-key"),
    policy: CredentialPolicy::Optional,
};

/// `{"error": ...}` or `{"message": ...}`; no machine-readable code.
pub const ERROR_SCHEME: ErrorScheme = ErrorScheme::MessageOnly;

/// Every dev.to tool.
///
/// # Errors
///
/// Returns a configuration error if a tool definition is malformed or two tools share a name.
pub fn catalog() -> Result<Catalog> {
    Catalog::new(tools::all()?)
}

/// # Errors
///
/// Returns a configuration error for an invalid base URL.
pub fn backend_config(base_url: &str, credential: Option<Credential>) -> Result<BackendConfig> {
    BackendConfig::new("Dev.to", base_url, credential, API_KEY_ENV)
}

/// Build the MCP server for a resolved configuration.
///
/// # Errors
///
/// Returns a configuration error if the catalog or the executor cannot be built.
pub fn server(config: BackendConfig) -> Result<RestToolServer> {
    let executor = RequestExecutor::new(config, AUTH, ERROR_SCHEME)?;
    Ok(RestToolServer::new(
        SERVER_NAME,
        env!("CARGO_PKG_VERSION"),
        catalog()?,
        executor,
    )
    .with_instructions(
        "Tools for the dev.to API: articles, comments, users, organizations, tags, reactions, \
         pages and display ads. Write tools need an API key.",
    ))
}
