//! MinuteMail temporary-mailbox REST API as MCP tools.
//!
//! Every call carries `Authorization: Bearer <key>`; building the server without a key is a
//! configuration error.

mod tools;

use rest_mcp_tools::Result;
use rest_mcp_tools::config::{BackendConfig, Credential};
use rest_mcp_tools::executor::{AuthScheme, AuthStrategy, CredentialPolicy, RequestExecutor};
use rest_mcp_tools::response::ErrorScheme;
use rest_mcp_tools::server::RestToolServer;
use rest_mcp_tools::tool::Catalog;

pub const DEFAULT_BASE_URL: &str = "https://api.minutemail.co/v1";
pub const API_KEY_ENV: &str = "MINUTEMAIL_API_KEY";
pub const BASE_URL_ENV: &str = "MINUTEMAIL_BASE_URL";
pub const SERVER_NAME: &str = "minutemail";

pub const AUTH: AuthStrategy = AuthStrategy {
    scheme: AuthScheme::Bearer,
    policy: CredentialPolicy::Mandatory,
};

/// `{"code": ..., "message": ...}`, with `unknown_error` when the body has no code.
pub const ERROR_SCHEME: ErrorScheme = ErrorScheme::Coded;

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
    BackendConfig::new("MinuteMail", base_url, credential, API_KEY_ENV)
}

/// # Errors
///
/// Returns a configuration error if no API key is configured, or if the catalog or executor
/// cannot be built.
pub fn server(config: BackendConfig) -> Result<RestToolServer> {
    let executor = RequestExecutor::new(config, AUTH, ERROR_SCHEME)?;
    Ok(RestToolServer::new(
        SERVER_NAME,
        env!("CARGO_PKG_VERSION"),
        catalog()?,
        executor,
    )
    .with_instructions(
        "Tools for MinuteMail temporary mailboxes: create and manage mailboxes, read and delete \
         messages and attachments, and manage archived mailboxes.",
    ))
}
