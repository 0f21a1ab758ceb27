//! Shared REST-to-MCP adapter layer.
//!
//! This crate is intended to be used by:
//! - `rest-mcp-devto` (content platform, optional per-call API key)
//! - `rest-mcp-minutemail` (mailbox service, mandatory bearer token)
//!
//! The request path is: validate ([`schema`]) → marshal ([`marshal`]) → execute ([`executor`]) →
//! parse errors ([`response`]) → envelope ([`tool::ToolOutcome`]). There are no endpoint
//! declarations here; each backend crate supplies its own [`tool::Catalog`] and
//! [`executor::AuthStrategy`].

pub mod config;
pub mod error;
pub mod executor;
pub mod logging;
pub mod marshal;
pub mod response;
pub mod safety;
pub mod schema;
pub mod semantics;
pub mod server;
pub mod tool;

pub use error::{ApiError, RestToolsError, Result};
