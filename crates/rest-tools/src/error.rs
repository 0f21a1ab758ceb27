//! Error types for `rest-mcp-tools`.

use crate::safety::sanitize_reqwest_error;
use crate::schema::ValidationFailure;
use std::fmt;
use thiserror::Error;

/// Reason code reported when a backend error body carries no decodable machine code.
pub const UNKNOWN_ERROR: &str = "unknown_error";

/// A failure reported by the backend itself (a non-2xx response).
///
/// `code` is `None` for backends whose error bodies never carry a machine-readable reason; for
/// the others it holds the decoded code, or [`UNKNOWN_ERROR`] when the body could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct ApiError {
    pub status: u16,
    pub code: Option<String>,
    pub message: String,
}

impl ApiError {
    #[must_use]
    pub fn new(status: u16, code: Option<String>, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    /// Machine-readable reason, falling back to [`UNKNOWN_ERROR`].
    #[must_use]
    pub fn reason_code(&self) -> &str {
        self.code.as_deref().unwrap_or(UNKNOWN_ERROR)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.code {
            Some(code) => write!(f, "[{}] {code}: {}", self.status, self.message),
            None => write!(f, "[{}] {}", self.status, self.message),
        }
    }
}

#[derive(Debug, Error)]
pub enum RestToolsError {
    /// Startup-time misconfiguration (missing mandatory credential, bad base URL).
    #[error("config error: {0}")]
    Config(String),
    /// Caller-supplied arguments rejected before any request was issued.
    #[error(transparent)]
    Validation(#[from] ValidationFailure),
    /// Backend answered with a non-2xx status.
    #[error(transparent)]
    Api(#[from] ApiError),
    /// No HTTP response at all (connect, TLS, body read).
    #[error("{0}")]
    Transport(String),
    #[error("runtime error: {0}")]
    Runtime(String),
}

pub type Result<T> = std::result::Result<T, RestToolsError>;

impl From<reqwest::Error> for RestToolsError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(sanitize_reqwest_error(&value))
    }
}
