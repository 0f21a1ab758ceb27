//! Turning non-2xx responses into [`ApiError`]s.
//!
//! Parsing is split in two: [`read_error_response`] consumes the body once, and
//! [`parse_error_body`] is a pure function over the stored `(status, content-type, body)` triple,
//! so the same input always yields the same error.

use crate::error::{ApiError, UNKNOWN_ERROR};
use mime::Mime;
use reqwest::StatusCode;
use serde_json::Value;

/// How a backend shapes its JSON error bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorScheme {
    /// `{"error": "..."}` or `{"message": "..."}`, no machine-readable code.
    MessageOnly,
    /// `{"code": "...", "message": "..."}`; a missing code becomes [`UNKNOWN_ERROR`].
    Coded,
}

/// Read the body of a failed response and parse it. Never fails: a body that cannot be read is
/// treated like an empty one.
pub async fn read_error_response(scheme: ErrorScheme, response: reqwest::Response) -> ApiError {
    let status = response.status();
    let content_type = content_type_of(response.headers());
    let body = match response.bytes().await {
        Ok(bytes) => bytes.to_vec(),
        Err(e) => {
            tracing::debug!(status = status.as_u16(), error = %e, "failed to read error body");
            Vec::new()
        }
    };
    parse_error_body(scheme, status, content_type.as_deref(), &body)
}

#[must_use]
pub fn parse_error_body(
    scheme: ErrorScheme,
    status: StatusCode,
    content_type: Option<&str>,
    body: &[u8],
) -> ApiError {
    let decoded = is_json_content_type(content_type)
        .then(|| serde_json::from_slice::<Value>(body).ok())
        .flatten()
        .filter(Value::is_object);

    let Some(obj) = decoded else {
        return fallback(scheme, status);
    };

    let field = |name: &str| obj.get(name).and_then(Value::as_str).map(str::to_string);

    match scheme {
        ErrorScheme::MessageOnly => {
            let message = field("error")
                .or_else(|| field("message"))
                .unwrap_or_else(|| status_text(status).to_string());
            ApiError::new(status.as_u16(), None, message)
        }
        ErrorScheme::Coded => {
            let code = field("code").unwrap_or_else(|| UNKNOWN_ERROR.to_string());
            let message = field("message").unwrap_or_else(|| status_text(status).to_string());
            ApiError::new(status.as_u16(), Some(code), message)
        }
    }
}

fn fallback(scheme: ErrorScheme, status: StatusCode) -> ApiError {
    let code = match scheme {
        ErrorScheme::MessageOnly => None,
        ErrorScheme::Coded => Some(UNKNOWN_ERROR.to_string()),
    };
    ApiError::new(status.as_u16(), code, status_text(status))
}

fn status_text(status: StatusCode) -> &'static str {
    status.canonical_reason().unwrap_or("Unknown")
}

pub(crate) fn content_type_of(headers: &reqwest::header::HeaderMap) -> Option<String> {
    headers
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(std::string::ToString::to_string)
}

pub(crate) fn is_json_content_type(content_type: Option<&str>) -> bool {
    let Some(ct) = content_type else {
        return false;
    };
    let Ok(m) = ct.parse::<Mime>() else {
        return false;
    };
    m.subtype() == mime::JSON || m.suffix() == Some(mime::JSON)
}
