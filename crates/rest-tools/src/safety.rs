//! Outbound URL confinement and redaction.
//!
//! Every request URL must stay on its backend's origin, and nothing derived from a request URL
//! (query strings in particular) may leak into a tool result through a transport error.

use crate::error::RestToolsError;
use url::Url;

/// Join a descriptor path onto a base URL and make sure the result stays on the base origin.
///
/// # Errors
///
/// Returns [`RestToolsError::Runtime`] if the path does not start with `/`, cannot be parsed, or
/// resolves to a different origin than the base URL.
pub fn join_confined(base: &Url, path: &str) -> Result<Url, RestToolsError> {
    if !path.starts_with('/') || path.starts_with("//") {
        return Err(RestToolsError::Runtime(format!(
            "request path must be relative to the backend base URL: '{path}'"
        )));
    }

    let joined = format!("{}{}", base.as_str().trim_end_matches('/'), path);
    let url = Url::parse(&joined)
        .map_err(|e| RestToolsError::Runtime(format!("Invalid URL: {e}")))?;

    if url.origin() != base.origin() {
        return Err(RestToolsError::Runtime(format!(
            "request path '{path}' escapes the backend origin"
        )));
    }

    Ok(url)
}

#[must_use]
pub fn redact_url(url: &Url) -> String {
    let mut u = url.clone();
    // Best-effort: drop credentials + query + fragment.
    let _ = u.set_username("");
    let _ = u.set_password(None);
    u.set_query(None);
    u.set_fragment(None);
    u.to_string()
}

#[must_use]
pub fn sanitize_reqwest_error(e: &reqwest::Error) -> String {
    let mut msg = e.to_string();
    if let Some(u) = e.url() {
        msg = msg.replace(u.as_str(), &redact_url(u));
    }
    msg
}
