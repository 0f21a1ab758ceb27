//! Backend configuration: base URL, credential, and where the credential came from.

use crate::error::{RestToolsError, Result};
use std::fmt;
use url::Url;

/// An API credential. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Resolve a credential from an explicit value, then from the environment variable
    /// `env_var`. Empty or whitespace-only values count as absent.
    #[must_use]
    pub fn resolve(explicit: Option<String>, env_var: &str) -> Option<Self> {
        explicit
            .and_then(Self::non_empty)
            .or_else(|| std::env::var(env_var).ok().and_then(Self::non_empty))
    }

    /// Wrap a value, treating empty or whitespace-only strings as absent.
    #[must_use]
    pub fn non_empty(value: String) -> Option<Self> {
        if value.trim().is_empty() {
            None
        } else {
            Some(Self(value))
        }
    }

    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

/// Everything the executor needs to talk to one backend.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Human-readable backend name, used in logs and the MCP server info.
    pub name: String,
    pub base_url: Url,
    pub credential: Option<Credential>,
    /// The environment variable the credential is read from; named in configuration errors.
    pub credential_env: &'static str,
}

impl BackendConfig {
    /// # Errors
    ///
    /// Returns [`RestToolsError::Config`] if `base_url` is not an absolute `http(s)` URL.
    pub fn new(
        name: impl Into<String>,
        base_url: &str,
        credential: Option<Credential>,
        credential_env: &'static str,
    ) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|e| {
            RestToolsError::Config(format!("Invalid base URL '{base_url}': {e}"))
        })?;
        if !matches!(base_url.scheme(), "http" | "https") || base_url.host_str().is_none() {
            return Err(RestToolsError::Config(format!(
                "Base URL must be an absolute http(s) URL: '{base_url}'"
            )));
        }
        if base_url.query().is_some() || base_url.fragment().is_some() {
            return Err(RestToolsError::Config(format!(
                "Base URL must not carry a query or fragment: '{base_url}'"
            )));
        }

        Ok(Self {
            name: name.into(),
            base_url,
            credential,
            credential_env,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_value_wins_and_blank_is_absent() {
        let c = Credential::resolve(Some("k1".to_string()), "REST_MCP_TEST_UNSET_VAR");
        assert_eq!(c.as_ref().map(Credential::expose), Some("k1"));

        assert!(Credential::resolve(Some("   ".to_string()), "REST_MCP_TEST_UNSET_VAR").is_none());
        assert!(Credential::resolve(None, "REST_MCP_TEST_UNSET_VAR").is_none());
    }

    #[test]
    fn debug_redacts_secret() {
        let c = Credential::non_empty("s3cret".to_string()).expect("non-empty");
        assert!(!format!("{c:?}").contains("s3cret"));

        let cfg = BackendConfig::new("devto", "https://dev.to/api", Some(c), "DEVTO_API_KEY")
            .expect("config");
        assert!(!format!("{cfg:?}").contains("s3cret"));
    }

    #[test]
    fn base_url_must_be_absolute_http() {
        for bad in ["dev.to/api", "ftp://dev.to", "https://dev.to/api?x=1", "not a url"] {
            let err = BackendConfig::new("x", bad, None, "X").unwrap_err();
            assert!(matches!(err, RestToolsError::Config(_)), "{bad}");
        }
        assert!(BackendConfig::new("x", "http://127.0.0.1:8080/v1", None, "X").is_ok());
    }
}
