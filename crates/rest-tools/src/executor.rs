//! The HTTP request executor.
//!
//! One [`RequestExecutor`] per backend. It joins descriptor paths onto the base URL, attaches the
//! credential according to the backend's [`AuthStrategy`], and maps non-2xx responses to
//! [`ApiError`](crate::ApiError)s through the backend's [`ErrorScheme`].

use crate::config::BackendConfig;
use crate::error::{RestToolsError, Result};
use crate::response::{ErrorScheme, content_type_of, read_error_response};
use crate::safety::{join_confined, redact_url};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderName, HeaderValue};
use reqwest::{Client, Method, StatusCode};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// A fully marshalled request, relative to the backend base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub method: Method,
    /// Base-relative path, query string included. Must start with `/`.
    pub path: String,
    /// Whether the endpoint needs the credential. Only consulted under
    /// [`CredentialPolicy::Optional`].
    pub requires_auth: bool,
    pub body: Option<Value>,
}

impl RequestDescriptor {
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            requires_auth: false,
            body: None,
        }
    }

    #[must_use]
    pub fn authenticated(mut self, requires_auth: bool) -> Self {
        self.requires_auth = requires_auth;
        self
    }

    #[must_use]
    pub fn with_body(mut self, body: Option<Value>) -> Self {
        self.body = body;
        self
    }
}

/// How the credential is put on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScheme {
    /// `Authorization: Bearer <credential>`.
    Bearer,
    /// A named header carrying the raw credential (e.g. `api-key`).
    Header(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialPolicy {
    /// The backend works anonymously; the credential is attached only to endpoints that need it,
    /// and only when one is configured.
    Optional,
    /// Every request carries the credential. A missing credential is a startup error.
    Mandatory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthStrategy {
    pub scheme: AuthScheme,
    pub policy: CredentialPolicy,
}

/// A successful response body.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseValue {
    Json(Value),
    /// No body (204, or a 2xx with zero bytes).
    Empty,
}

/// Executes [`RequestDescriptor`]s against one backend. Cheap to clone.
#[derive(Clone)]
pub struct RequestExecutor {
    inner: Arc<ExecutorInner>,
}

struct ExecutorInner {
    config: BackendConfig,
    auth: AuthStrategy,
    error_scheme: ErrorScheme,
    auth_header: Option<(HeaderName, HeaderValue)>,
    client: Client,
}

impl std::fmt::Debug for RequestExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestExecutor")
            .field("backend", &self.inner.config.name)
            .field("base_url", &self.inner.config.base_url.as_str())
            .field("auth", &self.inner.auth)
            .field("error_scheme", &self.inner.error_scheme)
            .finish_non_exhaustive()
    }
}

impl RequestExecutor {
    /// # Errors
    ///
    /// Returns [`RestToolsError::Config`] if the policy is [`CredentialPolicy::Mandatory`] and no
    /// credential is configured, if the credential cannot be used as a header value, or if the
    /// HTTP client cannot be built.
    pub fn new(
        config: BackendConfig,
        auth: AuthStrategy,
        error_scheme: ErrorScheme,
    ) -> Result<Self> {
        if auth.policy == CredentialPolicy::Mandatory && config.credential.is_none() {
            return Err(RestToolsError::Config(format!(
                "{} API key is required. Set the {} environment variable.",
                config.name, config.credential_env
            )));
        }

        let auth_header = config
            .credential
            .as_ref()
            .map(|credential| {
                let (name, raw) = match auth.scheme {
                    AuthScheme::Bearer => {
                        (AUTHORIZATION, format!("Bearer {}", credential.expose()))
                    }
                    AuthScheme::Header(name) => {
                        let name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                            RestToolsError::Config(format!("Invalid auth header name '{name}': {e}"))
                        })?;
                        (name, credential.expose().to_string())
                    }
                };
                let mut value = HeaderValue::from_str(&raw).map_err(|_| {
                    RestToolsError::Config(format!(
                        "{} contains characters not allowed in an HTTP header",
                        config.credential_env
                    ))
                })?;
                value.set_sensitive(true);
                Ok::<_, RestToolsError>((name, value))
            })
            .transpose()?;

        let client = Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| RestToolsError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            inner: Arc::new(ExecutorInner {
                config,
                auth,
                error_scheme,
                auth_header,
                client,
            }),
        })
    }

    #[must_use]
    pub fn config(&self) -> &BackendConfig {
        &self.inner.config
    }

    /// Whether a request with this `requires_auth` flag gets the credential attached.
    #[must_use]
    pub fn attaches_credential(&self, requires_auth: bool) -> bool {
        if self.inner.auth_header.is_none() {
            return false;
        }
        match self.inner.auth.policy {
            CredentialPolicy::Mandatory => true,
            CredentialPolicy::Optional => requires_auth,
        }
    }

    /// Issue exactly one HTTP request.
    ///
    /// # Errors
    ///
    /// - [`RestToolsError::Runtime`] if the path would leave the backend origin (nothing is sent)
    /// - [`RestToolsError::Transport`] if no response was received
    /// - [`RestToolsError::Api`] for any non-2xx status
    /// - [`RestToolsError::Runtime`] if a 2xx body is neither blank nor JSON
    pub async fn execute(&self, descriptor: RequestDescriptor) -> Result<ResponseValue> {
        let inner = &self.inner;
        let url = join_confined(&inner.config.base_url, &descriptor.path)?;
        let redacted = redact_url(&url);

        let mut request = inner
            .client
            .request(descriptor.method.clone(), url)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json");
        if self.attaches_credential(descriptor.requires_auth) {
            if let Some((name, value)) = &inner.auth_header {
                request = request.header(name.clone(), value.clone());
            }
        }
        if let Some(body) = &descriptor.body {
            request = request.body(serde_json::to_vec(body).map_err(|e| {
                RestToolsError::Runtime(format!("failed to encode request body: {e}"))
            })?);
        }

        debug!(
            backend = %inner.config.name,
            method = %descriptor.method,
            url = %redacted,
            has_body = descriptor.body.is_some(),
            "sending request"
        );

        let response = match request.send().await {
            Ok(r) => r,
            Err(e) => {
                let err = RestToolsError::from(e);
                warn!(
                    backend = %inner.config.name,
                    method = %descriptor.method,
                    url = %redacted,
                    error = %err,
                    "request failed before a response was received"
                );
                return Err(err);
            }
        };

        let status = response.status();
        if !status.is_success() {
            let err = read_error_response(inner.error_scheme, response).await;
            warn!(
                backend = %inner.config.name,
                method = %descriptor.method,
                url = %redacted,
                status = status.as_u16(),
                error = %err,
                "backend returned an error"
            );
            return Err(err.into());
        }

        if status == StatusCode::NO_CONTENT {
            return Ok(ResponseValue::Empty);
        }

        let content_type = content_type_of(response.headers());
        let bytes = response.bytes().await?;
        decode_success_body(content_type.as_deref(), &bytes).inspect_err(|err| {
            warn!(
                backend = %inner.config.name,
                method = %descriptor.method,
                url = %redacted,
                status = status.as_u16(),
                error = %err,
                "backend sent an undecodable success body"
            );
        })
    }
}

/// A blank body is [`ResponseValue::Empty`]; anything else must be JSON.
fn decode_success_body(content_type: Option<&str>, bytes: &[u8]) -> Result<ResponseValue> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(ResponseValue::Empty);
    }
    serde_json::from_slice::<Value>(bytes)
        .map(ResponseValue::Json)
        .map_err(|e| {
            RestToolsError::Runtime(format!(
                "invalid JSON in response body ({}): {e}",
                content_type.unwrap_or("no content type")
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Credential;
    use rest_mcp_test_support::{MockBackend, ScriptedResponse};
    use serde_json::json;

    fn config(base: &str, key: Option<&str>) -> BackendConfig {
        BackendConfig::new(
            "Test",
            base,
            key.and_then(|k| Credential::non_empty(k.to_string())),
            "TEST_API_KEY",
        )
        .expect("config")
    }

    const HEADER_OPTIONAL: AuthStrategy = AuthStrategy {
        scheme: AuthScheme::Header("api-key"),
        policy: CredentialPolicy::Optional,
    };

    const BEARER_MANDATORY: AuthStrategy = AuthStrategy {
        scheme: AuthScheme::Bearer,
        policy: CredentialPolicy::Mandatory,
    };

    #[test]
    fn mandatory_policy_without_credential_fails_at_construction() {
        let err = RequestExecutor::new(
            config("https://api.example.com/v1", None),
            BEARER_MANDATORY,
            ErrorScheme::Coded,
        )
        .unwrap_err();
        assert!(matches!(err, RestToolsError::Config(_)));
        assert!(err.to_string().contains("TEST_API_KEY"));
    }

    #[test]
    fn attach_rules_follow_policy() {
        let optional = RequestExecutor::new(
            config("https://dev.to/api", Some("k")),
            HEADER_OPTIONAL,
            ErrorScheme::MessageOnly,
        )
        .expect("executor");
        assert!(optional.attaches_credential(true));
        assert!(!optional.attaches_credential(false));

        let anonymous = RequestExecutor::new(
            config("https://dev.to/api", None),
            HEADER_OPTIONAL,
            ErrorScheme::MessageOnly,
        )
        .expect("executor");
        assert!(!anonymous.attaches_credential(true));

        let mandatory = RequestExecutor::new(
            config("https://api.example.com/v1", Some("k")),
            BEARER_MANDATORY,
            ErrorScheme::Coded,
        )
        .expect("executor");
        assert!(mandatory.attaches_credential(false));
    }

    #[test]
    fn debug_output_hides_credential() {
        let exec = RequestExecutor::new(
            config("https://api.example.com/v1", Some("top-secret")),
            BEARER_MANDATORY,
            ErrorScheme::Coded,
        )
        .expect("executor");
        assert!(!format!("{exec:?}").contains("top-secret"));
    }

    #[tokio::test]
    async fn get_sends_single_auth_header_and_no_body() {
        let backend = MockBackend::start(ScriptedResponse::json(200, &json!([{"id": 1}])))
            .await
            .expect("backend");
        let exec = RequestExecutor::new(
            config(&format!("{}/v1", backend.base_url()), Some("mm-key")),
            BEARER_MANDATORY,
            ErrorScheme::Coded,
        )
        .expect("executor");

        let out = exec
            .execute(RequestDescriptor::new(Method::GET, "/mailboxes?limit=5"))
            .await
            .expect("execute");
        assert_eq!(out, ResponseValue::Json(json!([{"id": 1}])));

        let req = backend.single_request();
        assert_eq!(req.method, "GET");
        assert_eq!(req.path, "/v1/mailboxes");
        assert_eq!(req.query.as_deref(), Some("limit=5"));
        assert_eq!(req.header_values("authorization"), vec!["Bearer mm-key"]);
        assert_eq!(req.header("accept"), Some("application/json"));
        assert!(req.body.is_empty());
    }

    #[tokio::test]
    async fn optional_policy_omits_credential_for_public_endpoints() {
        let backend = MockBackend::start(ScriptedResponse::json(200, &json!({})))
            .await
            .expect("backend");
        let exec = RequestExecutor::new(
            config(&format!("{}/api", backend.base_url()), Some("dev-key")),
            HEADER_OPTIONAL,
            ErrorScheme::MessageOnly,
        )
        .expect("executor");

        exec.execute(RequestDescriptor::new(Method::GET, "/tags"))
            .await
            .expect("public");
        exec.execute(
            RequestDescriptor::new(Method::POST, "/articles")
                .authenticated(true)
                .with_body(Some(json!({"article": {"title": "T"}}))),
        )
        .await
        .expect("private");

        let reqs = backend.requests();
        assert_eq!(reqs.len(), 2);
        assert!(reqs[0].header_values("api-key").is_empty());
        assert_eq!(reqs[1].header_values("api-key"), vec!["dev-key"]);
        assert!(reqs[1].header_values("authorization").is_empty());
        assert_eq!(reqs[1].body_json(), Some(json!({"article": {"title": "T"}})));
        assert_eq!(reqs[1].header("content-type"), Some("application/json"));
    }

    #[tokio::test]
    async fn no_content_is_empty() {
        let backend = MockBackend::start(ScriptedResponse::no_content())
            .await
            .expect("backend");
        let exec = RequestExecutor::new(
            config(backend.base_url(), Some("k")),
            BEARER_MANDATORY,
            ErrorScheme::Coded,
        )
        .expect("executor");

        let out = exec
            .execute(RequestDescriptor::new(Method::DELETE, "/mailboxes/m1"))
            .await
            .expect("execute");
        assert_eq!(out, ResponseValue::Empty);
        assert_eq!(backend.request_count(), 1);
    }

    #[tokio::test]
    async fn non_success_maps_through_error_scheme() {
        let backend = MockBackend::start(ScriptedResponse::json(
            404,
            &json!({"code": "mailbox_not_found", "message": "Mailbox not found"}),
        ))
        .await
        .expect("backend");
        let exec = RequestExecutor::new(
            config(backend.base_url(), Some("k")),
            BEARER_MANDATORY,
            ErrorScheme::Coded,
        )
        .expect("executor");

        let err = exec
            .execute(RequestDescriptor::new(Method::GET, "/mailboxes/nope"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "[404] mailbox_not_found: Mailbox not found");
        assert_eq!(backend.request_count(), 1);
    }

    #[tokio::test]
    async fn transport_failure_is_reported_without_query() {
        // Bind then drop to get a port with nothing listening.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        let addr = listener.local_addr().expect("addr");
        drop(listener);

        let exec = RequestExecutor::new(
            config(&format!("http://{addr}"), None),
            HEADER_OPTIONAL,
            ErrorScheme::MessageOnly,
        )
        .expect("executor");
        let err = exec
            .execute(RequestDescriptor::new(Method::GET, "/articles?username=secret-user"))
            .await
            .unwrap_err();
        assert!(matches!(err, RestToolsError::Transport(_)));
        assert!(!err.to_string().contains("secret-user"));
    }

    #[tokio::test]
    async fn escaping_path_sends_nothing() {
        let backend = MockBackend::start(ScriptedResponse::json(200, &json!({})))
            .await
            .expect("backend");
        let exec = RequestExecutor::new(
            config(backend.base_url(), None),
            HEADER_OPTIONAL,
            ErrorScheme::MessageOnly,
        )
        .expect("executor");

        let err = exec
            .execute(RequestDescriptor::new(Method::GET, "//evil.example/x"))
            .await
            .unwrap_err();
        assert!(matches!(err, RestToolsError::Runtime(_)));
        assert_eq!(backend.request_count(), 0);
    }

    #[test]
    fn success_body_decoding() {
        assert_eq!(decode_success_body(None, b"").expect("empty"), ResponseValue::Empty);
        assert_eq!(decode_success_body(None, b" \n").expect("blank"), ResponseValue::Empty);
        assert_eq!(
            decode_success_body(Some("application/json"), br#"{"a":1}"#).expect("json"),
            ResponseValue::Json(json!({"a": 1}))
        );
        assert_eq!(
            decode_success_body(None, br#""plain""#).expect("json string"),
            ResponseValue::Json(json!("plain"))
        );
    }

    #[test]
    fn undecodable_success_body_is_an_error() {
        let err = decode_success_body(Some("text/plain"), b"ok").unwrap_err();
        assert!(matches!(err, RestToolsError::Runtime(_)));
        assert!(err.to_string().contains("invalid JSON in response body (text/plain)"));

        let err = decode_success_body(Some("application/json"), br#"{"id": 1,"#).unwrap_err();
        assert!(matches!(err, RestToolsError::Runtime(_)));
    }
}
