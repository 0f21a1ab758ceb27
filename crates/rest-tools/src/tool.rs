//! Tool definitions and the invocation wrapper.
//!
//! A [`ToolDef`] is pure data: method, path template, auth flag, parameters. [`invoke`] runs one
//! call end to end (validate → marshal → execute → envelope) and never fails outward; every
//! error becomes a [`ToolOutcome::Failure`].

use crate::error::{RestToolsError, Result};
use crate::executor::{RequestDescriptor, RequestExecutor, ResponseValue};
use crate::marshal::marshal;
use crate::schema::{ParamSpec, ToolSchema};
use crate::semantics::{annotations_for_method, title_from_name};
use reqwest::Method;
use rmcp::model::{CallToolResult, Content, Tool};
use serde_json::{Map, Value, json};
use std::collections::HashSet;
use tracing::debug;

/// What a successful call returns to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    /// The decoded response body, as is.
    Passthrough,
    /// `{"success": true}`; the response body is discarded.
    Acknowledge,
}

#[derive(Debug, Clone)]
pub struct ToolDef {
    pub name: &'static str,
    pub description: &'static str,
    pub method: Method,
    /// Base-relative path with `{param}` placeholders.
    pub path: &'static str,
    pub requires_auth: bool,
    /// Nest body parameters under this key (`{"article": {...}}`).
    pub body_wrap: Option<&'static str>,
    pub response: ResponseShape,
    schema: ToolSchema,
}

impl ToolDef {
    /// Start a read tool. Reads do not require auth unless [`ToolBuilder::auth`] says so.
    #[must_use]
    pub fn get(name: &'static str, path: &'static str, description: &'static str) -> ToolBuilder {
        ToolBuilder::new(Method::GET, name, path, description)
    }

    /// Start a write tool. Writes require auth by default.
    #[must_use]
    pub fn post(name: &'static str, path: &'static str, description: &'static str) -> ToolBuilder {
        ToolBuilder::new(Method::POST, name, path, description)
    }

    #[must_use]
    pub fn put(name: &'static str, path: &'static str, description: &'static str) -> ToolBuilder {
        ToolBuilder::new(Method::PUT, name, path, description)
    }

    #[must_use]
    pub fn delete(name: &'static str, path: &'static str, description: &'static str) -> ToolBuilder {
        ToolBuilder::new(Method::DELETE, name, path, description)
    }

    #[must_use]
    pub fn schema(&self) -> &ToolSchema {
        &self.schema
    }

    /// The MCP view of this tool: input schema plus method-derived annotations.
    #[must_use]
    pub fn to_mcp_tool(&self) -> Tool {
        let mut tool = Tool::new(self.name, self.description, self.schema.json_schema());
        tool.annotations = Some(annotations_for_method(
            &self.method,
            Some(title_from_name(self.name)),
        ));
        tool
    }
}

pub struct ToolBuilder {
    method: Method,
    name: &'static str,
    path: &'static str,
    description: &'static str,
    requires_auth: bool,
    body_wrap: Option<&'static str>,
    response: ResponseShape,
    params: Vec<ParamSpec>,
}

impl ToolBuilder {
    fn new(
        method: Method,
        name: &'static str,
        path: &'static str,
        description: &'static str,
    ) -> Self {
        let requires_auth = method != Method::GET;
        Self {
            method,
            name,
            path,
            description,
            requires_auth,
            body_wrap: None,
            response: ResponseShape::Passthrough,
            params: Vec::new(),
        }
    }

    #[must_use]
    pub fn auth(mut self, requires_auth: bool) -> Self {
        self.requires_auth = requires_auth;
        self
    }

    #[must_use]
    pub fn wrap_body(mut self, key: &'static str) -> Self {
        self.body_wrap = Some(key);
        self
    }

    #[must_use]
    pub fn acknowledge(mut self) -> Self {
        self.response = ResponseShape::Acknowledge;
        self
    }

    #[must_use]
    pub fn param(mut self, param: ParamSpec) -> Self {
        self.params.push(param);
        self
    }

    #[must_use]
    pub fn params(mut self, params: impl IntoIterator<Item = ParamSpec>) -> Self {
        self.params.extend(params);
        self
    }

    /// # Errors
    ///
    /// Returns [`RestToolsError::Config`] if the path template does not start with `/`, a
    /// placeholder has no path parameter (or vice versa), or the schema does not compile.
    pub fn build(self) -> Result<ToolDef> {
        if !self.path.starts_with('/') {
            return Err(RestToolsError::Config(format!(
                "{}: path must start with '/': '{}'",
                self.name, self.path
            )));
        }
        let placeholders = placeholders(self.path);
        let path_params: HashSet<&str> = self
            .params
            .iter()
            .filter(|p| p.location == crate::marshal::ParamLocation::Path)
            .map(|p| p.name)
            .collect();
        if placeholders != path_params {
            return Err(RestToolsError::Config(format!(
                "{}: path template '{}' does not match its path parameters",
                self.name, self.path
            )));
        }

        let schema = ToolSchema::new(self.params)
            .map_err(|e| RestToolsError::Config(format!("{}: {e}", self.name)))?;

        Ok(ToolDef {
            name: self.name,
            description: self.description,
            method: self.method,
            path: self.path,
            requires_auth: self.requires_auth,
            body_wrap: self.body_wrap,
            response: self.response,
            schema,
        })
    }
}

fn placeholders(template: &str) -> HashSet<&str> {
    template
        .split('{')
        .skip(1)
        .filter_map(|rest| rest.split_once('}').map(|(name, _)| name))
        .collect()
}

/// A backend's full set of tools, unique by name.
#[derive(Debug, Clone)]
pub struct Catalog {
    tools: Vec<ToolDef>,
}

impl Catalog {
    /// # Errors
    ///
    /// Returns [`RestToolsError::Config`] on duplicate tool names.
    pub fn new(tools: Vec<ToolDef>) -> Result<Self> {
        let mut seen = HashSet::new();
        for t in &tools {
            if !seen.insert(t.name) {
                return Err(RestToolsError::Config(format!("Duplicate tool '{}'", t.name)));
            }
        }
        Ok(Self { tools })
    }

    #[must_use]
    pub fn tools(&self) -> &[ToolDef] {
        &self.tools
    }

    #[must_use]
    pub fn find(&self, name: &str) -> Option<&ToolDef> {
        self.tools.iter().find(|t| t.name == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// The result envelope. Never partially successful.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolOutcome {
    /// `Value::Null` for a void (no content) result.
    Success(Value),
    Failure(String),
}

impl ToolOutcome {
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Text shown to the caller: pretty JSON for payloads, the message for failures.
    #[must_use]
    pub fn display_text(&self) -> String {
        match self {
            Self::Success(Value::Null) => String::new(),
            Self::Success(Value::String(s)) => s.clone(),
            Self::Success(v) => serde_json::to_string_pretty(v).unwrap_or_else(|_| v.to_string()),
            Self::Failure(msg) => msg.clone(),
        }
    }
}

impl From<ToolOutcome> for CallToolResult {
    fn from(outcome: ToolOutcome) -> Self {
        let content = vec![Content::text(outcome.display_text())];
        if outcome.is_failure() {
            CallToolResult::error(content)
        } else {
            CallToolResult::success(content)
        }
    }
}

/// Run one tool call. At most one HTTP request is issued, and none if validation fails.
pub async fn invoke(executor: &RequestExecutor, tool: &ToolDef, args: Value) -> ToolOutcome {
    match try_invoke(executor, tool, args).await {
        Ok(v) => ToolOutcome::Success(v),
        Err(e) => ToolOutcome::Failure(e.to_string()),
    }
}

async fn try_invoke(executor: &RequestExecutor, tool: &ToolDef, args: Value) -> Result<Value> {
    if let Err(failure) = tool.schema.validate(tool.name, &args) {
        debug!(tool = tool.name, violations = failure.violations.len(), "rejected arguments");
        return Err(failure.into());
    }

    let empty = Map::new();
    let args = args.as_object().unwrap_or(&empty);
    let marshalled = marshal(tool.path, tool.schema.params(), args, tool.body_wrap)?;

    debug!(tool = tool.name, method = %tool.method, path = tool.path, "invoking tool");
    let descriptor = RequestDescriptor::new(tool.method.clone(), marshalled.path)
        .authenticated(tool.requires_auth)
        .with_body(marshalled.body);
    let response = executor.execute(descriptor).await?;

    Ok(match (tool.response, response) {
        (ResponseShape::Acknowledge, _) => json!({ "success": true }),
        (ResponseShape::Passthrough, ResponseValue::Json(v)) => v,
        (ResponseShape::Passthrough, ResponseValue::Empty) => Value::Null,
    })
}
