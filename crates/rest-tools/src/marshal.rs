//! Parameter marshalling: validated arguments → path, query string, JSON body.
//!
//! Unset parameters (absent, `null`, or `""` where declared with
//! [`ParamSpec::omit_blank`]) are dropped everywhere. Query parameters keep schema
//! declaration order.

use crate::error::{RestToolsError, Result};
use crate::schema::ParamSpec;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamLocation {
    /// Substituted into a `{name}` placeholder of the path template.
    Path,
    Query,
    Body,
}

/// The wire form of one tool invocation: a base-relative path (query string included) and an
/// optional JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct MarshalledRequest {
    pub path: String,
    pub body: Option<Value>,
}

/// Marshal call arguments according to the declared parameters.
///
/// A body is produced whenever the tool declares at least one body parameter, even if every one
/// of them is unset (the backend then receives `{}`, or `{"<wrap>": {}}`).
///
/// # Errors
///
/// Returns [`RestToolsError::Runtime`] if a path parameter is empty or a dot segment, or if the
/// template has a placeholder with no matching parameter.
pub fn marshal(
    path_template: &str,
    params: &[ParamSpec],
    args: &Map<String, Value>,
    body_wrap: Option<&str>,
) -> Result<MarshalledRequest> {
    let value_of = |p: &ParamSpec| p.value_in(args);

    let path_values = params
        .iter()
        .filter(|p| p.location == ParamLocation::Path)
        .map(|p| (p.name, value_of(p)));
    let mut path = expand_path(path_template, path_values)?;

    let query_values = params
        .iter()
        .filter(|p| p.location == ParamLocation::Query)
        .map(|p| (p.name, value_of(p)));
    path.push_str(&query_string(query_values));

    let has_body = params.iter().any(|p| p.location == ParamLocation::Body);
    let body = has_body.then(|| {
        let body_values = params
            .iter()
            .filter(|p| p.location == ParamLocation::Body)
            .map(|p| (p.name, value_of(p)));
        body_from(body_values, body_wrap)
    });

    Ok(MarshalledRequest { path, body })
}

/// Build `?k=v&...` from `(name, value)` pairs, skipping unset values. Returns an empty string
/// when nothing survives.
pub fn query_string<'a>(pairs: impl IntoIterator<Item = (&'a str, Option<&'a Value>)>) -> String {
    let encoded: Vec<String> = pairs
        .into_iter()
        .filter_map(|(k, v)| v.filter(|v| !v.is_null()).map(|v| (k, v)))
        .map(|(k, v)| {
            format!(
                "{}={}",
                encode_component(k),
                encode_component(&value_to_string(v))
            )
        })
        .collect();

    if encoded.is_empty() {
        String::new()
    } else {
        format!("?{}", encoded.join("&"))
    }
}

/// Collect set values into a JSON object, optionally nested under `wrap_key`.
pub fn body_from<'a>(
    fields: impl IntoIterator<Item = (&'a str, Option<&'a Value>)>,
    wrap_key: Option<&str>,
) -> Value {
    let map: Map<String, Value> = fields
        .into_iter()
        .filter_map(|(k, v)| v.filter(|v| !v.is_null()).map(|v| (k.to_string(), v.clone())))
        .collect();

    match wrap_key {
        Some(key) => {
            let mut outer = Map::new();
            outer.insert(key.to_string(), Value::Object(map));
            Value::Object(outer)
        }
        None => Value::Object(map),
    }
}

fn expand_path<'a>(
    template: &str,
    values: impl IntoIterator<Item = (&'a str, Option<&'a Value>)>,
) -> Result<String> {
    let mut path = template.to_string();
    for (name, value) in values {
        let Some(value) = value else {
            continue;
        };
        let segment = value_to_string(value);
        if segment.is_empty() || segment == "." || segment == ".." {
            return Err(RestToolsError::Runtime(format!(
                "path parameter '{name}' must be a non-empty name, got '{segment}'"
            )));
        }
        path = path.replace(&format!("{{{name}}}"), &encode_component(&segment));
    }

    if let Some(start) = path.find('{') {
        let placeholder = path[start..].split('}').next().unwrap_or_default();
        return Err(RestToolsError::Runtime(format!(
            "path template '{template}' has no value for {placeholder}}}"
        )));
    }

    Ok(path)
}

/// Percent-encode like JavaScript's `encodeURIComponent`.
fn encode_component(s: &str) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    let mut out = String::with_capacity(s.len());
    for &b in s.as_bytes() {
        if is_component_safe(b) {
            out.push(b as char);
        } else {
            out.push('%');
            out.push(HEX[(b >> 4) as usize] as char);
            out.push(HEX[(b & 0x0F) as usize] as char);
        }
    }
    out
}

fn is_component_safe(b: u8) -> bool {
    matches!(
        b,
        b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')'
    )
}

/// Scalars render bare; arrays and objects render as compact JSON.
fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => value.to_string(),
    }
}
