//! Declarative tool parameter schemas.
//!
//! A [`ToolSchema`] is declared once per tool and compiled to JSON Schema. The same JSON Schema is
//! advertised to MCP clients (`inputSchema`) and used to validate every call before any request
//! is issued.

use crate::error::{RestToolsError, Result};
use crate::marshal::ParamLocation;
use serde_json::{Map, Value, json};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    String,
    Integer,
    Boolean,
    StringArray,
    /// Numeric ID or string handle (e.g. a user ID or username).
    IntegerOrString,
}

/// One declared parameter: type, optionality, constraints, description, and where it goes on
/// the wire.
#[derive(Debug, Clone)]
pub struct ParamSpec {
    pub name: &'static str,
    pub ty: ParamType,
    pub description: &'static str,
    pub required: bool,
    pub location: ParamLocation,
    pub minimum: Option<i64>,
    pub maximum: Option<i64>,
    pub allowed: &'static [&'static str],
    pub format: Option<&'static str>,
    /// An empty string is marshalled as if the parameter were unset.
    pub omit_blank: bool,
}

impl ParamSpec {
    #[must_use]
    pub fn new(name: &'static str, ty: ParamType, description: &'static str) -> Self {
        Self {
            name,
            ty,
            description,
            required: false,
            location: ParamLocation::Query,
            minimum: None,
            maximum: None,
            allowed: &[],
            format: None,
            omit_blank: false,
        }
    }

    #[must_use]
    pub fn string(name: &'static str, description: &'static str) -> Self {
        Self::new(name, ParamType::String, description)
    }

    #[must_use]
    pub fn integer(name: &'static str, description: &'static str) -> Self {
        Self::new(name, ParamType::Integer, description)
    }

    #[must_use]
    pub fn boolean(name: &'static str, description: &'static str) -> Self {
        Self::new(name, ParamType::Boolean, description)
    }

    #[must_use]
    pub fn string_array(name: &'static str, description: &'static str) -> Self {
        Self::new(name, ParamType::StringArray, description)
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Path parameters are always required.
    #[must_use]
    pub fn in_path(mut self) -> Self {
        self.location = ParamLocation::Path;
        self.required = true;
        self
    }

    #[must_use]
    pub fn in_body(mut self) -> Self {
        self.location = ParamLocation::Body;
        self
    }

    #[must_use]
    pub fn range(mut self, minimum: i64, maximum: i64) -> Self {
        self.minimum = Some(minimum);
        self.maximum = Some(maximum);
        self
    }

    #[must_use]
    pub fn one_of(mut self, allowed: &'static [&'static str]) -> Self {
        self.allowed = allowed;
        self
    }

    #[must_use]
    pub fn format(mut self, format: &'static str) -> Self {
        self.format = Some(format);
        self
    }

    #[must_use]
    pub fn omit_blank(mut self) -> Self {
        self.omit_blank = true;
        self
    }

    /// The argument for this parameter, or `None` when it counts as unset.
    pub(crate) fn value_in<'a>(&self, args: &'a Map<String, Value>) -> Option<&'a Value> {
        args.get(self.name).filter(|v| match v {
            Value::Null => false,
            Value::String(s) => !(self.omit_blank && s.is_empty()),
            _ => true,
        })
    }

    fn json_schema(&self) -> Value {
        let mut schema = match self.ty {
            ParamType::String => json!({"type": "string"}),
            ParamType::Integer => json!({"type": "integer"}),
            ParamType::Boolean => json!({"type": "boolean"}),
            ParamType::StringArray => json!({"type": "array", "items": {"type": "string"}}),
            ParamType::IntegerOrString => json!({"type": ["integer", "string"]}),
        };
        if !self.description.is_empty() {
            schema["description"] = json!(self.description);
        }
        if let Some(min) = self.minimum {
            schema["minimum"] = json!(min);
        }
        if let Some(max) = self.maximum {
            schema["maximum"] = json!(max);
        }
        if !self.allowed.is_empty() {
            schema["enum"] = json!(self.allowed);
        }
        if let Some(format) = self.format {
            schema["format"] = json!(format);
        }
        schema
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    UnknownParameter,
    MissingRequired,
    Constraint,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub kind: ViolationKind,
    /// JSON pointer into the arguments (`/per_page`), or `(root)`.
    pub path: String,
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Arguments rejected by a [`ToolSchema`]. Carries every violation found, not just the first.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct ValidationFailure {
    pub tool: String,
    pub violations: Vec<Violation>,
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid arguments for {}", self.tool)?;
        for v in &self.violations {
            write!(f, "\n- {v}")?;
        }
        Ok(())
    }
}

#[derive(Clone)]
pub struct ToolSchema {
    params: Vec<ParamSpec>,
    json_schema: Arc<Map<String, Value>>,
    validator: Arc<jsonschema::Validator>,
}

impl fmt::Debug for ToolSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolSchema")
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

impl ToolSchema {
    /// Compile a schema from parameters in declaration order.
    ///
    /// # Errors
    ///
    /// Returns [`RestToolsError::Config`] on duplicate parameter names or if the generated JSON
    /// Schema does not compile.
    pub fn new(params: Vec<ParamSpec>) -> Result<Self> {
        let mut properties = Map::new();
        let mut required: Vec<&str> = Vec::new();

        for p in &params {
            if properties.insert(p.name.to_string(), p.json_schema()).is_some() {
                return Err(RestToolsError::Config(format!(
                    "Duplicate param '{}'",
                    p.name
                )));
            }
            if p.required {
                required.push(p.name);
            }
        }

        let mut schema = json!({
            "type": "object",
            "properties": properties,
        });
        if !required.is_empty() {
            schema["required"] = json!(required);
        }

        let validator = jsonschema::options()
            .should_validate_formats(true)
            .build(&schema)
            .map_err(|e| RestToolsError::Config(format!("Invalid input schema: {e}")))?;

        let Value::Object(json_schema) = schema else {
            return Err(RestToolsError::Config(
                "input schema must be a JSON object".to_string(),
            ));
        };

        Ok(Self {
            params,
            json_schema: Arc::new(json_schema),
            validator: Arc::new(validator),
        })
    }

    /// Parameters in declaration order.
    #[must_use]
    pub fn params(&self) -> &[ParamSpec] {
        &self.params
    }

    #[must_use]
    pub fn json_schema(&self) -> Arc<Map<String, Value>> {
        Arc::clone(&self.json_schema)
    }

    /// Validate raw call arguments. Fails closed: unknown parameters, missing required
    /// parameters, wrong types and out-of-range values are all violations.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationFailure`] listing every violation.
    pub fn validate(&self, tool: &str, args: &Value) -> std::result::Result<(), ValidationFailure> {
        let mut violations = Vec::new();

        let Some(obj) = args.as_object() else {
            violations.push(Violation {
                kind: ViolationKind::Constraint,
                path: "(root)".to_string(),
                message: "expected an object of named parameters".to_string(),
            });
            return Err(ValidationFailure {
                tool: tool.to_string(),
                violations,
            });
        };

        let known: Vec<&str> = self.params.iter().map(|p| p.name).collect();
        for key in obj.keys() {
            if known.contains(&key.as_str()) {
                continue;
            }
            let message = match find_similar_strings(key, &known).first() {
                Some(s) => format!("unknown parameter '{key}' (did you mean '{s}'?)"),
                None => format!("unknown parameter '{key}'"),
            };
            violations.push(Violation {
                kind: ViolationKind::UnknownParameter,
                path: format!("/{key}"),
                message,
            });
        }

        for p in self.params.iter().filter(|p| p.required) {
            if !obj.contains_key(p.name) {
                violations.push(Violation {
                    kind: ViolationKind::MissingRequired,
                    path: "(root)".to_string(),
                    message: format!("missing required parameter '{}'", p.name),
                });
            }
        }

        for p in self.params.iter().filter(|p| p.location == ParamLocation::Path) {
            if let Some(Value::String(s)) = obj.get(p.name) {
                if s.is_empty() || s == "." || s == ".." {
                    violations.push(Violation {
                        kind: ViolationKind::Constraint,
                        path: format!("/{}", p.name),
                        message: format!("'{s}' is not a valid path segment"),
                    });
                }
            }
        }

        for e in self.validator.iter_errors(args) {
            // Reported above with a nicer shape.
            if matches!(
                e.kind(),
                jsonschema::error::ValidationErrorKind::Required { .. }
            ) {
                continue;
            }
            let instance_path = e.instance_path().to_string();
            violations.push(Violation {
                kind: ViolationKind::Constraint,
                path: if instance_path.is_empty() {
                    "(root)".to_string()
                } else {
                    instance_path
                },
                message: e.to_string(),
            });
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationFailure {
                tool: tool.to_string(),
                violations,
            })
        }
    }
}

fn find_similar_strings(unknown: &str, known: &[&str]) -> Vec<String> {
    let mut candidates: Vec<(f64, String)> = Vec::new();
    for k in known {
        let score = strsim::jaro(unknown, k);
        if score > 0.7 {
            candidates.push((score, (*k).to_string()));
        }
    }
    candidates.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
    candidates.into_iter().map(|(_, s)| s).collect()
}
