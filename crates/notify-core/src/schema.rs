//! Tool schema declarations.
//!
//! A [`ToolSchema`] is advisory metadata handed to the model. Nothing here
//! validates model output; see [`FunctionCall::validate`](crate::FunctionCall::validate)
//! for the runtime check.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Primitive type tag for a tool parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    String,
    Number,
    Integer,
    Boolean,
}

impl ParamType {
    /// JSON-Schema type name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamType::String => "string",
            ParamType::Number => "number",
            ParamType::Integer => "integer",
            ParamType::Boolean => "boolean",
        }
    }

    /// Check whether a JSON value has this type.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            ParamType::String => value.is_string(),
            ParamType::Number => value.is_number(),
            ParamType::Integer => {
                value.is_i64()
                    || value.is_u64()
                    || value.as_f64().map(|n| n.fract() == 0.0).unwrap_or(false)
            }
            ParamType::Boolean => value.is_boolean(),
        }
    }
}

/// A single named parameter of a tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamSpec {
    /// Parameter type.
    #[serde(rename = "type")]
    pub param_type: ParamType,
    /// Description shown to the model.
    pub description: String,
}

/// Immutable description of one callback the model may invoke.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolSchema {
    /// Tool name the model must use in its call.
    pub name: String,
    /// What the tool does.
    pub description: String,
    /// Parameters in declaration order.
    pub parameters: IndexMap<String, ParamSpec>,
    /// Names of required parameters.
    pub required: Vec<String>,
}

impl ToolSchema {
    /// Start a schema with no parameters.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters: IndexMap::new(),
            required: Vec::new(),
        }
    }

    /// Add an optional parameter.
    pub fn param(
        mut self,
        name: impl Into<String>,
        param_type: ParamType,
        description: impl Into<String>,
    ) -> Self {
        self.parameters.insert(
            name.into(),
            ParamSpec {
                param_type,
                description: description.into(),
            },
        );
        self
    }

    /// Add a required parameter.
    pub fn required_param(
        self,
        name: impl Into<String>,
        param_type: ParamType,
        description: impl Into<String>,
    ) -> Self {
        let name = name.into();
        let mut schema = self.param(name.clone(), param_type, description);
        if !schema.required.contains(&name) {
            schema.required.push(name);
        }
        schema
    }

    /// Whether a parameter is required.
    pub fn is_required(&self, name: &str) -> bool {
        self.required.iter().any(|r| r == name)
    }

    /// Render the parameter contract as a JSON-Schema object.
    pub fn parameters_json(&self) -> Value {
        let properties: Map<String, Value> = self
            .parameters
            .iter()
            .map(|(name, spec)| {
                (
                    name.clone(),
                    json!({
                        "type": spec.param_type.as_str(),
                        "description": spec.description,
                    }),
                )
            })
            .collect();

        json!({
            "type": "object",
            "properties": properties,
            "required": self.required,
        })
    }

    /// Render the whole declaration (`name`, `description`, `parameters`).
    pub fn to_json(&self) -> Value {
        json!({
            "name": self.name,
            "description": self.description,
            "parameters": self.parameters_json(),
        })
    }
}
