//! Function calls produced by the model.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::NotifyError;
use crate::schema::ToolSchema;

/// Text rendered in place of an argument the model did not supply.
pub const MISSING_PLACEHOLDER: &str = "None";

/// A structured call the model asked us to make.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    /// Name of the tool to invoke.
    pub name: String,
    /// Arguments as a JSON object.
    #[serde(default)]
    pub arguments: Map<String, Value>,
}

impl FunctionCall {
    /// Create a call from an argument map.
    pub fn new(name: impl Into<String>, arguments: Map<String, Value>) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }

    /// Create a call from a JSON value, which must be an object (or null).
    pub fn from_value(name: impl Into<String>, arguments: Value) -> Result<Self, NotifyError> {
        let arguments = match arguments {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            other => {
                return Err(NotifyError::InvalidArguments(format!(
                    "expected an object, got {}",
                    other
                )))
            }
        };
        Ok(Self::new(name, arguments))
    }

    /// Parse arguments from a JSON string.
    pub fn from_json(name: impl Into<String>, arguments_json: &str) -> Result<Self, NotifyError> {
        let value: Value = serde_json::from_str(arguments_json)
            .map_err(|e| NotifyError::InvalidArguments(e.to_string()))?;
        Self::from_value(name, value)
    }

    /// Get a string argument by name.
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.arguments.get(key).and_then(|v| v.as_str())
    }

    /// Get a required string argument, or return an error message.
    pub fn require_string(&self, key: &str) -> Result<&str, String> {
        self.get_string(key)
            .ok_or_else(|| format!("Missing required argument: {}", key))
    }

    /// Get a numeric argument by name.
    pub fn get_number(&self, key: &str) -> Option<f64> {
        self.arguments.get(key).and_then(|v| v.as_f64())
    }

    /// Render an argument for inclusion in outgoing text.
    ///
    /// Strings are returned verbatim, other values in their JSON form, and
    /// absent or null values as [`MISSING_PLACEHOLDER`].
    pub fn render(&self, key: &str) -> String {
        match self.arguments.get(key) {
            None | Some(Value::Null) => MISSING_PLACEHOLDER.to_string(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }

    /// Check the arguments against a schema.
    pub fn validate(&self, schema: &ToolSchema) -> ArgValidation {
        let mut validation = ArgValidation::default();

        for name in &schema.required {
            match self.arguments.get(name) {
                None | Some(Value::Null) => validation.missing.push(name.clone()),
                Some(_) => {}
            }
        }

        for (name, spec) in &schema.parameters {
            if let Some(value) = self.arguments.get(name) {
                if !value.is_null() && !spec.param_type.matches(value) {
                    validation.mistyped.push(name.clone());
                }
            }
        }

        validation
    }
}

/// How well a call's arguments match the declared schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ArgValidation {
    /// Required fields that were absent or null.
    pub missing: Vec<String>,
    /// Fields present with a value of the wrong type.
    pub mistyped: Vec<String>,
}

impl ArgValidation {
    /// True when nothing is missing or mistyped.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty() && self.mistyped.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ParamType;
    use serde_json::json;

    fn schema() -> ToolSchema {
        ToolSchema::new("notify", "Notify someone")
            .required_param("email", ParamType::String, "Recipient")
            .required_param("rating", ParamType::Number, "Score")
    }

    #[test]
    fn test_from_json() {
        let call = FunctionCall::from_json("notify", r#"{"email": "a@b.c", "rating": 3}"#).unwrap();
        assert_eq!(call.get_string("email"), Some("a@b.c"));
        assert_eq!(call.get_number("rating"), Some(3.0));
    }

    #[test]
    fn test_from_value_rejects_non_object() {
        let result = FunctionCall::from_value("notify", json!([1, 2]));
        assert!(matches!(result, Err(NotifyError::InvalidArguments(_))));
    }

    #[test]
    fn test_from_value_null_is_empty() {
        let call = FunctionCall::from_value("notify", Value::Null).unwrap();
        assert!(call.arguments.is_empty());
    }

    #[test]
    fn test_render_values() {
        let call = FunctionCall::from_value(
            "notify",
            json!({"email": "a@b.c", "rating": 2.5, "flag": null}),
        )
        .unwrap();

        assert_eq!(call.render("email"), "a@b.c");
        assert_eq!(call.render("rating"), "2.5");
        assert_eq!(call.render("flag"), MISSING_PLACEHOLDER);
        assert_eq!(call.render("absent"), MISSING_PLACEHOLDER);
    }

    #[test]
    fn test_require_string_missing() {
        let call = FunctionCall::from_value("notify", json!({"foo": "bar"})).unwrap();
        assert!(call.require_string("email").is_err());
    }

    #[test]
    fn test_validate_complete() {
        let call = FunctionCall::from_value("notify", json!({"email": "a@b.c", "rating": 3})).unwrap();
        assert!(call.validate(&schema()).is_complete());
    }

    #[test]
    fn test_validate_reports_missing_and_mistyped() {
        let call = FunctionCall::from_value("notify", json!({"rating": "three"})).unwrap();
        let validation = call.validate(&schema());

        assert_eq!(validation.missing, vec!["email".to_string()]);
        assert_eq!(validation.mistyped, vec!["rating".to_string()]);
        assert!(!validation.is_complete());
    }
}
