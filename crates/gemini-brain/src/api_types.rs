//! Gemini `generateContent` request and response types.

use notify_core::{
    Candidate, CompletionResponse, FunctionCall, NotifyError, ParamType, Part, ToolSchema,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Conversation contents.
    pub contents: Vec<Content>,
    /// Tools to make available (optional).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<Tool>,
    /// Generation parameters (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

/// A turn of the conversation.
#[derive(Debug, Clone, Serialize)]
pub struct Content {
    /// Role: "user" or "model"
    pub role: String,
    /// Content parts
    pub parts: Vec<TextPart>,
}

impl Content {
    /// Create a user turn with a single text part.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            parts: vec![TextPart { text: text.into() }],
        }
    }
}

/// A text part of a request turn.
#[derive(Debug, Clone, Serialize)]
pub struct TextPart {
    pub text: String,
}

/// A group of function declarations.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    pub function_declarations: Vec<FunctionDeclaration>,
}

/// One callable function as Gemini expects it.
#[derive(Debug, Clone, Serialize)]
pub struct FunctionDeclaration {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

impl From<&ToolSchema> for FunctionDeclaration {
    fn from(schema: &ToolSchema) -> Self {
        let properties: Map<String, Value> = schema
            .parameters
            .iter()
            .map(|(name, spec)| {
                (
                    name.clone(),
                    serde_json::json!({
                        "type": openapi_type(spec.param_type),
                        "description": spec.description,
                    }),
                )
            })
            .collect();

        Self {
            name: schema.name.clone(),
            description: schema.description.clone(),
            parameters: serde_json::json!({
                "type": "OBJECT",
                "properties": properties,
                "required": schema.required,
            }),
        }
    }
}

/// Gemini uses the upper-case OpenAPI type enum.
fn openapi_type(param_type: ParamType) -> &'static str {
    match param_type {
        ParamType::String => "STRING",
        ParamType::Number => "NUMBER",
        ParamType::Integer => "INTEGER",
        ParamType::Boolean => "BOOLEAN",
    }
}

/// Generation parameters.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

/// Response from `generateContent`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// Generated candidates (absent when the prompt was blocked).
    #[serde(default)]
    pub candidates: Vec<ResponseCandidate>,
    /// Token usage.
    pub usage_metadata: Option<UsageMetadata>,
    /// Model version that served the request.
    pub model_version: Option<String>,
}

/// A response candidate.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseCandidate {
    /// Candidate content (absent when filtered).
    pub content: Option<ResponseContent>,
    /// Finish reason, e.g. "STOP" or "SAFETY".
    pub finish_reason: Option<String>,
}

/// Content of a response candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

/// One part of a response candidate.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponsePart {
    pub text: Option<String>,
    pub function_call: Option<WireFunctionCall>,
}

/// A function call as Gemini returns it.
#[derive(Debug, Clone, Deserialize)]
pub struct WireFunctionCall {
    pub name: String,
    #[serde(default)]
    pub args: Map<String, Value>,
}

/// Token usage information.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
    #[serde(default)]
    pub total_token_count: u32,
}

/// API error response.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    pub error: ApiErrorDetails,
}

/// API error details.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetails {
    pub code: Option<u16>,
    pub message: String,
    pub status: Option<String>,
}

impl ApiError {
    /// Turn an error body into the pipeline's error, keyed by HTTP status.
    pub fn into_notify_error(self, http_status: u16) -> NotifyError {
        debug!(
            "Gemini error body: code={:?}, status={:?}",
            self.error.code, self.error.status
        );
        NotifyError::ProcessingFailed(format!("API error ({}): {}", http_status, self.error.message))
    }
}

impl GenerateContentResponse {
    /// Convert into the provider-neutral response.
    ///
    /// Parts that carry neither text nor a call (e.g. thought signatures) are dropped.
    pub fn into_completion(self) -> CompletionResponse {
        let candidates = self
            .candidates
            .into_iter()
            .map(|candidate| {
                let parts = candidate
                    .content
                    .map(|content| content.parts)
                    .unwrap_or_default()
                    .into_iter()
                    .filter_map(|part| match (part.function_call, part.text) {
                        (Some(call), _) => Some(Part::FunctionCall(FunctionCall::new(call.name, call.args))),
                        (None, Some(text)) => Some(Part::Text(text)),
                        (None, None) => None,
                    })
                    .collect();

                Candidate {
                    parts,
                    finish_reason: candidate.finish_reason,
                }
            })
            .collect();

        CompletionResponse { candidates }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_function_declaration_uses_openapi_types() {
        let schema = ToolSchema::new("notify", "Notify")
            .required_param("email", ParamType::String, "Recipient")
            .required_param("rating", ParamType::Number, "Score");

        let decl = FunctionDeclaration::from(&schema);
        assert_eq!(decl.parameters["type"], "OBJECT");
        assert_eq!(decl.parameters["properties"]["email"]["type"], "STRING");
        assert_eq!(decl.parameters["properties"]["rating"]["type"], "NUMBER");
        assert_eq!(decl.parameters["required"], json!(["email", "rating"]));
    }

    #[test]
    fn test_request_serialization() {
        let request = GenerateContentRequest {
            contents: vec![Content::user("hello")],
            tools: vec![Tool {
                function_declarations: vec![FunctionDeclaration::from(&ToolSchema::new("t", "d"))],
            }],
            generation_config: None,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(json["tools"][0]["functionDeclarations"][0]["name"], "t");
        assert!(json.get("generationConfig").is_none());
    }

    #[test]
    fn test_request_without_tools_omits_field() {
        let request = GenerateContentRequest {
            contents: vec![Content::user("hello")],
            tools: Vec::new(),
            generation_config: Some(GenerationConfig {
                temperature: Some(0.1),
                max_output_tokens: None,
            }),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("tools").is_none());
        assert!(json["generationConfig"].get("maxOutputTokens").is_none());
    }

    #[test]
    fn test_parse_function_call_response() {
        let body = json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{
                        "functionCall": {
                            "name": "notify_employer",
                            "args": {
                                "employerEmail": "email@email.com",
                                "employeeName": "Demo Employee",
                                "rating": 2,
                                "assessment": "Lacks basic knowledge."
                            }
                        }
                    }]
                },
                "finishReason": "STOP"
            }],
            "usageMetadata": {"promptTokenCount": 120, "candidatesTokenCount": 40, "totalTokenCount": 160},
            "modelVersion": "gemini-2.0-flash"
        });

        let response: GenerateContentResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.usage_metadata.as_ref().unwrap().total_token_count, 160);
        assert_eq!(response.model_version.as_deref(), Some("gemini-2.0-flash"));

        let completion = response.into_completion();
        match &completion.candidates[0].parts[0] {
            Part::FunctionCall(call) => {
                assert_eq!(call.name, "notify_employer");
                assert_eq!(call.get_number("rating"), Some(2.0));
            }
            other => panic!("expected function call, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_text_response() {
        let body = json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "Rating: 8/10"}]},
                "finishReason": "STOP"
            }]
        });

        let response: GenerateContentResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.into_completion().text(), "Rating: 8/10");
    }

    #[test]
    fn test_parse_blocked_response() {
        let body = json!({
            "candidates": [{"finishReason": "SAFETY"}],
            "promptFeedback": {"blockReason": "SAFETY"}
        });

        let response: GenerateContentResponse = serde_json::from_value(body).unwrap();
        let completion = response.into_completion();
        assert!(completion.candidates[0].parts.is_empty());
        assert_eq!(completion.candidates[0].finish_reason.as_deref(), Some("SAFETY"));
    }

    #[test]
    fn test_parse_api_error() {
        let body = r#"{"error": {"code": 400, "message": "API key not valid.", "status": "INVALID_ARGUMENT"}}"#;
        let error: ApiError = serde_json::from_str(body).unwrap();
        assert_eq!(error.error.code, Some(400));
        assert_eq!(error.error.status.as_deref(), Some("INVALID_ARGUMENT"));
        assert_eq!(error.error.message, "API key not valid.");
    }

    #[test]
    fn test_api_error_into_notify_error() {
        let body = r#"{"error": {"code": 403, "message": "Permission denied.", "status": "PERMISSION_DENIED"}}"#;
        let error: ApiError = serde_json::from_str(body).unwrap();

        match error.into_notify_error(403) {
            NotifyError::ProcessingFailed(msg) => assert_eq!(msg, "API error (403): Permission denied."),
            other => panic!("expected processing failure, got {:?}", other),
        }
    }
}
