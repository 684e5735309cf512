//! Provider-neutral completion request/response types.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::call::FunctionCall;
use crate::error::NotifyError;
use crate::schema::ToolSchema;

/// A prompt plus the tools the model may call.
///
/// Built per call and not retained.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// Model override; the provider's configured model is used when `None`.
    pub model: Option<String>,
    /// Prompt text.
    pub prompt: String,
    /// Tools offered to the model.
    pub tools: Vec<ToolSchema>,
}

impl CompletionRequest {
    /// Create a request with no tools.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            model: None,
            prompt: prompt.into(),
            tools: Vec::new(),
        }
    }

    /// Set the tools offered to the model.
    pub fn with_tools(mut self, tools: Vec<ToolSchema>) -> Self {
        self.tools = tools;
        self
    }

    /// Override the model for this request.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

/// One piece of a candidate's content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Part {
    /// Plain text reply.
    Text(String),
    /// Structured call request.
    FunctionCall(FunctionCall),
}

/// One alternative answer from the model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Content parts in the order the model produced them.
    pub parts: Vec<Part>,
    /// Why generation stopped, if reported.
    pub finish_reason: Option<String>,
}

impl Candidate {
    /// Concatenated text parts.
    pub fn text(&self) -> String {
        self.parts
            .iter()
            .filter_map(|part| match part {
                Part::Text(text) => Some(text.as_str()),
                Part::FunctionCall(_) => None,
            })
            .collect()
    }
}

/// The model's answer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompletionResponse {
    /// Candidates in ranked order.
    pub candidates: Vec<Candidate>,
}

impl CompletionResponse {
    /// Single-candidate response containing one text part.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            candidates: vec![Candidate {
                parts: vec![Part::Text(text.into())],
                finish_reason: Some("STOP".to_string()),
            }],
        }
    }

    /// Single-candidate response containing one function call.
    pub fn from_call(call: FunctionCall) -> Self {
        Self {
            candidates: vec![Candidate {
                parts: vec![Part::FunctionCall(call)],
                finish_reason: Some("STOP".to_string()),
            }],
        }
    }

    /// Text of the first candidate, empty when there is none.
    pub fn text(&self) -> String {
        self.candidates
            .first()
            .map(Candidate::text)
            .unwrap_or_default()
    }
}

/// An LLM service that accepts a prompt and tool declarations.
///
/// Implementations make exactly one request per call: no retries.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Send the request and return the model's answer.
    async fn generate(&self, request: CompletionRequest) -> Result<CompletionResponse, NotifyError>;

    /// Human-readable provider name.
    fn name(&self) -> &str;
}
