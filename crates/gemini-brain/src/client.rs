//! GeminiClient implementation using the Generative Language API.

use std::time::Duration;

use async_trait::async_trait;
use notify_core::{CompletionProvider, CompletionRequest, CompletionResponse, NotifyError};
use reqwest::Client;
use tracing::{debug, info};

use crate::api_types::{
    ApiError, Content, FunctionDeclaration, GenerateContentRequest, GenerateContentResponse,
    GenerationConfig, Tool,
};
use crate::config::GeminiConfig;

/// A completion provider backed by Gemini `generateContent`.
///
/// Each call is a single request. There is no retry and no backoff: a
/// transport or service failure is returned to the caller as is.
pub struct GeminiClient {
    client: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Create a new GeminiClient with the given configuration.
    pub fn new(config: GeminiConfig) -> Result<Self, NotifyError> {
        let mut builder = Client::builder();
        if config.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_secs));
        }
        let client = builder
            .build()
            .map_err(|e| NotifyError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        info!(
            "GeminiClient initialized with model: {}, timeout: {}s",
            config.model, config.timeout_secs
        );

        Ok(Self { client, config })
    }

    /// Create a GeminiClient from environment variables.
    ///
    /// See [`GeminiConfig::from_env`] for required environment variables.
    pub fn from_env() -> Result<Self, NotifyError> {
        Self::new(GeminiConfig::from_env()?)
    }

    /// Get the configuration.
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// URL of the `generateContent` endpoint for a model.
    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.api_url.trim_end_matches('/'),
            model
        )
    }

    /// Build the wire request.
    fn build_request(&self, request: &CompletionRequest) -> GenerateContentRequest {
        let tools = if request.tools.is_empty() {
            Vec::new()
        } else {
            vec![Tool {
                function_declarations: request.tools.iter().map(FunctionDeclaration::from).collect(),
            }]
        };

        let generation_config = if self.config.temperature.is_none() && self.config.max_tokens.is_none() {
            None
        } else {
            Some(GenerationConfig {
                temperature: self.config.temperature,
                max_output_tokens: self.config.max_tokens,
            })
        };

        GenerateContentRequest {
            contents: vec![Content::user(request.prompt.clone())],
            tools,
            generation_config,
        }
    }
}

#[async_trait]
impl CompletionProvider for GeminiClient {
    async fn generate(&self, request: CompletionRequest) -> Result<CompletionResponse, NotifyError> {
        let model = request.model.as_deref().unwrap_or(&self.config.model);
        let url = self.endpoint(model);
        let body = self.build_request(&request);

        debug!(
            "Sending generateContent request: model={}, tools={}",
            model,
            request.tools.len()
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| NotifyError::Network(format!("Failed to send request: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();

            // Try to parse as API error
            if let Ok(api_error) = serde_json::from_str::<ApiError>(&error_text) {
                return Err(api_error.into_notify_error(status.as_u16()));
            }

            return Err(NotifyError::ProcessingFailed(format!(
                "API error ({}): {}",
                status.as_u16(),
                error_text
            )));
        }

        let completion: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| NotifyError::ProcessingFailed(format!("Failed to parse response: {}", e)))?;

        if let Some(version) = &completion.model_version {
            debug!("Served by model version: {}", version);
        }
        if let Some(usage) = &completion.usage_metadata {
            debug!(
                "Token usage - prompt: {}, completion: {}, total: {}",
                usage.prompt_token_count, usage.candidates_token_count, usage.total_token_count
            );
        }

        Ok(completion.into_completion())
    }

    fn name(&self) -> &str {
        "Gemini"
    }
}
