//! Configuration for the Gemini client.

use notify_core::NotifyError;
use std::env;

/// Default Generative Language API base URL.
pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com";

/// Default model.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Default HTTP timeout for API requests (60 seconds).
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Configuration for [`GeminiClient`](crate::GeminiClient).
#[derive(Clone)]
pub struct GeminiConfig {
    /// API base URL.
    pub api_url: String,

    /// API key for authentication.
    pub api_key: String,

    /// Model name to use.
    pub model: String,

    /// Temperature for generation (0.0 - 2.0).
    pub temperature: Option<f32>,

    /// Maximum output tokens.
    pub max_tokens: Option<u32>,

    /// Request timeout in seconds (0 disables the timeout).
    pub timeout_secs: u64,
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            temperature: None,
            max_tokens: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl GeminiConfig {
    /// Create configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `GOOGLE_GENAI_API_KEY` - API key for authentication
    ///
    /// Optional environment variables:
    /// - `GEMINI_API_URL` - API URL (default: https://generativelanguage.googleapis.com)
    /// - `GEMINI_MODEL` - Model name (default: gemini-2.0-flash)
    /// - `GEMINI_TEMPERATURE` - Temperature (default: service default)
    /// - `GEMINI_MAX_TOKENS` - Max output tokens (default: service default)
    /// - `GEMINI_TIMEOUT_SECS` - Request timeout (default: 60, 0 disables)
    pub fn from_env() -> Result<Self, NotifyError> {
        let api_key = env::var("GOOGLE_GENAI_API_KEY")
            .map_err(|_| NotifyError::Configuration("GOOGLE_GENAI_API_KEY not set".to_string()))?;

        let api_url = env::var("GEMINI_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let model = env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let temperature = env::var("GEMINI_TEMPERATURE")
            .ok()
            .and_then(|v| v.parse().ok());

        let max_tokens = env::var("GEMINI_MAX_TOKENS")
            .ok()
            .and_then(|v| v.parse().ok());

        let timeout_secs = env::var("GEMINI_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Self {
            api_url,
            api_key,
            model,
            temperature,
            max_tokens,
            timeout_secs,
        })
    }

    /// Create a new config builder.
    pub fn builder() -> GeminiConfigBuilder {
        GeminiConfigBuilder::default()
    }
}

/// Builder for GeminiConfig.
#[derive(Debug, Default)]
pub struct GeminiConfigBuilder {
    config: GeminiConfig,
}

impl GeminiConfigBuilder {
    /// Set the API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = key.into();
        self
    }

    /// Set the API URL.
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.config.api_url = url.into();
        self
    }

    /// Set the model name.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    /// Set the temperature.
    pub fn temperature(mut self, temp: f32) -> Self {
        self.config.temperature = Some(temp);
        self
    }

    /// Set the max output tokens.
    pub fn max_tokens(mut self, tokens: u32) -> Self {
        self.config.max_tokens = Some(tokens);
        self
    }

    /// Set the request timeout.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.config.timeout_secs = secs;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> GeminiConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeminiConfig::default();

        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert!(config.api_key.is_empty());
        assert_eq!(config.model, "gemini-2.0-flash");
        assert!(config.temperature.is_none());
        assert!(config.max_tokens.is_none());
        assert_eq!(config.timeout_secs, 60);
    }

    #[test]
    fn test_builder_all_options() {
        let config = GeminiConfig::builder()
            .api_key("my-key")
            .api_url("http://localhost:9999")
            .model("gemini-1.5-pro")
            .temperature(0.2)
            .max_tokens(256)
            .timeout_secs(5)
            .build();

        assert_eq!(config.api_key, "my-key");
        assert_eq!(config.api_url, "http://localhost:9999");
        assert_eq!(config.model, "gemini-1.5-pro");
        assert_eq!(config.temperature, Some(0.2));
        assert_eq!(config.max_tokens, Some(256));
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = GeminiConfig::builder().api_key("super-secret").build();
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }

    // Environment-based tests are combined into a single test to avoid
    // race conditions when tests run in parallel (env vars are process-global).
    #[test]
    fn test_from_env_scenarios() {
        use std::sync::Mutex;
        static ENV_LOCK: Mutex<()> = Mutex::new(());
        let _guard = ENV_LOCK.lock().unwrap();

        fn clear_all_gemini_vars() {
            std::env::remove_var("GOOGLE_GENAI_API_KEY");
            std::env::remove_var("GEMINI_API_URL");
            std::env::remove_var("GEMINI_MODEL");
            std::env::remove_var("GEMINI_TEMPERATURE");
            std::env::remove_var("GEMINI_MAX_TOKENS");
            std::env::remove_var("GEMINI_TIMEOUT_SECS");
        }

        // Missing API key should error
        clear_all_gemini_vars();
        match GeminiConfig::from_env() {
            Err(NotifyError::Configuration(msg)) => assert!(msg.contains("GOOGLE_GENAI_API_KEY")),
            other => panic!("Expected Configuration error, got {:?}", other),
        }

        // Only API key set, defaults used
        clear_all_gemini_vars();
        std::env::set_var("GOOGLE_GENAI_API_KEY", "test-env-key");
        let config = GeminiConfig::from_env().unwrap();
        assert_eq!(config.api_key, "test-env-key");
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);

        // All vars set
        clear_all_gemini_vars();
        std::env::set_var("GOOGLE_GENAI_API_KEY", "full-key");
        std::env::set_var("GEMINI_API_URL", "http://127.0.0.1:8089");
        std::env::set_var("GEMINI_MODEL", "gemini-1.5-flash");
        std::env::set_var("GEMINI_TEMPERATURE", "0.4");
        std::env::set_var("GEMINI_MAX_TOKENS", "512");
        std::env::set_var("GEMINI_TIMEOUT_SECS", "0");
        let config = GeminiConfig::from_env().unwrap();
        assert_eq!(config.api_url, "http://127.0.0.1:8089");
        assert_eq!(config.model, "gemini-1.5-flash");
        assert_eq!(config.temperature, Some(0.4));
        assert_eq!(config.max_tokens, Some(512));
        assert_eq!(config.timeout_secs, 0);

        clear_all_gemini_vars();
    }
}
