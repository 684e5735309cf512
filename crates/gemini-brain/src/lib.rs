//! Google Gemini completion provider.
//!
//! This crate provides a [`CompletionProvider`] that sends a prompt and a set
//! of tool declarations to Gemini's `generateContent` endpoint and returns the
//! answer as a provider-neutral [`CompletionResponse`].
//!
//! # Features
//!
//! - Declares [`ToolSchema`]s as Gemini `functionDeclarations`
//! - Maps `functionCall` parts to [`FunctionCall`](notify_core::FunctionCall)
//! - Surfaces API errors with the service's own message
//! - Configurable via environment variables
//!
//! # Usage
//!
//! ```rust,no_run
//! use gemini_brain::GeminiClient;
//! use notify_core::{CompletionProvider, CompletionRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = GeminiClient::from_env()?;
//!     let response = client.generate(CompletionRequest::new("Say hello")).await?;
//!     println!("{}", response.text());
//!     Ok(())
//! }
//! ```

mod api_types;
mod client;
mod config;

pub use client::GeminiClient;
pub use config::{GeminiConfig, GeminiConfigBuilder, DEFAULT_API_URL, DEFAULT_MODEL};

// Re-export notify-core types for convenience
pub use notify_core::{CompletionProvider, CompletionRequest, CompletionResponse, NotifyError, ToolSchema};
