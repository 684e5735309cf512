//! Core traits and types for tool-call-triggered notifications.
//!
//! This crate provides the shared vocabulary for the notification pipeline:
//!
//! - [`ToolSchema`] - The callback contract declared to the model
//! - [`CompletionProvider`] - Trait for LLM services that accept tool schemas
//! - [`FunctionCall`] / [`ArgValidation`] - A model-produced call and how well
//!   it matches its schema
//! - [`extract_call`] - Pulls the function call (or plain text) out of a response
//! - [`Notifier`] / [`NotifierRegistry`] - Side effects dispatched by tool name
//! - [`Mailer`] / [`Email`] - The outgoing mail seam used by notifiers
//! - [`NotificationResult`] - Structured outcome of one delivery attempt
//! - [`NotifyError`] - Error types for fail-fast operations
//!
//! # Example
//!
//! ```rust
//! use notify_core::{extract_call, CompletionResponse, Extraction, ExtractionPolicy, FunctionCall};
//! use serde_json::json;
//!
//! let call = FunctionCall::from_value("Send_Email", json!({"targetEmailId": "a@b.c"})).unwrap();
//! let response = CompletionResponse::from_call(call);
//!
//! match extract_call(&response, ExtractionPolicy::default()) {
//!     Extraction::Call(call) => assert_eq!(call.name, "Send_Email"),
//!     Extraction::Text(_) => unreachable!(),
//! }
//! ```

mod call;
mod completion;
mod error;
mod extract;
mod mailer;
mod notifier;
mod prompt;
mod registry;
mod result;
mod schema;

pub use call::{ArgValidation, FunctionCall, MISSING_PLACEHOLDER};
pub use completion::{Candidate, CompletionProvider, CompletionRequest, CompletionResponse, Part};
pub use error::NotifyError;
pub use extract::{extract_call, Extraction, ExtractionPolicy};
pub use mailer::{Email, Mailer};
pub use notifier::Notifier;
pub use prompt::hash_prompt;
pub use registry::NotifierRegistry;
pub use result::{format_timestamp, NotificationResult, NotificationStatus, TIMESTAMP_FORMAT};
pub use schema::{ParamSpec, ParamType, ToolSchema};

// Re-export async_trait for convenience
pub use async_trait::async_trait;
