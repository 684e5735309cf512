//! Test doubles for notification pipelines.
//!
//! This crate provides fakes for both external collaborators:
//! - `ScriptedProvider` - Replays canned model responses and records requests
//! - `FailingProvider` - Simulates an unreachable inference service
//! - `RecordingMailer` - Accepts and remembers every email
//! - `FailingMailer` - Fails every send with a chosen SMTP fault
//!
//! For real traffic, use the `gemini-brain` and `smtp-notifier` crates instead.
//!
//! # Example
//!
//! ```rust
//! use mock_brain::ScriptedProvider;
//! use notify_core::{CompletionProvider, CompletionRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), notify_core::NotifyError> {
//!     let provider = ScriptedProvider::replying_with_text("All good.");
//!     let response = provider.generate(CompletionRequest::new("Rate this")).await?;
//!     assert_eq!(response.text(), "All good.");
//!     Ok(())
//! }
//! ```

mod mailer;
mod scripted;

// Re-export notify-core types for convenience
pub use notify_core::{async_trait, CompletionProvider, Email, Mailer, NotifyError};

pub use mailer::{FailingMailer, MailFault, RecordingMailer};
pub use scripted::{FailingProvider, ScriptedProvider};
