//! # notify-pipeline
//!
//! Tool-call-triggered email notifications.
//!
//! A [`Pipeline`] sends a prompt together with the schemas of its registered
//! notifiers, and if the model answers with a function call, runs the matching
//! notifier exactly once:
//!
//! - [`EmployerNotifier`] answers `notify_employer` with a coding-skills alert
//! - [`AuthorityReportNotifier`] answers `Send_Email` with a security report
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use gemini_brain::GeminiClient;
//! use notify_core::NotifierRegistry;
//! use notify_pipeline::{prompts, AuthorityReportNotifier, Pipeline, PipelineConfig};
//! use smtp_notifier::SmtpMailer;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut registry = NotifierRegistry::new();
//!     registry.register(AuthorityReportNotifier::new(Arc::new(SmtpMailer::from_env()?)));
//!
//!     let pipeline = Pipeline::new(Arc::new(GeminiClient::from_env()?), registry, PipelineConfig::new());
//!     let prompt = prompts::activity_report_prompt(prompts::DEMO_ACTIVITY);
//!     let outcome = pipeline.run(&prompt).await?;
//!     println!("{}", notify_pipeline::render_outcome(&outcome));
//!     Ok(())
//! }
//! ```

pub mod cli;
mod config;
mod notifiers;
mod pipeline;
pub mod prompts;
mod report;
mod schemas;

pub use config::{MissingFieldPolicy, PipelineConfig};
pub use notifiers::{
    AuthorityReportNotifier, EmployerNotifier, NotifierSettings, DEFAULT_LOCATION,
    DEFAULT_PREVIEW_URL,
};
pub use pipeline::{Pipeline, PipelineOutcome};
pub use report::{banner, render_outcome};
pub use schemas::{notify_employer_schema, send_email_schema, NOTIFY_EMPLOYER, SEND_EMAIL};
