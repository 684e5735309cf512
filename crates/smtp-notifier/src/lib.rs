//! # smtp-notifier
//!
//! STARTTLS SMTP [`Mailer`](notify_core::Mailer) for tool-call-triggered notifications.
//!
//! ## Sending Email
//!
//! ```no_run
//! use notify_core::Email;
//! use smtp_notifier::{SmtpConfig, SmtpMailer};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), smtp_notifier::SmtpError> {
//!     let mailer = SmtpMailer::new(SmtpConfig::from_env()?);
//!
//!     let email = Email::new("recipient@example.com", "Hello", "Plain text body")
//!         .with_sender_name("Demo User");
//!     mailer.send_email(&email).await?;
//!
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;

pub use client::SmtpMailer;
pub use config::{SmtpConfig, DEFAULT_SMTP_PORT};
pub use error::SmtpError;
