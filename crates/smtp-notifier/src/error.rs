use notify_core::NotifyError;
use thiserror::Error;

/// Errors that can occur when sending through the SMTP relay.
#[derive(Debug, Error)]
pub enum SmtpError {
    /// Failed to build SMTP transport
    #[error("SMTP transport error: {0}")]
    Transport(String),

    /// The relay refused the connection, the login or the message
    #[error("SMTP send error: {0}")]
    Send(String),

    /// Failed to build email message
    #[error("Failed to build email: {0}")]
    BuildEmail(String),

    /// Invalid email address
    #[error("Invalid email address: {0}")]
    InvalidAddress(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<SmtpError> for NotifyError {
    fn from(err: SmtpError) -> Self {
        match err {
            SmtpError::Config(msg) => NotifyError::Configuration(msg),
            other => NotifyError::Delivery(other.to_string()),
        }
    }
}
