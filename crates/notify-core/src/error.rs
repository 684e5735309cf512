//! Error types for notification operations.

use thiserror::Error;

/// Errors that can occur in the notification pipeline.
///
/// Inference faults ([`NotifyError::Network`], [`NotifyError::ProcessingFailed`])
/// propagate to the caller. Delivery faults are converted into an error
/// [`NotificationResult`](crate::NotificationResult) by the notifier and never
/// escape it.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// Invalid or incomplete configuration.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The LLM service could not be reached.
    #[error("network error: {0}")]
    Network(String),

    /// The LLM service answered with an error or an unreadable body.
    #[error("processing failed: {0}")]
    ProcessingFailed(String),

    /// The mail transport rejected or failed the message.
    #[error("{0}")]
    Delivery(String),

    /// Tool arguments could not be decoded.
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),
}
