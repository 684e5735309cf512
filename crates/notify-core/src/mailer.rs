//! Outgoing mail seam.

use async_trait::async_trait;

use crate::error::NotifyError;

/// A plain-text email to a single recipient.
///
/// The sender address belongs to the [`Mailer`]; the email only carries the
/// display name to put in front of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    /// Display name for the `From` header.
    pub sender_name: Option<String>,
    /// Recipient address, exactly as supplied by the model.
    pub to: String,
    /// Subject line.
    pub subject: String,
    /// Plain text body.
    pub body: String,
}

impl Email {
    /// Create a new email with a single recipient.
    pub fn new(to: impl Into<String>, subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            sender_name: None,
            to: to.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }

    /// Set the sender display name.
    pub fn with_sender_name(mut self, name: impl Into<String>) -> Self {
        self.sender_name = Some(name.into());
        self
    }
}

/// Something that can deliver an [`Email`].
///
/// One call is one delivery attempt. Implementations must release any
/// connection they open before returning, on success and on failure alike.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Deliver the email.
    async fn send(&self, email: &Email) -> Result<(), NotifyError>;

    /// Address used in the `From` header.
    fn sender_address(&self) -> &str;
}
