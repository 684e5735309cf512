use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use async_trait::async_trait;
use notify_core::{Email, Mailer, NotifyError};
use tracing::{info, instrument, warn};

use crate::{SmtpConfig, SmtpError};

/// Mailer that submits messages to an SMTP relay over STARTTLS.
///
/// A fresh connection is opened for every message and closed before
/// [`send_email`](Self::send_email) returns, whether the send succeeded or not.
/// Nothing is pooled between sends.
pub struct SmtpMailer {
    config: SmtpConfig,
}

impl SmtpMailer {
    /// Create a new mailer with the given configuration.
    ///
    /// Does not connect; missing settings are only reported in the logs.
    pub fn new(config: SmtpConfig) -> Self {
        let missing = config.missing_fields();
        if !missing.is_empty() {
            warn!(missing = ?missing, "SMTP configuration incomplete");
        }

        info!(
            host = %config.smtp_host,
            port = config.smtp_port,
            sender = %config.sender_email,
            "Created SMTP mailer"
        );

        Self { config }
    }

    /// Create a mailer from environment variables.
    ///
    /// See [`SmtpConfig::from_env`].
    pub fn from_env() -> Result<Self, SmtpError> {
        Ok(Self::new(SmtpConfig::from_env()?))
    }

    /// Get the configuration.
    pub fn config(&self) -> &SmtpConfig {
        &self.config
    }

    /// Send an email: connect, STARTTLS, authenticate, submit, close.
    #[instrument(skip(self, email), fields(to = %email.to, subject = %email.subject))]
    pub async fn send_email(&self, email: &Email) -> Result<(), SmtpError> {
        let message = self.build_message(email)?;
        let transport = self.transport()?;

        transport
            .send(message)
            .await
            .map_err(|e| SmtpError::Send(e.to_string()))?;

        info!(to = %email.to, subject = %email.subject, "Email sent successfully");
        Ok(())
    }

    /// Build a single-use STARTTLS transport.
    fn transport(&self) -> Result<AsyncSmtpTransport<Tokio1Executor>, SmtpError> {
        if self.config.smtp_host.is_empty() {
            return Err(SmtpError::Transport("SMTP host is not configured".to_string()));
        }

        let creds = Credentials::new(
            self.config.sender_email.clone(),
            self.config.password().to_string(),
        );

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.config.smtp_host)
            .map_err(|e| SmtpError::Transport(e.to_string()))?
            .port(self.config.smtp_port)
            .credentials(creds)
            .build();

        Ok(transport)
    }

    /// Build a lettre Message from our Email type.
    fn build_message(&self, email: &Email) -> Result<Message, SmtpError> {
        let sender: Address = self
            .sender_address()
            .parse()
            .map_err(|e| SmtpError::InvalidAddress(format!("From '{}': {}", self.sender_address(), e)))?;
        let from = Mailbox::new(email.sender_name.clone(), sender);

        let to: Mailbox = email
            .to
            .parse()
            .map_err(|e| SmtpError::InvalidAddress(format!("To '{}': {}", email.to, e)))?;

        Message::builder()
            .from(from)
            .to(to)
            .subject(&email.subject)
            .header(ContentType::TEXT_PLAIN)
            .body(email.body.clone())
            .map_err(|e| SmtpError::BuildEmail(e.to_string()))
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: &Email) -> Result<(), NotifyError> {
        self.send_email(email).await.map_err(NotifyError::from)
    }

    fn sender_address(&self) -> &str {
        &self.config.sender_email
    }
}
