//! In-memory mailers.

use notify_core::{async_trait, Email, Mailer, NotifyError};
use tokio::sync::Mutex;

/// A mailer that accepts everything and remembers what it was given.
#[derive(Debug)]
pub struct RecordingMailer {
    sender: String,
    sent: Mutex<Vec<Email>>,
}

impl RecordingMailer {
    /// Create a mailer sending from `sender`.
    pub fn new(sender: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            sent: Mutex::new(Vec::new()),
        }
    }

    /// Emails accepted so far.
    pub async fn sent(&self) -> Vec<Email> {
        self.sent.lock().await.clone()
    }
}

impl Default for RecordingMailer {
    fn default() -> Self {
        Self::new("alerts@example.com")
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: &Email) -> Result<(), NotifyError> {
        self.sent.lock().await.push(email.clone());
        Ok(())
    }

    fn sender_address(&self) -> &str {
        &self.sender
    }
}

/// Stage of the SMTP exchange at which a [`FailingMailer`] gives up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MailFault {
    /// The relay refused the TCP connection.
    ConnectRefused,
    /// The relay rejected the login.
    AuthRejected,
    /// The relay rejected the message.
    SendRejected,
}

impl MailFault {
    /// Fault text in the shape an SMTP client reports it.
    pub fn description(&self) -> &'static str {
        match self {
            MailFault::ConnectRefused => "Connection error: Connection refused (os error 111)",
            MailFault::AuthRejected => "permanent error (535): 5.7.8 Authentication credentials invalid",
            MailFault::SendRejected => "permanent error (550): 5.1.1 Mailbox unavailable",
        }
    }
}

/// A mailer that always fails with a chosen fault, recording each attempt.
#[derive(Debug)]
pub struct FailingMailer {
    fault: MailFault,
    attempts: Mutex<Vec<Email>>,
}

impl FailingMailer {
    /// Create a mailer that fails every send with `fault`.
    pub fn new(fault: MailFault) -> Self {
        Self {
            fault,
            attempts: Mutex::new(Vec::new()),
        }
    }

    /// Emails that were attempted.
    pub async fn attempts(&self) -> Vec<Email> {
        self.attempts.lock().await.clone()
    }
}

#[async_trait]
impl Mailer for FailingMailer {
    async fn send(&self, email: &Email) -> Result<(), NotifyError> {
        self.attempts.lock().await.push(email.clone());
        Err(NotifyError::Delivery(format!("SMTP send error: {}", self.fault.description())))
    }

    fn sender_address(&self) -> &str {
        "alerts@example.com"
    }
}
