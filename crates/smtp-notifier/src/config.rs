use secrecy::{ExposeSecret, SecretString};
use std::env;
use tracing::warn;

use crate::SmtpError;

/// STARTTLS submission port.
pub const DEFAULT_SMTP_PORT: u16 = 587;

/// Configuration for connecting to the SMTP relay.
///
/// Values are not checked up front: an empty host or credential surfaces as a
/// delivery fault when a message is sent.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    /// SMTP relay host
    pub smtp_host: String,
    /// SMTP port (default: 587)
    pub smtp_port: u16,
    /// Sender address, also used as the login name
    pub sender_email: String,
    /// Sender password
    password: SecretString,
}

impl SmtpConfig {
    /// Create a new configuration with explicit values and the default port.
    pub fn new(
        smtp_host: impl Into<String>,
        sender_email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            smtp_host: smtp_host.into(),
            smtp_port: DEFAULT_SMTP_PORT,
            sender_email: sender_email.into(),
            password: SecretString::from(password.into()),
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Read (missing values are logged and left empty):
    /// - `SMTP_SERVER` - SMTP relay host
    /// - `SENDER_EMAIL` - Sender address and login
    /// - `SENDER_PASSWORD` - Sender password
    ///
    /// Optional (with defaults):
    /// - `SMTP_PORT` - Default: 587
    ///
    /// Only a malformed `SMTP_PORT` is an error.
    pub fn from_env() -> Result<Self, SmtpError> {
        let smtp_host = env_or_empty("SMTP_SERVER");
        let sender_email = env_or_empty("SENDER_EMAIL");
        let password = env_or_empty("SENDER_PASSWORD");

        let smtp_port = match env::var("SMTP_PORT") {
            Ok(port) => port
                .parse::<u16>()
                .map_err(|e| SmtpError::Config(format!("Invalid SMTP_PORT: {}", e)))?,
            Err(_) => DEFAULT_SMTP_PORT,
        };

        Ok(Self {
            smtp_host,
            smtp_port,
            sender_email,
            password: SecretString::from(password),
        })
    }

    /// Names of settings that are empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.smtp_host.is_empty() {
            missing.push("SMTP_SERVER");
        }
        if self.sender_email.is_empty() {
            missing.push("SENDER_EMAIL");
        }
        if self.password().is_empty() {
            missing.push("SENDER_PASSWORD");
        }
        missing
    }

    /// Get the password (exposes the secret).
    pub(crate) fn password(&self) -> &str {
        self.password.expose_secret()
    }

    /// Builder method to set SMTP host.
    pub fn with_smtp_host(mut self, host: impl Into<String>) -> Self {
        self.smtp_host = host.into();
        self
    }

    /// Builder method to set SMTP port.
    pub fn with_smtp_port(mut self, port: u16) -> Self {
        self.smtp_port = port;
        self
    }
}

fn env_or_empty(key: &str) -> String {
    env::var(key).unwrap_or_else(|_| {
        warn!("{} is not set; delivery will fail until it is", key);
        String::new()
    })
}
