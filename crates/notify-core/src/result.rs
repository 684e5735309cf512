//! Structured outcome of a notification attempt.

use chrono::{DateTime, Local};
use serde::{Serialize, Serializer};

/// `strftime` format used for timestamps in results and email bodies.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format an instant the way results and email bodies show it.
pub fn format_timestamp(at: &DateTime<Local>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Whether the attempt succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationStatus {
    Success,
    Error,
}

/// Result of one delivery attempt. Returned and printed, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct NotificationResult {
    /// Success or error.
    pub status: NotificationStatus,
    /// Human-readable confirmation or fault description.
    pub message: String,
    /// When the attempt concluded.
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: DateTime<Local>,
    /// Where a test mailbox shows the message (success only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<String>,
}

impl NotificationResult {
    /// A delivered message.
    pub fn success(
        recipient: &str,
        sent_at: DateTime<Local>,
        preview_url: Option<String>,
    ) -> Self {
        Self {
            status: NotificationStatus::Success,
            message: format!("Email sent successfully to {}", recipient),
            timestamp: sent_at,
            preview_url,
        }
    }

    /// A failed delivery, stamped with the current time.
    pub fn error(fault: impl std::fmt::Display) -> Self {
        Self {
            status: NotificationStatus::Error,
            message: format!("Failed to send email: {}", fault),
            timestamp: Local::now(),
            preview_url: None,
        }
    }

    /// True when the email was delivered.
    pub fn is_success(&self) -> bool {
        self.status == NotificationStatus::Success
    }

    /// Timestamp as `YYYY-MM-DD HH:MM:SS`.
    pub fn timestamp_string(&self) -> String {
        format_timestamp(&self.timestamp)
    }
}

fn serialize_timestamp<S: Serializer>(at: &DateTime<Local>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_timestamp(at))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_success_result() {
        let at = Local.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap();
        let result = NotificationResult::success("boss@example.com", at, Some("https://preview".into()));

        assert!(result.is_success());
        assert_eq!(result.message, "Email sent successfully to boss@example.com");
        assert_eq!(result.timestamp_string(), "2025-03-14 09:26:53");
    }

    #[test]
    fn test_error_result() {
        let result = NotificationResult::error("connection refused");
        assert!(!result.is_success());
        assert_eq!(result.message, "Failed to send email: connection refused");
        assert!(result.preview_url.is_none());
    }

    #[test]
    fn test_serializes_like_console_output() {
        let at = Local.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        let json = serde_json::to_value(NotificationResult::success("a@b.c", at, None)).unwrap();

        assert_eq!(json["status"], "success");
        assert_eq!(json["timestamp"], "2025-01-02 03:04:05");
        assert!(json.get("preview_url").is_none());
    }
}
