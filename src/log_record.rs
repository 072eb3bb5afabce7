use chrono::{DateTime, Utc};

use crate::log_level::Severity;

/// Represents a single log event.
///
/// A record is built by the logger at the moment of the `log` call and is
/// immutable afterwards: formatting and dispatch only ever read it.
#[derive(Debug, Clone)]
pub struct LogRecord {
    /// UTC timestamp taken when the record was created.
    pub timestamp: DateTime<Utc>,
    /// Name of the logger that produced the record.
    pub logger_name: String,
    /// The severity level of the record.
    pub severity: Severity,
    /// The actual content or payload of the log message.
    pub message: String,
}

impl LogRecord {
    /// Creates a new `LogRecord` stamped with the current UTC time.
    ///
    /// # Arguments
    ///
    /// * `logger_name` - Name of the originating logger.
    /// * `severity` - The severity `Severity` of the message.
    /// * `message` - The message content. Accepts any type that implements `Into<String>`.
    #[must_use]
    pub fn new(logger_name: impl Into<String>, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            logger_name: logger_name.into(),
            severity,
            message: message.into(),
        }
    }

    /// Creates a record with an explicit timestamp. Mostly useful for tests
    /// that need deterministic formatter output.
    #[must_use]
    pub fn with_timestamp(
        timestamp: DateTime<Utc>,
        logger_name: impl Into<String>,
        severity: Severity,
        message: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            logger_name: logger_name.into(),
            severity,
            message: message.into(),
        }
    }
}
