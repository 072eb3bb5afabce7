use crate::log_record::LogRecord;

/// Timestamp rendering used in every log line: `YYYY-MM-DD HH:MM:SS,mmm`.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Renders a [`LogRecord`] into a text line.
///
/// Two templates exist: the file template carries all four fields
/// (timestamp, logger name, severity, message) and the console template
/// omits the logger name. Formatting is pure and total: it cannot fail
/// for any valid record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineFormatter {
    include_logger_name: bool,
}

impl LineFormatter {
    /// Template for file sinks: `<timestamp> - <name> - <SEVERITY> - <message>`.
    #[must_use]
    pub const fn file() -> Self {
        Self {
            include_logger_name: true,
        }
    }

    /// Template for console sinks: `<timestamp> - <SEVERITY> - <message>`.
    #[must_use]
    pub const fn console() -> Self {
        Self {
            include_logger_name: false,
        }
    }

    /// Renders `record` according to this template. No trailing newline;
    /// sinks append their own line terminator.
    #[must_use]
    pub fn format(&self, record: &LogRecord) -> String {
        let ts = record.timestamp.format(TIMESTAMP_FORMAT);
        if self.include_logger_name {
            format!(
                "{ts} - {} - {} - {}",
                record.logger_name,
                record.severity.as_str(),
                record.message
            )
        } else {
            format!("{ts} - {} - {}", record.severity.as_str(), record.message)
        }
    }
}
