//! fanlog is a small in-process logging facility: a named [`Logger`] fans
//! structured records out to multiple sinks, each with its own line
//! template, and the file sink rotates by size with bounded retention.
//!
//! The logger is explicit state, not a global: the host constructs it at
//! startup (usually via [`Logger::from_config`]), passes it by reference
//! to whoever needs it, and calls [`Logger::flush`] at shutdown. `log`
//! itself is fire-and-forget: sink failures are isolated per sink and
//! never reach the call site.

/// Construction-time configuration surface and its defaults.
pub mod config;
/// Sink that writes lines straight to stdout.
pub mod console_sink;
/// Renders records into file- or console-template lines.
pub mod formatter;
/// Setup and per-write error types.
pub mod log_error;
/// Ordered severity levels.
pub mod log_level;
/// Leveled convenience macros.
pub mod log_macros;
/// The immutable log record.
pub mod log_record;
/// The sink abstraction.
pub mod log_sink;
/// The logger itself: threshold filtering and multi-sink dispatch.
pub mod logger;
/// Size-rotated file sink with a bounded backup chain.
pub mod rotating_file_sink;

pub use config::LogConfig;
pub use console_sink::ConsoleSink;
pub use formatter::LineFormatter;
pub use log_error::{LogSetupError, SinkError};
pub use log_level::Severity;
pub use log_record::LogRecord;
pub use log_sink::LogSink;
pub use logger::Logger;
pub use rotating_file_sink::RotatingFileSink;
