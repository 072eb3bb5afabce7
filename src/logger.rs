use std::io::{self, Write};

use crate::config::LogConfig;
use crate::console_sink::ConsoleSink;
use crate::formatter::LineFormatter;
use crate::log_error::{LogSetupError, SinkError};
use crate::log_level::Severity;
use crate::log_record::LogRecord;
use crate::log_sink::LogSink;
use crate::rotating_file_sink::RotatingFileSink;

/// A named logger that fans out records to an ordered list of sinks.
///
/// The logger is an explicitly constructed value: build it once at process
/// start, share it by reference (`log` takes `&self` and is safe for
/// concurrent callers), and call [`flush`](Self::flush) at shutdown.
///
/// Each sink carries its own [`LineFormatter`], so the file and console
/// renditions of the same record can differ. Dispatch is synchronous and
/// follows insertion order; a failing sink never suppresses delivery to
/// the sinks after it and never surfaces to the caller of `log`.
///
/// # Examples
/// ```no_run
/// use fanlog::{LineFormatter, LogConfig, Logger, Severity};
///
/// let config = LogConfig::new("/var/log/myapp");
/// let logger = Logger::from_config("myapp", &config)?;
/// logger.log(Severity::Info, "panel started");
/// logger.flush().ok();
/// # Ok::<(), fanlog::LogSetupError>(())
/// ```
pub struct Logger {
    name: String,
    threshold: Severity,
    sinks: Vec<(LineFormatter, Box<dyn LogSink>)>,
}

impl Logger {
    /// Creates a logger with no sinks and the given threshold.
    #[must_use]
    pub fn new(name: impl Into<String>, threshold: Severity) -> Self {
        Self {
            name: name.into(),
            threshold,
            sinks: Vec::new(),
        }
    }

    /// Builds the standard file + console pair from `config`.
    ///
    /// This is the explicit initialization step: it creates the log
    /// directory, attaches a [`RotatingFileSink`] with the file template
    /// and a [`ConsoleSink`] with the console template, and sets the
    /// threshold from `config.min_severity`.
    ///
    /// # Errors
    ///
    /// Returns [`LogSetupError`] when the log directory cannot be
    /// created. The host decides whether to abort or continue with a
    /// console-only logger.
    pub fn from_config(name: impl Into<String>, config: &LogConfig) -> Result<Self, LogSetupError> {
        let file_sink = RotatingFileSink::new(
            &config.log_directory,
            &config.file_name,
            config.max_bytes,
            config.backup_count,
        )?;
        let mut logger = Self::new(name, config.min_severity);
        logger.add_sink(LineFormatter::file(), Box::new(file_sink));
        logger.add_sink(LineFormatter::console(), Box::new(ConsoleSink::new()));
        Ok(logger)
    }

    /// Sets the minimum severity. Records below it are dropped before any
    /// formatting or I/O happens.
    pub fn set_threshold(&mut self, threshold: Severity) {
        self.threshold = threshold;
    }

    /// Appends a sink; insertion order is dispatch order for the logger's
    /// lifetime.
    pub fn add_sink(&mut self, formatter: LineFormatter, sink: Box<dyn LogSink>) {
        self.sinks.push((formatter, sink));
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn threshold(&self) -> Severity {
        self.threshold
    }

    /// Logs `message` at `severity`.
    ///
    /// Fire-and-forget: never panics, never returns an error. A sink that
    /// fails is skipped after a single diagnostic line on stderr, and
    /// dispatch continues with the remaining sinks.
    pub fn log(&self, severity: Severity, message: impl Into<String>) {
        if severity < self.threshold {
            return;
        }
        let record = LogRecord::new(self.name.clone(), severity, message);
        for (formatter, sink) in &self.sinks {
            let line = formatter.format(&record);
            if let Err(e) = sink.write_line(&line) {
                // Best-effort fallback; a broken stderr is not our problem.
                let _ = writeln!(io::stderr(), "({}) log sink error: {e}", self.name);
            }
        }
    }

    /// Flushes every sink. The host invokes this at shutdown.
    ///
    /// # Errors
    ///
    /// Returns the first sink's error; later sinks are still flushed.
    pub fn flush(&self) -> Result<(), SinkError> {
        let mut first_err = None;
        for (_, sink) in &self.sinks {
            if let Err(e) = sink.flush() {
                first_err.get_or_insert(e);
            }
        }
        match first_err {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
