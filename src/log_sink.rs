use crate::log_error::SinkError;

/// A destination that accepts formatted log lines.
///
/// Implementations append their own line terminator. `write_line` is
/// called concurrently from any thread holding a reference to the logger,
/// so each implementation guards its own critical section.
pub trait LogSink: Send + Sync {
    /// Appends `line` plus a newline to the destination.
    ///
    /// # Errors
    ///
    /// Returns a [`SinkError`] when the destination rejects the write.
    /// The logger isolates such failures per sink; they never reach the
    /// logging call site.
    fn write_line(&self, line: &str) -> Result<(), SinkError>;

    /// Flushes buffered output, if any. Invoked by the host through
    /// `Logger::flush` at shutdown.
    ///
    /// # Errors
    ///
    /// Returns a [`SinkError`] when flushing fails.
    fn flush(&self) -> Result<(), SinkError> {
        Ok(())
    }
}
