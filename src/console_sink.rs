use std::io::{self, Write};

use crate::log_error::SinkError;
use crate::log_sink::LogSink;

/// Sink that writes each line straight to the process's standard output.
///
/// Unbuffered passthrough: every line is written and flushed immediately,
/// leaving only the platform's own stream buffering. No rotation, no
/// persistent state.
#[derive(Debug)]
pub struct ConsoleSink {
    out: io::Stdout,
}

impl ConsoleSink {
    #[must_use]
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LogSink for ConsoleSink {
    fn write_line(&self, line: &str) -> Result<(), SinkError> {
        // The stdout lock makes the line + newline a single critical section.
        let mut handle = self.out.lock();
        writeln!(handle, "{line}").map_err(SinkError::WriteFailed)?;
        handle.flush().map_err(SinkError::WriteFailed)
    }
}
