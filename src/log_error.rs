use std::fmt;
use std::io;
use std::path::PathBuf;

/// Fatal initialization failures. The host decides whether to abort or
/// continue console-only.
#[derive(Debug)]
pub enum LogSetupError {
    /// The log directory could not be created; log durability cannot be
    /// guaranteed.
    DirectoryCreationFailed(PathBuf, io::Error),
}

impl fmt::Display for LogSetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogSetupError::DirectoryCreationFailed(path, e) => {
                write!(f, "failed to create log directory {}: {e}", path.display())
            }
        }
    }
}

impl std::error::Error for LogSetupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LogSetupError::DirectoryCreationFailed(_, e) => Some(e),
        }
    }
}

/// Per-write sink failures. Non-fatal: the sink stays in its last-known-good
/// state and subsequent writes may succeed. Never propagated out of
/// `Logger::log`.
#[derive(Debug)]
pub enum SinkError {
    /// Opening the active log file failed.
    OpenFailed(io::Error),
    /// A backup shift or rename during rotation failed; the write that
    /// triggered the rotation is lost but the sink remains retry-able.
    RotationFailed(io::Error),
    /// Writing or flushing the formatted line failed.
    WriteFailed(io::Error),
    /// The sink's internal lock was poisoned: another thread panicked
    /// while holding it. Ordinary sink code never panics under the lock,
    /// so this only happens if a panic unwinds through a write in
    /// progress; later writers then see this error instead of panicking
    /// themselves.
    Poisoned,
}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use SinkError::*;
        match self {
            OpenFailed(e) => write!(f, "failed to open log file: {e}"),
            RotationFailed(e) => write!(f, "log rotation failed: {e}"),
            WriteFailed(e) => write!(f, "log write failed: {e}"),
            Poisoned => write!(f, "sink lock poisoned"),
        }
    }
}

impl std::error::Error for SinkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SinkError::OpenFailed(e) | SinkError::RotationFailed(e) | SinkError::WriteFailed(e) => {
                Some(e)
            }
            SinkError::Poisoned => None,
        }
    }
}
