use std::path::{Path, PathBuf};

use crate::log_level::Severity;

/// Default size threshold for rotation: 10 MiB.
pub const DEFAULT_MAX_BYTES: u64 = 10 * 1024 * 1024;
/// Default number of retained backups.
pub const DEFAULT_BACKUP_COUNT: u32 = 5;
/// Default name of the active log file.
pub const DEFAULT_FILE_NAME: &str = "app.log";

/// Construction-time configuration for the standard file + console logger.
///
/// The host supplies all of this once, before first use; there is no
/// runtime reconfiguration. Only the log directory is mandatory.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Directory holding the active file and its backup chain. Created on
    /// initialization if absent.
    pub log_directory: PathBuf,
    /// Name of the active log file inside `log_directory`.
    pub file_name: String,
    /// Size threshold that triggers rotation. Zero disables rotation.
    pub max_bytes: u64,
    /// How many rotated backups to retain.
    pub backup_count: u32,
    /// Minimum severity; records below it are dropped.
    pub min_severity: Severity,
}

impl LogConfig {
    /// Configuration with the defaults: `app.log`, 10 MiB, 5 backups, INFO.
    #[must_use]
    pub fn new(log_directory: impl AsRef<Path>) -> Self {
        Self {
            log_directory: log_directory.as_ref().to_path_buf(),
            file_name: DEFAULT_FILE_NAME.to_string(),
            max_bytes: DEFAULT_MAX_BYTES,
            backup_count: DEFAULT_BACKUP_COUNT,
            min_severity: Severity::Info,
        }
    }

    #[must_use]
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    #[must_use]
    pub fn with_max_bytes(mut self, max_bytes: u64) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    #[must_use]
    pub fn with_backup_count(mut self, backup_count: u32) -> Self {
        self.backup_count = backup_count;
        self
    }

    #[must_use]
    pub fn with_min_severity(mut self, min_severity: Severity) -> Self {
        self.min_severity = min_severity;
        self
    }
}
