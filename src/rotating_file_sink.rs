use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::log_error::{LogSetupError, SinkError};
use crate::log_sink::LogSink;

/// Mutable part of the sink, guarded by one lock so the check-rotate-write
/// sequence is a single critical section.
#[derive(Debug, Default)]
struct FileState {
    /// Active handle; `None` until the first write (lazy open) and briefly
    /// during rotation.
    file: Option<File>,
    /// Size of the active file. Seeded from the file's length on open,
    /// incremented per write, reset on rotation.
    bytes_written: u64,
}

/// Sink that appends to a log file and rotates it by size.
///
/// The backup chain is `path`, `path.1` (newest backup) … `path.N`
/// (oldest retained) with `N = backup_count`. Once the active file would
/// grow past `max_bytes`, the chain shifts by one, `path` becomes
/// `path.1`, and a fresh `path` is started. The size of the *current*
/// file is the only rotation trigger; `max_bytes == 0` disables rotation
/// and the file grows without bound.
#[derive(Debug)]
pub struct RotatingFileSink {
    path: PathBuf,
    max_bytes: u64,
    backup_count: u32,
    state: Mutex<FileState>,
}

impl RotatingFileSink {
    /// Creates the sink and its log directory.
    ///
    /// Directory creation is idempotent: a pre-existing directory is not
    /// an error, and an existing log file is never truncated (it is
    /// appended to and counts towards the size threshold). The file
    /// itself opens lazily on the first write.
    ///
    /// # Errors
    ///
    /// Returns [`LogSetupError::DirectoryCreationFailed`] when the
    /// directory cannot be created; the facility cannot guarantee log
    /// durability in that case and the host must decide how to proceed.
    pub fn new(
        directory: impl AsRef<Path>,
        file_name: &str,
        max_bytes: u64,
        backup_count: u32,
    ) -> Result<Self, LogSetupError> {
        let dir = directory.as_ref();
        fs::create_dir_all(dir)
            .map_err(|e| LogSetupError::DirectoryCreationFailed(dir.to_path_buf(), e))?;
        Ok(Self {
            path: dir.join(file_name),
            max_bytes,
            backup_count,
            state: Mutex::new(FileState::default()),
        })
    }

    /// Path of the active log file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `path.k`, e.g. `app.log.3`.
    fn backup_path(&self, k: u32) -> PathBuf {
        let mut os = self.path.clone().into_os_string();
        os.push(format!(".{k}"));
        PathBuf::from(os)
    }

    fn ensure_open(&self, state: &mut FileState) -> Result<(), SinkError> {
        if state.file.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)
                .map_err(SinkError::OpenFailed)?;
            // Pick up where a previous run left off so the policy still
            // bounds the file across restarts.
            state.bytes_written = file.metadata().map_err(SinkError::OpenFailed)?.len();
            state.file = Some(file);
        }
        Ok(())
    }

    /// Shifts the backup chain and starts a fresh active file.
    ///
    /// On failure the sink is left on the old file (re-opened if the close
    /// already happened): retry-able, never a half-state.
    fn rotate(&self, state: &mut FileState) -> Result<(), SinkError> {
        if self.backup_count > 0 {
            // Shift the chain; renaming over path.N discards the oldest.
            for k in (1..self.backup_count).rev() {
                let from = self.backup_path(k);
                if from.exists() {
                    fs::rename(&from, self.backup_path(k + 1))
                        .map_err(SinkError::RotationFailed)?;
                }
            }
            // Close before the final rename; some platforms refuse to
            // move an open file.
            state.file = None;
            if let Err(e) = fs::rename(&self.path, self.backup_path(1)) {
                state.file = OpenOptions::new().append(true).open(&self.path).ok();
                return Err(SinkError::RotationFailed(e));
            }
        } else {
            // No chain to keep: the active file is simply restarted.
            state.file = None;
        }
        let fresh = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)
            .map_err(SinkError::OpenFailed)?;
        state.file = Some(fresh);
        state.bytes_written = 0;
        Ok(())
    }
}

impl LogSink for RotatingFileSink {
    fn write_line(&self, line: &str) -> Result<(), SinkError> {
        let mut state = self.state.lock().map_err(|_| SinkError::Poisoned)?;
        self.ensure_open(&mut state)?;

        let mut encoded = Vec::with_capacity(line.len() + 1);
        encoded.extend_from_slice(line.as_bytes());
        encoded.push(b'\n');
        let len = encoded.len() as u64;

        // A single oversized line still goes into the current file whole;
        // the guard on bytes_written means the *next* write rotates.
        if self.max_bytes > 0
            && state.bytes_written + len > self.max_bytes
            && state.bytes_written > 0
        {
            self.rotate(&mut state)?;
        }

        match state.file.as_mut() {
            Some(file) => {
                file.write_all(&encoded).map_err(SinkError::WriteFailed)?;
                state.bytes_written += len;
                Ok(())
            }
            None => Err(SinkError::WriteFailed(io::Error::other(
                "no active log file",
            ))),
        }
    }

    fn flush(&self) -> Result<(), SinkError> {
        let mut state = self.state.lock().map_err(|_| SinkError::Poisoned)?;
        if let Some(file) = state.file.as_mut() {
            file.flush().map_err(SinkError::WriteFailed)?;
        }
        Ok(())
    }
}
