#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;

use fanlog::{LineFormatter, LogConfig, LogSink, Logger, RotatingFileSink, Severity, SinkError};
use tempfile::tempdir;

/// A payload whose encoded form (payload + newline) is exactly `len` bytes,
/// starting with a fixed recognizable prefix.
fn sized_line(prefix: &str, len: usize) -> String {
    let mut s = String::from(prefix);
    while s.len() < len - 1 {
        s.push('x');
    }
    s
}

#[test]
fn three_sixty_byte_lines_at_max_hundred_shift_the_chain() {
    let dir = tempdir().unwrap();
    let sink = RotatingFileSink::new(dir.path(), "app.log", 100, 2).unwrap();

    let line1 = sized_line("L1:", 60);
    let line2 = sized_line("L2:", 60);
    let line3 = sized_line("L3:", 60);

    // 60 bytes total: below threshold, no rotation yet.
    sink.write_line(&line1).unwrap();
    assert!(!dir.path().join("app.log.1").exists());

    // 60 + 60 would exceed 100: rotate first, then write line 2.
    sink.write_line(&line2).unwrap();
    assert_eq!(
        fs::read_to_string(dir.path().join("app.log.1")).unwrap(),
        format!("{line1}\n")
    );

    // Same again: the chain shifts by one.
    sink.write_line(&line3).unwrap();

    assert_eq!(
        fs::read_to_string(dir.path().join("app.log")).unwrap(),
        format!("{line3}\n")
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("app.log.1")).unwrap(),
        format!("{line2}\n")
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("app.log.2")).unwrap(),
        format!("{line1}\n")
    );
    assert!(!dir.path().join("app.log.3").exists());
}

#[test]
fn retention_is_bounded_after_more_rotations_than_backups() {
    let dir = tempdir().unwrap();
    let sink = RotatingFileSink::new(dir.path(), "app.log", 10, 2).unwrap();

    // Every 10-byte line after the first forces a rotation: 5 rotations
    // total, which is backup_count + 3.
    for i in 1..=6 {
        sink.write_line(&sized_line(&format!("{i}:"), 10)).unwrap();
    }

    assert_eq!(
        fs::read_to_string(dir.path().join("app.log")).unwrap(),
        format!("{}\n", sized_line("6:", 10))
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("app.log.1")).unwrap(),
        format!("{}\n", sized_line("5:", 10))
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("app.log.2")).unwrap(),
        format!("{}\n", sized_line("4:", 10))
    );
    // Nothing older than the second backup survives.
    assert!(!dir.path().join("app.log.3").exists());
    assert!(!dir.path().join("app.log.4").exists());
}

#[test]
fn failed_rotation_keeps_the_old_file_and_stays_retryable() {
    let dir = tempdir().unwrap();
    let sink = RotatingFileSink::new(dir.path(), "app.log", 100, 1).unwrap();

    let line1 = sized_line("L1:", 60);
    let line2 = sized_line("L2:", 60);
    sink.write_line(&line1).unwrap();

    // A non-empty directory squatting on app.log.1 blocks the
    // app.log -> app.log.1 rename.
    let squatter = dir.path().join("app.log.1");
    fs::create_dir(&squatter).unwrap();
    fs::write(squatter.join("occupied"), "x").unwrap();

    let err = sink.write_line(&line2).unwrap_err();
    assert!(matches!(err, SinkError::RotationFailed(_)), "got: {err}");
    // The write that triggered the rotation is lost, but the old file is
    // untouched and the sink is back on it.
    assert_eq!(
        fs::read_to_string(dir.path().join("app.log")).unwrap(),
        format!("{line1}\n")
    );

    // Unblock and retry: the same write now rotates and lands.
    fs::remove_dir_all(&squatter).unwrap();
    sink.write_line(&line2).unwrap();
    assert_eq!(
        fs::read_to_string(dir.path().join("app.log")).unwrap(),
        format!("{line2}\n")
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("app.log.1")).unwrap(),
        format!("{line1}\n")
    );
}

#[test]
fn bootstrap_is_idempotent_and_never_truncates() {
    let dir = tempdir().unwrap();
    let logs = dir.path().join("logs");

    let first = RotatingFileSink::new(&logs, "app.log", 1024, 3).unwrap();
    first.write_line("from the first run").unwrap();
    first.flush().unwrap();
    drop(first);

    // Initializing again against the same directory must not fail and
    // must leave the existing log intact.
    let second = RotatingFileSink::new(&logs, "app.log", 1024, 3).unwrap();
    second.write_line("from the second run").unwrap();
    second.flush().unwrap();

    let content = fs::read_to_string(logs.join("app.log")).unwrap();
    assert_eq!(content, "from the first run\nfrom the second run\n");
}

#[test]
fn below_threshold_records_never_touch_the_filesystem() {
    let dir = tempdir().unwrap();
    let config = LogConfig::new(dir.path()).with_min_severity(Severity::Warning);
    let logger = Logger::from_config("panel", &config).unwrap();

    logger.log(Severity::Debug, "invisible");
    logger.log(Severity::Info, "also invisible");

    // The file sink opens lazily, so a fully filtered logger never even
    // creates the file.
    assert!(!dir.path().join("app.log").exists());

    logger.log(Severity::Error, "visible");
    logger.flush().unwrap();
    let content = fs::read_to_string(dir.path().join("app.log")).unwrap();
    assert!(content.contains(" - panel - ERROR - visible"));
    assert!(!content.contains("invisible"));
}

#[test]
fn from_config_wires_file_template_and_defaults() {
    let dir = tempdir().unwrap();
    let config = LogConfig::new(dir.path()).with_file_name("panel.log");
    assert_eq!(config.max_bytes, 10 * 1024 * 1024);
    assert_eq!(config.backup_count, 5);

    let logger = Logger::from_config("panel", &config).unwrap();
    assert_eq!(logger.threshold(), Severity::Info);
    logger.log(Severity::Info, "up and running");
    logger.flush().unwrap();

    let content = fs::read_to_string(dir.path().join("panel.log")).unwrap();
    let line = content.lines().next().unwrap();
    // <timestamp> - <name> - <SEVERITY> - <message>
    let fields: Vec<&str> = line.splitn(4, " - ").collect();
    assert_eq!(fields.len(), 4);
    assert_eq!(fields[1], "panel");
    assert_eq!(fields[2], "INFO");
    assert_eq!(fields[3], "up and running");
}

#[test]
fn leveled_macros_format_and_dispatch() {
    let dir = tempdir().unwrap();
    let sink = RotatingFileSink::new(dir.path(), "app.log", 4096, 1).unwrap();
    let mut logger = Logger::new("panel", Severity::Info);
    logger.add_sink(LineFormatter::file(), Box::new(sink));

    fanlog::logger_debug!(&logger, "filtered {}", 0);
    fanlog::logger_warning!(&logger, "retries = {}", 3);
    fanlog::logger_critical!(&logger, "giving up");
    logger.flush().unwrap();

    let content = fs::read_to_string(dir.path().join("app.log")).unwrap();
    assert!(!content.contains("filtered"));
    assert!(content.contains(" - panel - WARNING - retries = 3"));
    assert!(content.contains(" - panel - CRITICAL - giving up"));
}

#[test]
fn concurrent_writers_never_corrupt_the_chain() {
    use std::sync::Arc;
    use std::thread;

    let dir = tempdir().unwrap();
    let sink = Arc::new(RotatingFileSink::new(dir.path(), "app.log", 200, 3).unwrap());

    let mut handles = Vec::new();
    for t in 0..4 {
        let sink = Arc::clone(&sink);
        handles.push(thread::spawn(move || {
            for i in 0..50 {
                sink.write_line(&format!("t{t} line {i:03}")).unwrap();
            }
        }));
    }
    for h in handles {
        h.join().unwrap();
    }
    sink.flush().unwrap();

    // Every surviving file holds whole lines, and the chain never grows
    // past backup_count.
    assert!(!dir.path().join("app.log.4").exists());
    for name in ["app.log", "app.log.1", "app.log.2", "app.log.3"] {
        let path = dir.path().join(name);
        if path.exists() {
            let content = fs::read_to_string(&path).unwrap();
            for line in content.lines() {
                assert!(line.starts_with('t'), "torn line in {name}: {line:?}");
            }
        }
    }
}
