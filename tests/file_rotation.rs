use std::path::{Path, PathBuf};

use tempfile::TempDir;

use fanlog::{
    record::{CallSite, LogRecord},
    sink::{LogSink, file::RotatingFileSink},
    types::Severity,
};

fn site() -> CallSite {
    CallSite {
        file: "r.rs",
        function: "t",
        line: 1,
    }
}

// With this site, a rendered line is 43 bytes plus the message.
fn record(i: u32) -> LogRecord {
    LogRecord::new(Severity::Info, format!("{i:032}"), site())
}

fn backup(path: &Path, n: usize) -> PathBuf {
    PathBuf::from(format!("{}.{}", path.display(), n))
}

fn read(path: &Path) -> String {
    std::fs::read_to_string(path).expect("read log file")
}

#[test]
fn rotation_triggers_past_max_bytes_and_bounds_backups() {
    let tmp = TempDir::new().expect("tmp");
    let path = tmp.path().join("app.log");
    // Each line is 75 bytes, so every second write pushes past the limit.
    let mut sink = RotatingFileSink::open(&path, 100, 2).expect("open");

    for i in 1..=5 {
        sink.emit(&record(i)).expect("emit");
    }
    sink.close().expect("close");

    let active = read(&path);
    assert!(active.contains(&format!("{:032}", 5)));
    assert_eq!(active.lines().count(), 1);

    let first = read(&backup(&path, 1));
    assert!(first.contains(&format!("{:032}", 4)));
    let second = read(&backup(&path, 2));
    assert!(second.contains(&format!("{:032}", 3)));

    // History beyond backup_count is permanently discarded.
    assert!(!backup(&path, 3).exists());
}

#[test]
fn zero_max_bytes_never_rotates() {
    let tmp = TempDir::new().expect("tmp");
    let path = tmp.path().join("app.log");
    let mut sink = RotatingFileSink::open(&path, 0, 2).expect("open");

    for i in 1..=20 {
        sink.emit(&record(i)).expect("emit");
    }
    sink.close().expect("close");

    assert_eq!(read(&path).lines().count(), 20);
    assert!(!backup(&path, 1).exists());
}

#[test]
fn zero_backup_count_truncates_instead_of_archiving() {
    let tmp = TempDir::new().expect("tmp");
    let path = tmp.path().join("app.log");
    let mut sink = RotatingFileSink::open(&path, 100, 0).expect("open");

    for i in 1..=3 {
        sink.emit(&record(i)).expect("emit");
    }
    sink.close().expect("close");

    let active = read(&path);
    assert!(active.contains(&format!("{:032}", 3)));
    assert!(!backup(&path, 1).exists());
}

#[test]
fn oversized_record_rotates_once_then_lands_whole() {
    let tmp = TempDir::new().expect("tmp");
    let path = tmp.path().join("app.log");
    let mut sink = RotatingFileSink::open(&path, 100, 2).expect("open");

    sink.emit(&record(1)).expect("emit");
    let big = LogRecord::new(Severity::Info, "x".repeat(300), site());
    sink.emit(&big).expect("emit oversized");
    sink.close().expect("close");

    let active = read(&path);
    assert!(active.contains(&"x".repeat(300)));
    assert_eq!(active.lines().count(), 1);
    assert!(read(&backup(&path, 1)).contains(&format!("{:032}", 1)));
}

#[test]
fn reopening_resumes_byte_accounting_from_disk() {
    let tmp = TempDir::new().expect("tmp");
    let path = tmp.path().join("app.log");

    let mut sink = RotatingFileSink::open(&path, 0, 0).expect("open");
    sink.emit(&record(1)).expect("emit");
    sink.close().expect("close");
    drop(sink);

    let on_disk = std::fs::metadata(&path).expect("metadata").len();
    let reopened = RotatingFileSink::open(&path, 0, 0).expect("reopen");
    assert_eq!(reopened.written(), on_disk);
}
