//! Size-bounded rotating file sink.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;

use crate::record::LogRecord;
use crate::render::{assemble_line, render};

use super::{LogSink, SinkError, SinkResult};

/// Appends plain rendered lines to a file, rotating on size.
///
/// Rotation is purely size-triggered: when the active file plus the pending
/// line would exceed `max_bytes`, backups shift `file.N -> file.N+1` (the
/// one past `backup_count` is discarded), the active file becomes `file.1`,
/// and a fresh file is opened at the original path.
///
/// `max_bytes == 0` disables rotation; `backup_count == 0` truncates the
/// active file on rotation instead of archiving it. A failed backup shift is
/// reported as [`SinkError::Rotation`] but the pending line is still written,
/// so the active file grows past the threshold rather than dropping records.
pub struct RotatingFileSink {
    path: PathBuf,
    file: Option<File>,
    written: u64,
    max_bytes: u64,
    backup_count: usize,
}

impl RotatingFileSink {
    /// Opens (or creates) the active file in append mode.
    pub fn open(
        path: impl Into<PathBuf>,
        max_bytes: u64,
        backup_count: usize,
    ) -> io::Result<Self> {
        let path = path.into();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let written = file.metadata()?.len();
        Ok(Self {
            path,
            file: Some(file),
            written,
            max_bytes,
            backup_count,
        })
    }

    /// Bytes currently in the active file.
    pub fn written(&self) -> u64 {
        self.written
    }

    fn backup_path(&self, n: usize) -> PathBuf {
        PathBuf::from(format!("{}.{}", self.path.display(), n))
    }

    fn should_rotate(&self, pending: u64) -> bool {
        self.max_bytes > 0 && self.written > 0 && self.written + pending > self.max_bytes
    }

    fn rotate(&mut self) -> io::Result<()> {
        // Drop the handle before renaming; Windows refuses to move open files.
        self.file = None;

        if self.backup_count > 0 {
            let oldest = self.backup_path(self.backup_count);
            if oldest.exists() {
                fs::remove_file(&oldest)?;
            }
            for n in (1..self.backup_count).rev() {
                let src = self.backup_path(n);
                if src.exists() {
                    fs::rename(&src, self.backup_path(n + 1))?;
                }
            }
            fs::rename(&self.path, self.backup_path(1))?;
        } else {
            fs::remove_file(&self.path)?;
        }

        self.reopen()
    }

    fn reopen(&mut self) -> io::Result<()> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        self.written = file.metadata()?.len();
        self.file = Some(file);
        Ok(())
    }
}

impl LogSink for RotatingFileSink {
    fn emit(&mut self, record: &LogRecord) -> SinkResult<()> {
        let mut line = assemble_line(&render(record, false));
        line.push('\n');
        let pending = line.len() as u64;

        let mut rotation_failure = None;
        if self.should_rotate(pending) {
            if let Err(err) = self.rotate() {
                rotation_failure = Some(err);
                if self.file.is_none() {
                    // Keep writing to whatever is at the active path.
                    self.reopen().map_err(SinkError::Io)?;
                }
            }
        }

        let file = self
            .file
            .as_mut()
            .ok_or_else(|| SinkError::Io(io::Error::other("file sink closed")))?;
        file.write_all(line.as_bytes()).map_err(SinkError::Io)?;
        self.written += pending;

        match rotation_failure {
            Some(err) => Err(SinkError::Rotation(err)),
            None => Ok(()),
        }
    }

    fn close(&mut self) -> SinkResult<()> {
        if let Some(mut file) = self.file.take() {
            file.flush().map_err(SinkError::Io)?;
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "file"
    }
}
