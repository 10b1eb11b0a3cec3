pub mod console;
pub mod database;
pub mod file;

use crate::persist::StoreError;
use crate::record::LogRecord;

#[derive(Debug)]
pub enum SinkError {
    /// A console or file write failed.
    Io(std::io::Error),
    /// A backup shift failed during rotation. The pending line was still
    /// written, so the active file grows past its threshold instead of
    /// losing data.
    Rotation(std::io::Error),
    /// The persistent store rejected an insert.
    Store(StoreError),
}

impl From<std::io::Error> for SinkError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<StoreError> for SinkError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

pub type SinkResult<T> = Result<T, SinkError>;

/// A destination that durably or visibly surfaces log records.
///
/// Implementations own whatever mutable state their destination needs (file
/// offset, database connection) and are driven from a single dispatcher, so
/// `emit` takes `&mut self`. Errors are returned, never panicked, and the
/// dispatcher contains them.
pub trait LogSink: Send {
    /// Delivers one record to the destination.
    fn emit(&mut self, record: &LogRecord) -> SinkResult<()>;

    /// Flushes and releases the destination's resources.
    fn close(&mut self) -> SinkResult<()> {
        Ok(())
    }

    /// Stable label used in dispatcher diagnostics.
    fn name(&self) -> &'static str;
}
