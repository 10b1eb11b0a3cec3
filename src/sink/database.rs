//! Persistent store sink.

use crate::persist::sqlite::SqliteLogStore;
use crate::record::LogRecord;

use super::{LogSink, SinkResult};

/// Appends raw record fields to the persistent store.
///
/// No rendering happens here: the store receives the record's provenance and
/// message as-is, with the record's own timestamp, so all sinks agree on one
/// instant per event.
pub struct DatabaseSink {
    store: SqliteLogStore,
}

impl DatabaseSink {
    /// Wraps an opened store.
    pub fn new(store: SqliteLogStore) -> Self {
        Self { store }
    }
}

impl LogSink for DatabaseSink {
    fn emit(&mut self, record: &LogRecord) -> SinkResult<()> {
        self.store.insert(
            record.site.file,
            record.site.function,
            record.site.line,
            &record.message,
            record.timestamp,
        )?;
        Ok(())
    }

    fn close(&mut self) -> SinkResult<()> {
        self.store.close()?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "database"
    }
}
