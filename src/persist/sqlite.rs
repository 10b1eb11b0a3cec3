//! SQLite-backed persistent log store.

use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::{Connection, params};

use super::{StoreError, StoreResult};

/// Append-only store for raw log rows in a fixed `LOGS` table.
///
/// Owns the connection for its whole lifecycle: opened once at startup,
/// table created if absent, every insert autocommitted, released by
/// [`close`](Self::close). Not a query engine; readers go straight to the
/// database file.
pub struct SqliteLogStore {
    conn: Option<Connection>,
}

impl SqliteLogStore {
    /// Opens or creates the backing database at `path`.
    ///
    /// Creates the `LOGS` table if missing, enables WAL mode and sets
    /// `synchronous=NORMAL`.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let conn = Connection::open(path).map_err(StoreError::Unavailable)?;
        Self::init_connection(conn)
    }

    /// Opens an in-memory store.
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory().map_err(StoreError::Unavailable)?;
        Self::init_connection(conn)
    }

    fn init_connection(conn: Connection) -> StoreResult<Self> {
        conn.execute_batch(include_str!("schema.sql"))
            .map_err(StoreError::Unavailable)?;
        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(StoreError::Unavailable)?;
        conn.pragma_update(None, "synchronous", "NORMAL")
            .map_err(StoreError::Unavailable)?;
        Ok(Self { conn: Some(conn) })
    }

    /// Appends one row.
    pub fn insert(
        &mut self,
        file_name: &str,
        function_name: &str,
        line_number: u32,
        message: &str,
        timestamp: DateTime<Utc>,
    ) -> StoreResult<()> {
        let conn = self.conn.as_ref().ok_or(StoreError::Closed)?;
        let mut stmt = conn
            .prepare_cached(
                "INSERT INTO LOGS (FILE_NAME, FUNCTION_NAME, FILE_NO, MESSAGE, LOAD_TIME) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )
            .map_err(StoreError::Write)?;
        stmt.execute(params![
            file_name,
            function_name,
            i64::from(line_number),
            message,
            timestamp,
        ])
        .map_err(StoreError::Write)?;
        Ok(())
    }

    /// True until [`close`](Self::close) has run.
    pub fn is_open(&self) -> bool {
        self.conn.is_some()
    }

    /// Checkpoints and releases the connection.
    ///
    /// Idempotent: a second call is a no-op. The handle is released on every
    /// path, including when the checkpoint or close itself fails.
    pub fn close(&mut self) -> StoreResult<()> {
        let Some(conn) = self.conn.take() else {
            return Ok(());
        };
        let _ = conn.execute_batch("PRAGMA wal_checkpoint(PASSIVE);");
        conn.close().map_err(|(_, err)| StoreError::Write(err))
    }
}
