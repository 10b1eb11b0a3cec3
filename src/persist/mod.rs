pub mod sqlite;

#[derive(Debug)]
pub enum StoreError {
    /// The backing database could not be opened or initialized. Fatal at
    /// startup: the persistent sink cannot function without it.
    Unavailable(rusqlite::Error),
    /// A single insert failed. Recoverable; the emitting caller is never
    /// broken by it.
    Write(rusqlite::Error),
    /// The store was used after `close()`.
    Closed,
}

pub type StoreResult<T> = Result<T, StoreError>;
