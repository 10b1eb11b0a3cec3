//! Multi-sink structured log dispatch.
//!
//! One emitted event becomes one immutable [`record::LogRecord`], which a
//! [`dispatch::Dispatcher`] fans out to every attached sink: a colorized
//! console stream, a size-bounded rotating file, and a persistent SQLite
//! store. Each sink renders or persists independently and a failure in one
//! never blocks the others, nor the emitting caller.
//!
//! # Examples
//!
//! In-memory usage with an explicit sink set:
//! ```
//! use fanlog::dispatch::Dispatcher;
//! use fanlog::persist::sqlite::SqliteLogStore;
//! use fanlog::sink::database::DatabaseSink;
//! use fanlog::types::Severity;
//!
//! let store = SqliteLogStore::open_in_memory().expect("open store");
//! let mut dispatcher = Dispatcher::new("app", Severity::Info);
//! dispatcher.attach(Box::new(DatabaseSink::new(store)));
//!
//! fanlog::log_info!(dispatcher, "started with {} workers", 4);
//! fanlog::log_debug!(dispatcher, "below threshold, never emitted");
//!
//! let failures = dispatcher.shutdown();
//! assert!(failures.is_empty());
//! ```
//!
//! The full pipeline from configuration:
//! ```no_run
//! use fanlog::config::LogConfig;
//! use fanlog::dispatch::Dispatcher;
//!
//! let config = LogConfig::from_json_str(
//!     r#"{"min_severity": "INFO", "file_path": "app.log", "db_path": "logging.db"}"#,
//! )
//! .expect("config");
//! let mut dispatcher = Dispatcher::from_config("app", &config).expect("startup");
//! fanlog::log_warning!(dispatcher, "disk nearly full");
//! dispatcher.shutdown();
//! ```

/// Configuration surface and defaults.
pub mod config;
/// Fan-out dispatcher and startup wiring.
pub mod dispatch;
/// Emit-site capture and leveled dispatch macros.
pub mod macros;
/// Persistent store error taxonomy and SQLite implementation.
pub mod persist;
/// Normalized log event and provenance.
pub mod record;
/// Per-field colorization and line assembly.
pub mod render;
/// Sink trait and the console, file, and database variants.
pub mod sink;
/// Shared severity type.
pub mod types;
