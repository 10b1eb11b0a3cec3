//! Fan-out dispatcher owning the sinks and the severity threshold.

use std::io;

use crate::config::LogConfig;
use crate::persist::StoreError;
use crate::persist::sqlite::SqliteLogStore;
use crate::record::{CallSite, LogRecord};
use crate::sink::console::ConsoleSink;
use crate::sink::database::DatabaseSink;
use crate::sink::file::RotatingFileSink;
use crate::sink::{LogSink, SinkError};
use crate::types::Severity;

#[derive(Debug)]
pub enum SetupError {
    /// The persistent store could not be opened. Fatal: the primary sink
    /// cannot function.
    Store(StoreError),
    /// The active log file could not be opened.
    File(io::Error),
}

impl From<StoreError> for SetupError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<io::Error> for SetupError {
    fn from(value: io::Error) -> Self {
        Self::File(value)
    }
}

/// One logical logging channel: a named set of sinks behind a severity
/// threshold.
///
/// Below-threshold emits return before a record is even constructed. At or
/// above it, one record is built and forwarded to every attached sink in
/// attachment order; a failing sink is reported to stderr and never blocks
/// the remaining sinks, and no sink failure ever reaches the emitting
/// caller.
///
/// The dispatcher has a single logical owner. All sinks are `Send`, so
/// concurrent emitters can share one behind a `Mutex`, which serializes the
/// full fan-out and keeps per-sink ordering deterministic.
pub struct Dispatcher {
    name: String,
    threshold: Severity,
    sinks: Vec<Box<dyn LogSink>>,
    closed: bool,
}

impl Dispatcher {
    /// Empty dispatcher with the given channel name and threshold.
    pub fn new(name: impl Into<String>, threshold: Severity) -> Self {
        Self {
            name: name.into(),
            threshold,
            sinks: Vec::new(),
            closed: false,
        }
    }

    /// Builds the standard console + rotating file + database pipeline.
    ///
    /// This is the process-startup hook: a store or file that cannot be
    /// opened aborts initialization.
    pub fn from_config(name: impl Into<String>, config: &LogConfig) -> Result<Self, SetupError> {
        let store = SqliteLogStore::open(&config.db_path)?;
        let file = RotatingFileSink::open(&config.file_path, config.max_bytes, config.backup_count)?;

        let mut dispatcher = Self::new(name, config.min_severity);
        dispatcher.attach(Box::new(ConsoleSink::stdout(config.use_color)));
        dispatcher.attach(Box::new(file));
        dispatcher.attach(Box::new(DatabaseSink::new(store)));
        Ok(dispatcher)
    }

    /// Channel name, used in diagnostics.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Minimum severity forwarded to sinks.
    pub fn threshold(&self) -> Severity {
        self.threshold
    }

    /// True once [`shutdown`](Self::shutdown) has run.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Adds a sink. No de-duplication; attachment order is invocation order.
    pub fn attach(&mut self, sink: Box<dyn LogSink>) {
        self.sinks.push(sink);
    }

    /// Emits one event.
    ///
    /// Fire-and-forget from the caller's perspective: sink failures are
    /// reported to stderr, never returned or panicked.
    pub fn log(&mut self, severity: Severity, message: impl Into<String>, site: CallSite) {
        if self.closed || severity < self.threshold {
            return;
        }

        let record = LogRecord::new(severity, message, site);
        for sink in &mut self.sinks {
            if let Err(err) = sink.emit(&record) {
                eprintln!("({}) {} sink failed: {err:?}", self.name, sink.name());
            }
        }
    }

    /// Closes every sink in attachment order, collecting failures.
    ///
    /// Failures are reported to stderr and returned, never propagated as
    /// errors. Idempotent: after the first call the dispatcher is closed,
    /// further emits are no-ops, and a second shutdown touches nothing.
    pub fn shutdown(&mut self) -> Vec<(&'static str, SinkError)> {
        if self.closed {
            return Vec::new();
        }
        self.closed = true;

        let mut failures = Vec::new();
        for sink in &mut self.sinks {
            if let Err(err) = sink.close() {
                eprintln!(
                    "({}) {} sink failed to close: {err:?}",
                    self.name,
                    sink.name()
                );
                failures.push((sink.name(), err));
            }
        }
        failures
    }
}
