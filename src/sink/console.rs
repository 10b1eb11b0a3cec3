//! Colorized console sink.

use std::io::{self, Write};

use crate::record::LogRecord;
use crate::render::{assemble_line, render};

use super::{LogSink, SinkError, SinkResult};

/// Writes rendered lines to a terminal stream.
///
/// Stateless apart from its color flag and a degraded marker: the first
/// failed write is reported, after which the sink stops attempting writes
/// entirely. A broken stdout must never take the process down with it.
pub struct ConsoleSink {
    writer: Box<dyn Write + Send>,
    use_color: bool,
    degraded: bool,
}

impl ConsoleSink {
    /// Console sink over the standard output stream.
    pub fn stdout(use_color: bool) -> Self {
        Self::with_writer(Box::new(io::stdout()), use_color)
    }

    /// Console sink over an arbitrary writer.
    pub fn with_writer(writer: Box<dyn Write + Send>, use_color: bool) -> Self {
        Self {
            writer,
            use_color,
            degraded: false,
        }
    }

    /// True once a write has failed and the sink has stopped trying.
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }
}

impl LogSink for ConsoleSink {
    fn emit(&mut self, record: &LogRecord) -> SinkResult<()> {
        if self.degraded {
            return Ok(());
        }
        let line = assemble_line(&render(record, self.use_color));
        let outcome = writeln!(self.writer, "{line}").and_then(|()| self.writer.flush());
        if let Err(err) = outcome {
            self.degraded = true;
            return Err(SinkError::Io(err));
        }
        Ok(())
    }

    fn close(&mut self) -> SinkResult<()> {
        if self.degraded {
            return Ok(());
        }
        self.writer.flush().map_err(SinkError::Io)
    }

    fn name(&self) -> &'static str {
        "console"
    }
}
