//! Normalized log event and emit-site provenance.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::types::Severity;

/// Provenance of an emit site, captured where the log call happens.
///
/// The [`call_site!`](crate::call_site) macro fills `file` and `line` from
/// `file!()` and `line!()`, and `function` from `module_path!()`. Callers
/// that hold a more precise function name can build a `CallSite` directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CallSite {
    /// Source file the event was emitted from.
    pub file: &'static str,
    /// Function (or module path) the event was emitted from.
    pub function: &'static str,
    /// Line number of the emit call.
    pub line: u32,
}

/// One normalized log event.
///
/// Constructed once per emit by the dispatcher; every sink receives the same
/// record by reference and none may mutate it. The timestamp is read exactly
/// once, at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogRecord {
    /// Event severity.
    pub severity: Severity,
    /// Message text, with any interpolation already resolved by the caller.
    pub message: String,
    /// Emit-site provenance.
    pub site: CallSite,
    /// Wall-clock instant of emission.
    pub timestamp: DateTime<Utc>,
}

impl LogRecord {
    /// Builds a record at the current instant.
    ///
    /// Pure constructor apart from the single clock read; inputs are taken
    /// as given and never validated.
    pub fn new(severity: Severity, message: impl Into<String>, site: CallSite) -> Self {
        Self {
            severity,
            message: message.into(),
            site,
            timestamp: Utc::now(),
        }
    }
}
