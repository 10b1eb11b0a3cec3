//! Shared severity enum and ordering.

use serde::{Deserialize, Serialize};

/// Severity of a log event, totally ordered by increasing urgency.
///
/// The derived [`Ord`] follows declaration order, so
/// `Severity::Debug < Severity::Info < .. < Severity::Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    /// Fine-grained diagnostic detail.
    Debug,
    /// Coarse progress of the application.
    Info,
    /// Potentially harmful situations.
    Warning,
    /// Failures that still allow the application to continue.
    Error,
    /// Failures after which the application may not continue.
    Critical,
}

impl Severity {
    /// Fixed uppercase name used in rendered output and configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Critical => "CRITICAL",
        }
    }
}
