//! Recognized configuration surface and defaults.

use serde::{Deserialize, Serialize};

use crate::types::Severity;

/// Options recognized when building a dispatcher from configuration.
///
/// Every field has a default, so partial JSON documents are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Whether the console sink decorates output with ANSI color.
    pub use_color: bool,
    /// Rotation threshold for the file sink, in bytes. Zero disables
    /// rotation. Default: 1 MiB.
    pub max_bytes: u64,
    /// Number of rotated backups retained. Zero truncates on rotation
    /// instead of archiving. Default: 5.
    pub backup_count: usize,
    /// Path of the SQLite log database. Default: `logging.db`.
    pub db_path: String,
    /// Path of the active log file. Default: `app.log`.
    pub file_path: String,
    /// Minimum severity forwarded to sinks. Default: `DEBUG`.
    pub min_severity: Severity,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            use_color: true,
            max_bytes: 1_048_576,
            backup_count: 5,
            db_path: "logging.db".to_string(),
            file_path: "app.log".to_string(),
            min_severity: Severity::Debug,
        }
    }
}

impl LogConfig {
    /// Parses a configuration document from JSON text.
    ///
    /// Unknown keys are ignored; missing keys take their defaults.
    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let cfg = LogConfig::default();
        assert!(cfg.use_color);
        assert_eq!(cfg.max_bytes, 1_048_576);
        assert_eq!(cfg.backup_count, 5);
        assert_eq!(cfg.min_severity, Severity::Debug);
    }

    #[test]
    fn partial_json_fills_remaining_defaults() {
        let cfg = LogConfig::from_json_str(
            r#"{"min_severity": "WARNING", "max_bytes": 100, "use_color": false}"#,
        )
        .expect("parse");
        assert_eq!(cfg.min_severity, Severity::Warning);
        assert_eq!(cfg.max_bytes, 100);
        assert!(!cfg.use_color);
        assert_eq!(cfg.backup_count, 5);
        assert_eq!(cfg.file_path, "app.log");
    }
}
