//! Per-field colorization and console line assembly.

use std::path::Path;

use colored::{Color, Colorize};

use crate::record::LogRecord;
use crate::types::Severity;

/// Timestamp pattern shared by every human-readable sink.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Width the level name is padded to, before any decoration.
pub const LEVEL_WIDTH: usize = 7;

/// Separately rendered representations of one record's fields.
///
/// Each field is a finished string: decorated with ANSI sequences when the
/// renderer ran with color enabled, plain text otherwise. The plain form is
/// byte-for-byte the decorated form minus the escape sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFields {
    /// Formatted timestamp.
    pub timestamp: String,
    /// Level name padded to [`LEVEL_WIDTH`], left-justified.
    pub level: String,
    /// Module name derived from the source file stem.
    pub module: String,
    /// Function name as captured at the emit site.
    pub function: String,
    /// Emit line number.
    pub line: String,
    /// Message body.
    pub message: String,
}

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Warning => Color::Yellow,
        Severity::Info => Color::White,
        Severity::Debug => Color::Blue,
        Severity::Error | Severity::Critical => Color::Red,
    }
}

fn module_name(file: &str) -> String {
    Path::new(file)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(file)
        .to_string()
}

/// Renders a record into per-field strings.
///
/// Pure function of `(record, use_color)`. With `use_color` false every
/// field passes through undecorated. With it true, the level and message are
/// bold in the severity color, the timestamp is green, and the provenance
/// fields are cyan. Decoration wraps the already-padded text, so stripping
/// the ANSI sequences from the colored output yields exactly the plain
/// output.
pub fn render(record: &LogRecord, use_color: bool) -> RenderedFields {
    let timestamp = record.timestamp.format(TIMESTAMP_FORMAT).to_string();
    let level = format!("{:<width$}", record.severity.as_str(), width = LEVEL_WIDTH);
    let module = module_name(record.site.file);
    let function = record.site.function.to_string();
    let line = record.site.line.to_string();
    let message = record.message.clone();

    if !use_color {
        return RenderedFields {
            timestamp,
            level,
            module,
            function,
            line,
            message,
        };
    }

    let color = severity_color(record.severity);
    RenderedFields {
        timestamp: timestamp.green().to_string(),
        level: level.color(color).bold().to_string(),
        module: module.cyan().to_string(),
        function: function.cyan().to_string(),
        line: line.cyan().to_string(),
        message: message.color(color).bold().to_string(),
    }
}

/// Joins rendered fields into the fixed console line template.
///
/// Template: `{timestamp} [{level}] {module}:{function}:{line} - {message}`.
pub fn assemble_line(fields: &RenderedFields) -> String {
    format!(
        "{} [{}] {}:{}:{} - {}",
        fields.timestamp, fields.level, fields.module, fields.function, fields.line, fields.message
    )
}
