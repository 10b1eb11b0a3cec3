//! Emit-site capture and leveled dispatch macros.
//!
//! `call_site!()` records where an emit happened; `dispatch_log!` formats the
//! message and forwards it, and the leveled wrappers pin the severity. The
//! severity threshold is a runtime property of the dispatcher, so there is no
//! compile-time level gating here.

/// Captures the current file, module path, and line as a
/// [`CallSite`](crate::record::CallSite).
///
/// `module_path!()` stands in for the function name; build a `CallSite`
/// directly when a more precise name is available.
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::record::CallSite {
            file: file!(),
            function: module_path!(),
            line: line!(),
        }
    };
}

/// Formats a message and forwards it to a dispatcher at the given severity.
#[macro_export]
macro_rules! dispatch_log {
    ($dispatcher:expr, $severity:expr, $($arg:tt)*) => {{
        $dispatcher.log($severity, format!($($arg)*), $crate::call_site!());
    }};
}

/// Emits at `DEBUG` severity.
#[macro_export]
macro_rules! log_debug {
    ($dispatcher:expr, $($arg:tt)*) => {
        $crate::dispatch_log!($dispatcher, $crate::types::Severity::Debug, $($arg)*)
    };
}

/// Emits at `INFO` severity.
#[macro_export]
macro_rules! log_info {
    ($dispatcher:expr, $($arg:tt)*) => {
        $crate::dispatch_log!($dispatcher, $crate::types::Severity::Info, $($arg)*)
    };
}

/// Emits at `WARNING` severity.
#[macro_export]
macro_rules! log_warning {
    ($dispatcher:expr, $($arg:tt)*) => {
        $crate::dispatch_log!($dispatcher, $crate::types::Severity::Warning, $($arg)*)
    };
}

/// Emits at `ERROR` severity.
#[macro_export]
macro_rules! log_error {
    ($dispatcher:expr, $($arg:tt)*) => {
        $crate::dispatch_log!($dispatcher, $crate::types::Severity::Error, $($arg)*)
    };
}

/// Emits at `CRITICAL` severity.
#[macro_export]
macro_rules! log_critical {
    ($dispatcher:expr, $($arg:tt)*) => {
        $crate::dispatch_log!($dispatcher, $crate::types::Severity::Critical, $($arg)*)
    };
}
