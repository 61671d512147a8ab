//! Logging for camera rigs.
//!
//! Every message goes through the `dolly_*` macros to `Engine::log`, which
//! forwards it to the installed [`Logger`]. Errors also carry the file and
//! line that raised them.

use colored::*;
use std::time::SystemTime;
use chrono::{DateTime, Local};

/// Sink for every message the rig emits.
///
/// Install one with `Engine::set_logger` to redirect output (test capture,
/// in-game console, file).
///
/// # Example
///
/// ```no_run
/// use galaxy_3d_dolly::galaxy3d::log::{Logger, LogEntry};
///
/// struct FrameLogger;
///
/// impl Logger for FrameLogger {
///     fn log(&self, entry: &LogEntry) {
///         eprintln!("{}", entry.message);
///     }
/// }
/// ```
pub trait Logger: Send + Sync {
    /// Receive one message. Called from whichever thread emitted it.
    fn log(&self, entry: &LogEntry);
}

/// One emitted message.
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// How loud the message is
    pub severity: LogSeverity,

    /// Wall-clock time of emission (not stage time)
    pub timestamp: SystemTime,

    /// Source module (e.g., "galaxy3d::Stage", "galaxy3d::CameraAutoDolly")
    pub source: String,

    /// Formatted text
    pub message: String,

    /// Emitting file, set by dolly_error! and dolly_err!
    pub file: Option<&'static str>,

    /// Emitting line, set by dolly_error! and dolly_err!
    pub line: Option<u32>,
}

/// Message severity, ordered from quietest to loudest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSeverity {
    /// Per-frame noise
    Trace,

    /// Lifecycle events (object created, dolly started)
    Debug,

    /// Notable events
    Info,

    /// Degraded but running (no target anchor)
    Warn,

    /// Rejected input or failed behaviour, with file:line
    Error,
}

impl LogSeverity {
    /// Fixed-width label used by the console logger
    pub fn label(&self) -> &'static str {
        match self {
            LogSeverity::Trace => "TRACE",
            LogSeverity::Debug => "DEBUG",
            LogSeverity::Info => "INFO ",
            LogSeverity::Warn => "WARN ",
            LogSeverity::Error => "ERROR",
        }
    }
}

/// Console sink installed until `Engine::set_logger` replaces it.
///
/// Severity is colored (gray, cyan, green, yellow, bold red), the source
/// is blue.
///
/// Format:
/// - Normal: `[timestamp] [SEVERITY] [source] message`
/// - Error: `[timestamp] [ERROR] [source] message (file:line)`
pub struct DefaultLogger;

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        let datetime: DateTime<Local> = entry.timestamp.into();
        let timestamp = datetime.format("%Y-%m-%d %H:%M:%S%.3f").to_string();

        let severity_str = match entry.severity {
            LogSeverity::Trace => entry.severity.label().bright_black(),
            LogSeverity::Debug => entry.severity.label().cyan(),
            LogSeverity::Info => entry.severity.label().green(),
            LogSeverity::Warn => entry.severity.label().yellow(),
            LogSeverity::Error => entry.severity.label().red().bold(),
        };

        let source = entry.source.bright_blue();

        if let (Some(file), Some(line)) = (entry.file, entry.line) {
            println!(
                "[{}] [{}] [{}] {} ({}:{})",
                timestamp, severity_str, source, entry.message, file, line
            );
        } else {
            println!(
                "[{}] [{}] [{}] {}",
                timestamp, severity_str, source, entry.message
            );
        }
    }
}

// ===== LOGGING MACROS =====

/// Log a TRACE message
#[macro_export]
macro_rules! dolly_trace {
    ($source:expr, $($arg:tt)*) => {
        $crate::galaxy3d::Engine::log(
            $crate::galaxy3d::log::LogSeverity::Trace,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a DEBUG message
#[macro_export]
macro_rules! dolly_debug {
    ($source:expr, $($arg:tt)*) => {
        $crate::galaxy3d::Engine::log(
            $crate::galaxy3d::log::LogSeverity::Debug,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an INFO message
#[macro_export]
macro_rules! dolly_info {
    ($source:expr, $($arg:tt)*) => {
        $crate::galaxy3d::Engine::log(
            $crate::galaxy3d::log::LogSeverity::Info,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a WARN message
#[macro_export]
macro_rules! dolly_warn {
    ($source:expr, $($arg:tt)*) => {
        $crate::galaxy3d::Engine::log(
            $crate::galaxy3d::log::LogSeverity::Warn,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an ERROR message with file:line information
///
/// # Example
///
/// ```ignore
/// dolly_error!("galaxy3d::Stage", "Behaviour update failed: {}", error);
/// ```
#[macro_export]
macro_rules! dolly_error {
    ($source:expr, $($arg:tt)*) => {
        $crate::galaxy3d::Engine::log_detailed(
            $crate::galaxy3d::log::LogSeverity::Error,
            $source,
            format!($($arg)*),
            file!(),
            line!()
        )
    };
}

/// Log an ERROR and evaluate to `Error::InvalidParameter` with the same message
///
/// # Example
///
/// ```ignore
/// return Err(dolly_err!("galaxy3d::Clock", "Delta must be finite, got {}", delta));
/// ```
#[macro_export]
macro_rules! dolly_err {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::galaxy3d::Engine::log_detailed(
            $crate::galaxy3d::log::LogSeverity::Error,
            $source,
            message.clone(),
            file!(),
            line!()
        );
        $crate::galaxy3d::Error::InvalidParameter(message)
    }};
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
