//! Structured logging system with visual formatting.
//!
//! Diagnostic output for the command-line front end. Messages go to stderr
//! so that stdout carries only results, and they use the same box-drawing
//! structure for every command.
//!
//! Logging is off unless `--debug` is given; the library core never logs.

use std::sync::atomic::{AtomicBool, Ordering};

static LOGGING_ENABLED: AtomicBool = AtomicBool::new(false);

/// Log level enumeration for categorizing message importance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Log,  // Normal operational logs
    Warn, // Warning messages (non-fatal issues)
    Crit, // Critical errors (the command cannot continue)
}

impl LogLevel {
    fn prefix(self) -> &'static str {
        match self {
            LogLevel::Log => "[LOG]",
            LogLevel::Warn => "[WARN]",
            LogLevel::Crit => "[CRIT]",
        }
    }
}

/// Main logging interface providing structured output formatting.
pub struct Log;

impl Log {
    /// Enable or disable logging.
    pub fn set_enabled(enabled: bool) {
        LOGGING_ENABLED.store(enabled, Ordering::SeqCst);
    }

    /// Check if logging is currently enabled.
    pub fn is_enabled() -> bool {
        LOGGING_ENABLED.load(Ordering::SeqCst)
    }

    /// Build the line `log` would print, without printing it.
    pub fn format(level: LogLevel, message: &str) -> String {
        format!("{} {}", level.prefix(), message)
    }

    /// Main log function with level-based prefixes.
    ///
    /// # Arguments
    /// * `level` - LogLevel indicating message importance
    /// * `message` - Text content to log
    pub fn log(level: LogLevel, message: &str) {
        if !Self::is_enabled() {
            return;
        }
        eprintln!("{}", Self::format(level, message));
    }

    // ═══ Convenience Methods for Common Log Levels ═══

    pub fn log_warning(message: &str) {
        Self::log(LogLevel::Warn, message);
    }

    /// Log a critical error message.
    ///
    /// Critical errors are printed even when logging is disabled, since the
    /// command is about to fail.
    pub fn log_critical(message: &str) {
        eprintln!("{}", Self::format(LogLevel::Crit, message));
    }

    // ═══ Visual Formatting Functions ═══

    /// Log a decorated message with visual branching indicator.
    pub fn log_decorated(message: &str) {
        if !Self::is_enabled() {
            return;
        }
        eprintln!("┣ {}", message);
    }

    /// Log an indented message for sub-items or details.
    pub fn log_indented(message: &str) {
        if !Self::is_enabled() {
            return;
        }
        eprintln!("┃   {}", message);
    }

    /// Log a visual pipe separator.
    pub fn log_pipe() {
        if !Self::is_enabled() {
            return;
        }
        eprintln!("┃");
    }

    /// Log a block start message with visual separation.
    pub fn log_block_start(message: &str) {
        if !Self::is_enabled() {
            return;
        }
        eprintln!("┃");
        eprintln!("┣ {}", message);
    }

    /// Log the application version header.
    pub fn log_version() {
        if !Self::is_enabled() {
            return;
        }
        eprintln!("┏ tenebris v{} ━━╸", env!("CARGO_PKG_VERSION"));
        eprintln!("┃");
    }

    /// Log the final termination marker.
    pub fn log_end() {
        if !Self::is_enabled() {
            return;
        }
        eprintln!("╹");
    }
}
