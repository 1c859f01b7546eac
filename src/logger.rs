//! Diagnostic logger for catalog fetches
//!
//! Messages are gated by verbosity and go to stderr, so gallery output on
//! stdout stays clean. Entries can also be captured in memory, which is how
//! tests observe logged fetch failures.

use serde::{Deserialize, Serialize};
use std::ops::Deref;
use std::sync::{Mutex, MutexGuard};

/// Verbosity level for diagnostic output
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum VerbosityLevel {
    /// No output
    Silent = 0,
    /// Only failures and the final summary
    Minimal = 1,
    /// Progress per request (default)
    #[default]
    Normal = 2,
    /// Everything, including request URLs
    Verbose = 3,
}

/// Output destination for log messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OutputMode {
    /// Output only to stderr (default)
    #[default]
    Stderr,
    /// Capture only to in-memory buffer
    Memory,
}

/// A captured log entry
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: VerbosityLevel,
    pub message: String,
    /// Optional category (e.g., "fetch_error")
    pub category: Option<String>,
}

/// Guard that provides read-only access to captured entries
pub struct LogGuard<'a> {
    guard: MutexGuard<'a, Vec<LogEntry>>,
}

impl<'a> LogGuard<'a> {
    pub fn iter(&self) -> std::slice::Iter<'_, LogEntry> {
        self.guard.iter()
    }

    pub fn len(&self) -> usize {
        self.guard.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guard.is_empty()
    }
}

impl<'a> Deref for LogGuard<'a> {
    type Target = [LogEntry];

    fn deref(&self) -> &Self::Target {
        &self.guard
    }
}

pub const FETCH_ERROR: &str = "fetch_error";

/// Verbosity-gated logger shared by the fetcher and the CLI
pub struct FetchLogger {
    verbosity: VerbosityLevel,
    output_mode: OutputMode,
    log_buffer: Mutex<Vec<LogEntry>>,
}

impl FetchLogger {
    /// Create a new logger with default verbosity (Normal)
    pub fn new() -> Self {
        Self::with_verbosity(VerbosityLevel::default())
    }

    pub fn with_verbosity(verbosity: VerbosityLevel) -> Self {
        FetchLogger {
            verbosity,
            output_mode: OutputMode::default(),
            log_buffer: Mutex::new(Vec::new()),
        }
    }

    /// Logger that only captures to memory, for tests
    pub fn capturing() -> Self {
        let mut logger = Self::with_verbosity(VerbosityLevel::Verbose);
        logger.enable_capture();
        logger
    }

    /// Capture to memory only (suppresses stderr)
    pub fn enable_capture(&mut self) {
        self.output_mode = OutputMode::Memory;
    }

    pub fn disable_capture(&mut self) {
        self.output_mode = OutputMode::Stderr;
    }

    pub fn is_capturing(&self) -> bool {
        self.output_mode == OutputMode::Memory
    }

    pub fn verbosity(&self) -> VerbosityLevel {
        self.verbosity
    }

    /// Get access to captured log entries
    pub fn logs(&self) -> LogGuard<'_> {
        LogGuard {
            guard: self.buffer(),
        }
    }

    /// Captured entries of one category
    pub fn entries_in(&self, category: &str) -> Vec<LogEntry> {
        self.logs()
            .iter()
            .filter(|entry| entry.category.as_deref() == Some(category))
            .cloned()
            .collect()
    }

    pub fn clear_logs(&self) {
        self.buffer().clear();
    }

    pub fn minimal(&self, message: &str) {
        self.log(VerbosityLevel::Minimal, message, None);
    }

    pub fn normal(&self, message: &str) {
        self.log(VerbosityLevel::Normal, message, None);
    }

    pub fn verbose(&self, message: &str) {
        self.log(VerbosityLevel::Verbose, message, None);
    }

    /// Log a failed request for one creature at Minimal level
    pub fn fetch_error(&self, id: u32, error: &dyn std::fmt::Display) {
        let message = format!("failed to fetch creature #{id}: {error}");
        self.log(VerbosityLevel::Minimal, &message, Some(FETCH_ERROR));
    }

    fn log(&self, level: VerbosityLevel, message: &str, category: Option<&str>) {
        if level == VerbosityLevel::Silent {
            return;
        }

        let should_capture = self.is_capturing();
        let should_output = self.output_mode == OutputMode::Stderr;

        if level > self.verbosity && !should_capture {
            return;
        }

        if should_capture {
            self.buffer().push(LogEntry {
                level,
                message: message.to_string(),
                category: category.map(str::to_string),
            });
        }

        if should_output && level <= self.verbosity {
            if level == VerbosityLevel::Minimal {
                eprintln!("{message}");
            } else {
                eprintln!("  {message}");
            }
        }
    }

    fn buffer(&self) -> MutexGuard<'_, Vec<LogEntry>> {
        // A poisoned buffer still holds valid entries
        self.log_buffer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for FetchLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FetchLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchLogger")
            .field("verbosity", &self.verbosity)
            .field("output_mode", &self.output_mode)
            .field("log_count", &self.logs().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logger_creation() {
        let logger = FetchLogger::new();
        assert_eq!(logger.verbosity(), VerbosityLevel::Normal);
        assert!(!logger.is_capturing());
    }

    #[test]
    fn test_log_capture() {
        let logger = FetchLogger::capturing();

        logger.normal("test message");
        logger.minimal("minimal message");

        let logs = logger.logs();
        assert_eq!(logs.len(), 2);
        assert_eq!(logs[0].message, "test message");
        assert_eq!(logs[1].message, "minimal message");
        assert_eq!(logs[1].level, VerbosityLevel::Minimal);
    }

    #[test]
    fn test_fetch_error_category() {
        let logger = FetchLogger::capturing();
        logger.normal("fetching #1");
        logger.fetch_error(99999, &"status 404");

        let errors = logger.entries_in(FETCH_ERROR);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].message,
            "failed to fetch creature #99999: status 404"
        );
    }

    #[test]
    fn test_clear_logs() {
        let logger = FetchLogger::capturing();
        logger.verbose("one");
        logger.verbose("two");
        assert_eq!(logger.logs().len(), 2);

        logger.clear_logs();
        assert!(logger.logs().is_empty());
    }

    #[test]
    fn test_disable_capture() {
        let mut logger = FetchLogger::new();
        logger.enable_capture();
        assert!(logger.is_capturing());

        logger.disable_capture();
        assert!(!logger.is_capturing());

        logger.normal("not captured");
        assert!(logger.logs().is_empty());
    }

    #[test]
    fn test_capture_keeps_entries_above_verbosity() {
        let mut logger = FetchLogger::with_verbosity(VerbosityLevel::Silent);
        logger.enable_capture();

        logger.verbose("requesting #1");
        logger.fetch_error(1, &"timed out");

        let logs = logger.logs();
        assert_eq!(logs.len(), 2);
        assert_eq!(logs[0].level, VerbosityLevel::Verbose);
        assert_eq!(logs[1].category.as_deref(), Some(FETCH_ERROR));
    }

    #[test]
    fn test_verbosity_ordering() {
        assert!(VerbosityLevel::Silent < VerbosityLevel::Minimal);
        assert!(VerbosityLevel::Minimal < VerbosityLevel::Normal);
        assert!(VerbosityLevel::Normal < VerbosityLevel::Verbose);
    }
}
