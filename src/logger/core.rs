//! Minimal logging primitives for the scraper.
//!
//! A deliberately small surface: a `LogLevel` enum, a `Logger` trait with
//! convenience helpers, a no-op implementation for tests, and a stdout
//! implementation that emits one JSON object per line. For anything beyond
//! this (filtering, batching, structured fields), wrap or replace these with
//! a full logging framework.

/// Log severity, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Short string form suitable for log output.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "TRACE",
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

/// Logger interface used throughout the crate.
///
/// Implementors must be `Send + Sync + 'static` so they can back the global
/// facade. Only `log` needs to be implemented; the per-level helpers are
/// defined in terms of it.
pub trait Logger: Send + Sync + 'static {
    /// Emit a log record at the given level.
    fn log(&self, level: LogLevel, message: &str);

    /// Flush any buffered records.
    fn flush(&self) {}

    fn trace(&self, message: &str) {
        self.log(LogLevel::Trace, message);
    }
    fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }
    fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }
    fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }
    fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }
}

/// Logger that drops everything. Default choice for tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopLogger;

impl Logger for NoopLogger {
    fn log(&self, _level: LogLevel, _message: &str) {}
}

/// Stdout logger emitting compact JSON lines.
///
/// Example: `{"ts":"2024-01-01T00:00:00+00:00","level":"INFO","msg":"..."}`
/// Easy for structured log collectors to pick up; no filtering or buffering.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutLogger;

impl Logger for StdoutLogger {
    fn log(&self, level: LogLevel, message: &str) {
        let line = serde_json::json!({
            "ts": chrono::Utc::now().to_rfc3339(),
            "level": level.as_str(),
            "msg": message,
        });
        println!("{}", line);
    }

    fn flush(&self) {
        // stdout is line-buffered, nothing to do
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loglevel_as_str() {
        assert_eq!(LogLevel::Trace.as_str(), "TRACE");
        assert_eq!(LogLevel::Debug.as_str(), "DEBUG");
        assert_eq!(LogLevel::Info.as_str(), "INFO");
        assert_eq!(LogLevel::Warn.as_str(), "WARN");
        assert_eq!(LogLevel::Error.as_str(), "ERROR");
    }

    #[test]
    fn test_loglevel_ordering_is_monotonic() {
        assert!(LogLevel::Trace < LogLevel::Debug);
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Error);
    }

    #[derive(Default)]
    struct CaptureLogger {
        entries: std::sync::Mutex<Vec<(LogLevel, String)>>,
    }

    impl Logger for CaptureLogger {
        fn log(&self, level: LogLevel, message: &str) {
            self.entries
                .lock()
                .unwrap()
                .push((level, message.to_string()));
        }
    }

    #[test]
    fn test_trait_default_helpers_route_through_log() {
        let logger = CaptureLogger::default();
        logger.info("info");
        logger.warn("warn");

        let entries = logger.entries.lock().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], (LogLevel::Info, "info".to_string()));
        assert_eq!(entries[1], (LogLevel::Warn, "warn".to_string()));
    }

    #[test]
    fn test_nooplogger_accepts_all_levels() {
        let logger = NoopLogger;
        logger.trace("trace");
        logger.debug("debug");
        logger.info("info");
        logger.warn("warn");
        logger.error("error");
        logger.flush();
    }
}
