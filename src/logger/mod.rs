//! Logger exports and a small global facade.
//!
//! Re-exports the core logging primitives and provides a process-wide logger
//! for code that does not want to thread a logger through every call.
//!
//! ```rust,no_run
//! use lanzara_pubs::logger;
//! logger::init_logger(logger::StdoutLogger);
//! logger::info("scrape started");
//! ```

pub mod core;

pub use core::{LogLevel, Logger, NoopLogger, StdoutLogger};

use std::sync::OnceLock;

/// Global logger instance. Set once via `init_logger`; before that, the
/// facade helpers are no-ops.
static GLOBAL_LOGGER: OnceLock<Box<dyn Logger>> = OnceLock::new();

/// Install the global logger. Call once early in `main`; later calls are
/// ignored, which keeps tests that race on initialization harmless.
pub fn init_logger<L: Logger>(logger: L) {
    let _ = GLOBAL_LOGGER.set(Box::new(logger));
}

/// Log through the global logger if one is installed.
pub fn log(level: LogLevel, message: &str) {
    if let Some(logger) = GLOBAL_LOGGER.get() {
        logger.log(level, message);
    }
}

pub fn debug(message: &str) {
    log(LogLevel::Debug, message);
}

pub fn info(message: &str) {
    log(LogLevel::Info, message);
}

pub fn warn(message: &str) {
    log(LogLevel::Warn, message);
}

pub fn error(message: &str) {
    log(LogLevel::Error, message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facade_is_noop_before_init() {
        // must not panic even with no logger installed
        log(LogLevel::Info, "dropped");
        info("dropped");
        warn("dropped");
    }
}
