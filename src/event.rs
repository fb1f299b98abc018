//! Log callback system.
//!
//! The library never prints. Hosts that want diagnostics (e.g. why a message
//! was not treated as emoji) register a callback and route it into their own
//! logging stack.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, OnceLock};

/// Log level for debug callbacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

type LogCallback = Box<dyn Fn(LogLevel, &str) + Send + Sync + 'static>;

// Lets hot paths skip message formatting and the mutex entirely.
static LOG_ENABLED: AtomicBool = AtomicBool::new(false);

fn log_callback() -> &'static Mutex<Option<LogCallback>> {
    static CALLBACK: OnceLock<Mutex<Option<LogCallback>>> = OnceLock::new();
    CALLBACK.get_or_init(|| Mutex::new(None))
}

/// Set the global log callback.
pub fn set_log_callback<F>(callback: F)
where
    F: Fn(LogLevel, &str) + Send + Sync + 'static,
{
    if let Ok(mut guard) = log_callback().lock() {
        *guard = Some(Box::new(callback));
        LOG_ENABLED.store(true, Ordering::Release);
    }
}

/// Remove the global log callback.
pub fn clear_log_callback() {
    if let Ok(mut guard) = log_callback().lock() {
        *guard = None;
        LOG_ENABLED.store(false, Ordering::Release);
    }
}

/// Whether a log callback is currently installed.
#[inline]
#[must_use]
pub fn log_enabled() -> bool {
    LOG_ENABLED.load(Ordering::Acquire)
}

/// Emit a log event.
pub fn emit_log(level: LogLevel, message: &str) {
    if !log_enabled() {
        return;
    }
    if let Ok(guard) = log_callback().lock() {
        if let Some(callback) = guard.as_ref() {
            callback(level, message);
        }
    }
}
