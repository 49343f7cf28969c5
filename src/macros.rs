//! Logging macros that convert arguments into [`Value`](crate::Value)s.
//!
//! Each argument goes through `Value::from`, so anything with a `From`
//! conversion can be passed directly. Templates are runtime strings using
//! `{}` placeholders.
//!
//! # Examples
//!
//! ```
//! use rust_log_facade::prelude::*;
//! use rust_log_facade::{info, logf};
//!
//! let logger = LoggerRef::None;
//!
//! // Standard mode, written to stdout
//! info!(logger, "Server started");
//!
//! // With positional arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//!
//! // Explicit level
//! logf!(logger, Level::Trace, "User {} performed action: {}", 42, "login");
//! ```

/// Log a message at an explicit level.
///
/// # Examples
///
/// ```
/// # use rust_log_facade::prelude::*;
/// use rust_log_facade::log;
/// log!(LoggerRef::None, Level::Info, "Simple message");
/// log!(LoggerRef::None, Level::Quiet, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $msg:expr $(,)?) => {
        $crate::log($logger, $level, $msg)
    };
    ($logger:expr, $level:expr, $fmt:expr, $($arg:expr),+ $(,)?) => {
        $crate::logf!($logger, $level, $fmt, $($arg),+)
    };
}

/// Log a template with arguments at an explicit level.
#[macro_export]
macro_rules! logf {
    ($logger:expr, $level:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::logf($logger, $level, $fmt, &[$($crate::Value::from($arg)),*])
    };
}

/// Log a trace-level message.
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::Level::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::Level::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::Level::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::Level::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::Level::Error, $($arg)+)
    };
}

/// Log a critical-level message.
///
/// On a sugared or field-based backend this terminates the process.
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::logf!($logger, $crate::Level::Critical, $($arg)+)
    };
}
