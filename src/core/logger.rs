//! Level-agnostic logger abstraction

use super::backend::LoggerRef;
use super::level::Level;
use super::value::Value;

/// Anything that accepts a level, a template and its arguments
pub trait Logger {
    fn log(&self, level: Level, msg: &str, args: &[Value]);
}

impl Logger for LoggerRef<'_> {
    fn log(&self, level: Level, msg: &str, args: &[Value]) {
        self.log_fn(level).log(msg, args);
    }
}

/// Adapter turning a closure into a [`Logger`]
///
/// # Example
///
/// ```
/// use rust_log_facade::{Level, LogFnT, Logger, Value};
/// use std::cell::RefCell;
///
/// let seen = RefCell::new(Vec::new());
/// let logger = LogFnT(|level: Level, msg: &str, _args: &[Value]| {
///     seen.borrow_mut().push(format!("{} {}", level, msg));
/// });
/// logger.log(Level::Info, "ready", &[]);
/// assert_eq!(seen.borrow().as_slice(), ["info ready"]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LogFnT<F>(pub F);

impl<F> Logger for LogFnT<F>
where
    F: Fn(Level, &str, &[Value]),
{
    fn log(&self, level: Level, msg: &str, args: &[Value]) {
        (self.0)(level, msg, args)
    }
}

impl<L: Logger + ?Sized> Logger for &L {
    fn log(&self, level: Level, msg: &str, args: &[Value]) {
        (**self).log(level, msg, args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    fn emit_through(logger: &dyn Logger) {
        logger.log(Level::Warn, "disk at {}%", &[Value::from(91)]);
    }

    #[test]
    fn test_closure_adapter() {
        let seen = Mutex::new(Vec::new());
        let logger = LogFnT(|level: Level, msg: &str, args: &[Value]| {
            seen.lock().push((level, msg.to_string(), args.len()));
        });

        emit_through(&logger);
        assert_eq!(seen.lock().as_slice(), [(Level::Warn, "disk at {}%".to_string(), 1)]);
    }

    #[test]
    fn test_logger_ref_as_logger() {
        let logger = LoggerRef::None;
        emit_through(&logger);
        Logger::log(&logger, Level::Quiet, "dropped", &[]);
    }
}
