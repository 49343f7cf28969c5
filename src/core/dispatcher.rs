//! Level-keyed dispatch onto a backend or a standard stream
//!
//! [`log_fn`] resolves a [`LoggerRef`] and a [`Level`] to a [`LogFn`], a
//! small copyable handle that emits a message every time it is called.
//! Resolution order:
//!
//! 1. Leveled backend: interpolate, call the level's method, then flush.
//! 2. Sugared backend: keyed variant when the first argument is a field,
//!    formatted variant otherwise.
//! 3. Field backend: classify the arguments into fields.
//! 4. No backend: write a line to discard, stdout or stderr.
//!
//! **Critical terminates the process** on sugared and field backends: the
//! backend's fatal method is called and the process then exits with
//! [`FATAL_EXIT_CODE`]. Leveled backends log Critical without exiting.

use super::backend::{FieldLogger, LeveledLogger, LoggerRef, SugaredLogger};
use super::classifier::{classify, MULTIPLE_ERRORS_MESSAGE};
use super::interpolate::interpolate;
use super::level::Level;
use super::value::{Field, Value};
use crate::sinks::Sink;

/// Exit status used after a fatal-level call on a sugared or field backend
pub const FATAL_EXIT_CODE: i32 = 1;

/// Where a [`LogFn`] sends its messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Leveled,
    Sugared,
    Fields,
    Standard(Sink),
}

/// Resolved emitter for one backend and level
#[derive(Debug, Clone, Copy)]
pub struct LogFn<'a> {
    logger: LoggerRef<'a>,
    level: Level,
}

/// Resolve the emitter for `logger` at `level`
pub fn log_fn(logger: LoggerRef<'_>, level: Level) -> LogFn<'_> {
    LogFn { logger, level }
}

impl<'a> LogFn<'a> {
    pub fn level(&self) -> Level {
        self.level
    }

    pub fn target(&self) -> Target {
        match self.logger {
            LoggerRef::Leveled(_) => Target::Leveled,
            LoggerRef::Sugared(_) => Target::Sugared,
            LoggerRef::Fields(_) => Target::Fields,
            LoggerRef::None => Target::Standard(Sink::for_level(self.level)),
        }
    }

    /// Emit `msg` with `args`
    ///
    /// Does not return when the level is Critical and the backend is
    /// sugared or field-based.
    pub fn log(&self, msg: &str, args: &[Value]) {
        match self.logger {
            LoggerRef::Leveled(logger) => emit_leveled(logger, self.level, msg, args),
            LoggerRef::Sugared(logger) => emit_sugared(logger, self.level, msg, args),
            LoggerRef::Fields(logger) => emit_fields(logger, self.level, msg, args),
            LoggerRef::None => emit_standard(Sink::for_level(self.level), msg, args),
        }
    }
}

fn emit_standard(sink: Sink, msg: &str, args: &[Value]) {
    if let Err(e) = sink.emit(msg, args) {
        eprintln!("[LOGGER ERROR] Write to '{}' failed: {}", sink.name(), e);
    }
}

fn emit_leveled(logger: &dyn LeveledLogger, level: Level, msg: &str, args: &[Value]) {
    let msg = interpolate(msg, args);
    match level {
        Level::Quiet => {}
        Level::Trace => logger.trace(&msg),
        Level::Debug => logger.debug(&msg),
        Level::Info => logger.info(&msg),
        Level::Warn => logger.warn(&msg),
        Level::Error => logger.error(&msg),
        Level::Critical => logger.critical(&msg),
    }

    if let Err(e) = logger.flush() {
        eprintln!("[LOGGER ERROR] Backend '{}' flush failed: {}", logger.name(), e);
    }
}

fn emit_sugared(logger: &dyn SugaredLogger, level: Level, msg: &str, args: &[Value]) {
    let keyed = args.first().is_some_and(Value::is_field);

    match (level, keyed) {
        (Level::Quiet, _) => {}
        (Level::Trace | Level::Debug, true) => logger.debugw(msg, args),
        (Level::Trace | Level::Debug, false) => logger.debugf(msg, args),
        (Level::Info, true) => logger.infow(msg, args),
        (Level::Info, false) => logger.infof(msg, args),
        (Level::Warn, true) => logger.warnw(msg, args),
        (Level::Warn, false) => logger.warnf(msg, args),
        (Level::Error, true) => logger.errorw(msg, args),
        (Level::Error, false) => logger.errorf(msg, args),
        (Level::Critical, true) => {
            logger.fatalw(msg, args);
            terminate()
        }
        (Level::Critical, false) => {
            logger.fatalf(msg, args);
            terminate()
        }
    }
}

fn emit_fields(logger: &dyn FieldLogger, level: Level, msg: &str, args: &[Value]) {
    if level == Level::Quiet {
        return;
    }

    let classified = classify(args);
    for err in classified.stray_errors {
        logger.error(MULTIPLE_ERRORS_MESSAGE, &[Field::error(err)]);
    }

    let fields = classified.fields.as_slice();
    match level {
        Level::Quiet => {}
        Level::Trace | Level::Debug => logger.debug(msg, fields),
        Level::Info => logger.info(msg, fields),
        Level::Warn => logger.warn(msg, fields),
        Level::Error => logger.error(msg, fields),
        Level::Critical => {
            logger.fatal(msg, fields);
            terminate()
        }
    }
}

fn terminate() -> ! {
    std::process::exit(FATAL_EXIT_CODE)
}

/// Log `msg` verbatim at `level`
pub fn log(logger: LoggerRef<'_>, level: Level, msg: &str) {
    log_fn(logger, level).log(msg, &[]);
}

/// Log `template` with `args` at `level`
pub fn logf(logger: LoggerRef<'_>, level: Level, template: &str, args: &[Value]) {
    log_fn(logger, level).log(template, args);
}

/// Log `msg` in standard mode
pub fn log_std(level: Level, msg: &str) {
    log(LoggerRef::None, level, msg);
}

/// Log `template` with `args` in standard mode
pub fn logf_std(level: Level, template: &str, args: &[Value]) {
    logf(LoggerRef::None, level, template, args);
}

/// Send `msg` to the discard sink
pub fn log_to_discard(msg: &str) {
    log(LoggerRef::None, Level::Quiet, msg);
}

impl<'a> LoggerRef<'a> {
    pub fn log_fn(self, level: Level) -> LogFn<'a> {
        log_fn(self, level)
    }

    pub fn log(self, level: Level, msg: &str) {
        log(self, level, msg);
    }

    pub fn logf(self, level: Level, template: &str, args: &[Value]) {
        logf(self, level, template, args);
    }
}
