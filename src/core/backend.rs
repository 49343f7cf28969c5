//! Backend capability traits and the references the dispatcher resolves
//!
//! A backend is any externally constructed logger. The facade knows three
//! shapes of backend and calls only the methods declared here; how a backend
//! buffers, encodes or synchronizes is its own business.

use super::error::Result;
use super::value::{Field, Value};
use std::fmt;
use std::sync::Arc;

/// Backend with one method per level and an explicit flush
///
/// Messages arrive fully interpolated. `critical` is not expected to
/// terminate the process.
pub trait LeveledLogger: Send + Sync {
    fn trace(&self, msg: &str);
    fn debug(&self, msg: &str);
    fn info(&self, msg: &str);
    fn warn(&self, msg: &str);
    fn error(&self, msg: &str);
    fn critical(&self, msg: &str);
    fn flush(&self) -> Result<()>;

    fn name(&self) -> &str {
        "leveled"
    }
}

/// Backend accepting either key/value lists or formatted templates
///
/// The `*w` methods receive alternating keys and values, the `*f` methods
/// receive an uninterpolated template with its arguments.
///
/// # Fatal semantics
///
/// `fatalw` and `fatalf` are expected to terminate the process. If an
/// implementation returns anyway, the dispatcher exits with
/// [`FATAL_EXIT_CODE`](crate::core::dispatcher::FATAL_EXIT_CODE).
pub trait SugaredLogger: Send + Sync {
    fn debugw(&self, msg: &str, keys_and_values: &[Value]);
    fn infow(&self, msg: &str, keys_and_values: &[Value]);
    fn warnw(&self, msg: &str, keys_and_values: &[Value]);
    fn errorw(&self, msg: &str, keys_and_values: &[Value]);
    fn fatalw(&self, msg: &str, keys_and_values: &[Value]);

    fn debugf(&self, template: &str, args: &[Value]);
    fn infof(&self, template: &str, args: &[Value]);
    fn warnf(&self, template: &str, args: &[Value]);
    fn errorf(&self, template: &str, args: &[Value]);
    fn fatalf(&self, template: &str, args: &[Value]);
}

/// Backend taking pre-structured fields on every call
///
/// `fatal` carries the same termination contract as [`SugaredLogger::fatalw`].
pub trait FieldLogger: Send + Sync {
    fn debug(&self, msg: &str, fields: &[Field]);
    fn info(&self, msg: &str, fields: &[Field]);
    fn warn(&self, msg: &str, fields: &[Field]);
    fn error(&self, msg: &str, fields: &[Field]);
    fn fatal(&self, msg: &str, fields: &[Field]);
}

/// Borrowed reference to whichever backend a call should go to
///
/// `None` selects standard mode: discard, stdout or stderr by level.
#[derive(Clone, Copy, Default)]
pub enum LoggerRef<'a> {
    #[default]
    None,
    Leveled(&'a dyn LeveledLogger),
    Sugared(&'a dyn SugaredLogger),
    Fields(&'a dyn FieldLogger),
}

impl<'a> LoggerRef<'a> {
    pub fn leveled(logger: &'a dyn LeveledLogger) -> Self {
        LoggerRef::Leveled(logger)
    }

    pub fn sugared(logger: &'a dyn SugaredLogger) -> Self {
        LoggerRef::Sugared(logger)
    }

    pub fn fields(logger: &'a dyn FieldLogger) -> Self {
        LoggerRef::Fields(logger)
    }

    pub fn is_none(&self) -> bool {
        matches!(self, LoggerRef::None)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            LoggerRef::None => "none",
            LoggerRef::Leveled(_) => "leveled",
            LoggerRef::Sugared(_) => "sugared",
            LoggerRef::Fields(_) => "fields",
        }
    }
}

impl fmt::Debug for LoggerRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LoggerRef::{}", self.kind())
    }
}

/// Owned backend handle, as kept by a registry
#[derive(Clone)]
pub enum Backend {
    Leveled(Arc<dyn LeveledLogger>),
    Sugared(Arc<dyn SugaredLogger>),
    Fields(Arc<dyn FieldLogger>),
}

impl Backend {
    pub fn leveled<L: LeveledLogger + 'static>(logger: L) -> Self {
        Backend::Leveled(Arc::new(logger))
    }

    pub fn sugared<L: SugaredLogger + 'static>(logger: L) -> Self {
        Backend::Sugared(Arc::new(logger))
    }

    pub fn fields<L: FieldLogger + 'static>(logger: L) -> Self {
        Backend::Fields(Arc::new(logger))
    }

    /// Borrow this backend for dispatch
    pub fn logger_ref(&self) -> LoggerRef<'_> {
        match self {
            Backend::Leveled(l) => LoggerRef::Leveled(l.as_ref()),
            Backend::Sugared(l) => LoggerRef::Sugared(l.as_ref()),
            Backend::Fields(l) => LoggerRef::Fields(l.as_ref()),
        }
    }

    /// Flush buffered output; only leveled backends expose a flush
    pub fn flush(&self) -> Result<()> {
        match self {
            Backend::Leveled(l) => l.flush(),
            Backend::Sugared(_) | Backend::Fields(_) => Ok(()),
        }
    }
}

impl fmt::Debug for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Backend::{}", self.logger_ref().kind())
    }
}
