//! # Rust Log Facade
//!
//! A thin logging facade: one call surface that forwards leveled messages to
//! whichever backend the caller hands in.
//!
//! ## Backends
//!
//! - **Leveled**: one method per level plus flush
//! - **Sugared**: key/value or formatted variants per level
//! - **Field-based**: pre-structured fields per call
//! - **None**: standard mode, writing lines to discard, stdout or stderr
//!
//! Critical on a sugared or field-based backend terminates the process.

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        log, log_fn, log_std, logf, logf_std, Backend, ErrorValue, FacadeConfig, FacadeError,
        Field, FieldLogger, Level, LeveledLogger, LogFn, LogFnT, Logger, LoggerRef,
        LoggerRegistry, Loggers, Result, SugaredLogger, Target, Value,
    };
    pub use crate::sinks::Sink;
}

pub use crate::core::{
    classify, close, log, log_fn, log_std, log_to_discard, logf, logf_std, Backend, Classified,
    ErrorValue, FacadeConfig, FacadeError, Field, FieldLogger, InvalidPair, Level, LeveledLogger,
    LogFn, LogFnT, Logger, LoggerRef, LoggerRegistry, Loggers, RegistrySnapshot, Result,
    SugaredLogger, Target, Value, FATAL_EXIT_CODE, MULTIPLE_ERRORS_MESSAGE,
};
pub use sinks::{write_line, Sink};
