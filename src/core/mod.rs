//! Core facade types and dispatch

pub mod backend;
pub mod classifier;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod interpolate;
pub mod level;
pub mod logger;
pub mod registry;
pub mod value;

pub use backend::{Backend, FieldLogger, LeveledLogger, LoggerRef, SugaredLogger};
pub use classifier::{classify, Classified, MULTIPLE_ERRORS_MESSAGE};
pub use config::FacadeConfig;
pub use dispatcher::{
    log, log_fn, log_std, log_to_discard, logf, logf_std, LogFn, Target, FATAL_EXIT_CODE,
};
pub use error::{FacadeError, Result};
pub use level::Level;
pub use logger::{LogFnT, Logger};
pub use registry::{close, LoggerRegistry, Loggers, RegistrySnapshot};
pub use value::{ErrorValue, Field, InvalidPair, Value};
