//! Serializable facade settings
//!
//! Reading a configuration file is left to the application; this type only
//! describes the shape it deserializes into.

use super::backend::LoggerRef;
use super::level::Level;
use super::registry::Loggers;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FacadeConfig {
    /// Threshold level; unknown text deserializes to `quiet`
    pub level: Level,

    /// Name of the registered logger to use, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logger: Option<String>,
}

impl FacadeConfig {
    pub fn new(level: Level) -> Self {
        Self {
            level,
            logger: None,
        }
    }

    #[must_use]
    pub fn with_logger(mut self, name: impl Into<String>) -> Self {
        self.logger = Some(name.into());
        self
    }

    /// Look up the configured logger, falling back to standard mode
    pub fn resolve<'a>(&self, loggers: &'a dyn Loggers) -> LoggerRef<'a> {
        match &self.logger {
            Some(name) => loggers.by_name(name),
            None => LoggerRef::None,
        }
    }

    /// Whether a message at `level` passes the configured threshold
    pub fn enabled(&self, level: Level) -> bool {
        level.is_enabled_at(self.level)
    }
}
