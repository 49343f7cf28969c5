//! Named logger storage
//!
//! This module provides:
//! - `Loggers`: lookup-by-name contract with an optional close hook
//! - `close`: shutdown helper tolerant of a missing registry
//! - `LoggerRegistry`: thread-safe registry of owned backends
//! - `RegistrySnapshot`: lock-free view used for dispatch

use super::backend::{Backend, LoggerRef};
use super::error::{FacadeError, Result};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Storage of loggers addressable by name
pub trait Loggers {
    /// Unknown names resolve to [`LoggerRef::None`], i.e. standard mode.
    fn by_name(&self, name: &str) -> LoggerRef<'_>;

    /// Release or flush resources; invoked once at shutdown.
    fn close(&self) -> Result<()> {
        Ok(())
    }
}

/// Close `loggers` if present
///
/// A close failure is reported on stderr and otherwise ignored.
pub fn close(loggers: Option<&dyn Loggers>) {
    let Some(loggers) = loggers else {
        return;
    };

    if let Err(e) = loggers.close() {
        eprintln!("[LOGGER ERROR] Failed to close loggers: {}", e);
    }
}

/// Thread-safe registry of named backends
///
/// # Example
///
/// ```
/// use rust_log_facade::core::registry::{Loggers, LoggerRegistry};
///
/// let registry = LoggerRegistry::new();
/// let snapshot = registry.snapshot();
/// assert!(snapshot.by_name("missing").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct LoggerRegistry {
    backends: Arc<RwLock<HashMap<String, Backend>>>,
}

impl LoggerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `backend` under `name`, returning the one it replaced
    pub fn register(&self, name: impl Into<String>, backend: Backend) -> Option<Backend> {
        self.backends.write().insert(name.into(), backend)
    }

    pub fn remove(&self, name: &str) -> Option<Backend> {
        self.backends.write().remove(name)
    }

    pub fn get(&self, name: &str) -> Option<Backend> {
        self.backends.read().get(name).cloned()
    }

    /// Registered names in sorted order
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.backends.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.backends.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.backends.read().is_empty()
    }

    /// Copy the current backends out of the lock
    pub fn snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot {
            backends: self.backends.read().clone(),
        }
    }

    /// Flush every leveled backend
    pub fn close(&self) -> Result<()> {
        self.snapshot().close()
    }
}

/// Point-in-time copy of a [`LoggerRegistry`]
#[derive(Debug, Clone, Default)]
pub struct RegistrySnapshot {
    backends: HashMap<String, Backend>,
}

impl RegistrySnapshot {
    pub fn get(&self, name: &str) -> Option<&Backend> {
        self.backends.get(name)
    }
}

impl Loggers for RegistrySnapshot {
    fn by_name(&self, name: &str) -> LoggerRef<'_> {
        self.backends
            .get(name)
            .map(Backend::logger_ref)
            .unwrap_or_default()
    }

    /// Flushes every backend and returns the first failure
    fn close(&self) -> Result<()> {
        let mut first_err: Option<FacadeError> = None;
        let mut names: Vec<&String> = self.backends.keys().collect();
        names.sort();

        for name in names {
            if let Err(e) = self.backends[name].flush() {
                if first_err.is_none() {
                    first_err = Some(FacadeError::close(name.as_str(), e.to_string()));
                }
            }
        }

        match first_err {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl Loggers for HashMap<String, Backend> {
    fn by_name(&self, name: &str) -> LoggerRef<'_> {
        self.get(name).map(Backend::logger_ref).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::backend::LeveledLogger;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingFlush {
        flushes: Arc<AtomicUsize>,
        fail: bool,
    }

    impl LeveledLogger for CountingFlush {
        fn trace(&self, _msg: &str) {}
        fn debug(&self, _msg: &str) {}
        fn info(&self, _msg: &str) {}
        fn warn(&self, _msg: &str) {}
        fn error(&self, _msg: &str) {}
        fn critical(&self, _msg: &str) {}
        fn flush(&self) -> Result<()> {
            self.flushes.fetch_add(1, Ordering::Relaxed);
            if self.fail {
                return Err(FacadeError::flush("counting", "sink gone"));
            }
            Ok(())
        }
    }

    #[test]
    fn test_register_and_lookup() {
        let registry = LoggerRegistry::new();
        assert!(registry.is_empty());

        registry.register("app", Backend::leveled(CountingFlush::default()));
        registry.register("audit", Backend::leveled(CountingFlush::default()));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.names(), vec!["app", "audit"]);
        assert!(registry.get("app").is_some());

        let snapshot = registry.snapshot();
        assert_eq!(snapshot.by_name("app").kind(), "leveled");
        assert!(snapshot.by_name("nope").is_none());
    }

    #[test]
    fn test_register_replaces() {
        let registry = LoggerRegistry::new();
        assert!(registry.register("app", Backend::leveled(CountingFlush::default())).is_none());
        assert!(registry.register("app", Backend::leveled(CountingFlush::default())).is_some());
        assert!(registry.remove("app").is_some());
        assert!(registry.remove("app").is_none());
    }

    #[test]
    fn test_close_flushes_all() {
        let flushes = Arc::new(AtomicUsize::new(0));
        let registry = LoggerRegistry::new();
        for name in ["a", "b", "c"] {
            registry.register(
                name,
                Backend::leveled(CountingFlush {
                    flushes: Arc::clone(&flushes),
                    fail: false,
                }),
            );
        }

        registry.close().unwrap();
        assert_eq!(flushes.load(Ordering::Relaxed), 3);
    }

    #[test]
    fn test_close_reports_first_failure() {
        let registry = LoggerRegistry::new();
        registry.register("ok", Backend::leveled(CountingFlush::default()));
        registry.register(
            "broken",
            Backend::leveled(CountingFlush {
                fail: true,
                ..Default::default()
            }),
        );

        let err = registry.close().unwrap_err();
        assert!(matches!(err, FacadeError::Close { ref name, .. } if name == "broken"));
    }

    #[test]
    fn test_close_helper_handles_none() {
        close(None);

        let registry = LoggerRegistry::new();
        let snapshot = registry.snapshot();
        close(Some(&snapshot));
    }

    #[test]
    fn test_hashmap_as_loggers() {
        let mut map = HashMap::new();
        map.insert("x".to_string(), Backend::leveled(CountingFlush::default()));
        assert_eq!(map.by_name("x").kind(), "leveled");
        assert!(Loggers::close(&map).is_ok());
    }
}
