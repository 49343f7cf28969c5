//! Severity level definitions

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Ordered severity level.
///
/// `Quiet` is the lowest variant and turns output off entirely; every call
/// dispatched at `Quiet` is swallowed regardless of backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    /// Turns logging off.
    #[default]
    Quiet = 0,
    /// In-depth tracing of elementary constructs and temporary values.
    Trace = 1,
    /// Detailed diagnostics for locating problems during development.
    Debug = 2,
    /// General information, safe to leave enabled in production.
    Info = 3,
    /// Small errors and strange situations handled in a safe manner.
    Warn = 4,
    /// Severe failures that affect the workflow but are not fatal.
    Error = 5,
    /// Final messages before the application dies.
    Critical = 6,
}

impl Level {
    /// Every level in ascending severity order.
    pub const ALL: [Level; 7] = [
        Level::Quiet,
        Level::Trace,
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Quiet => "quiet",
            Level::Trace => "trace",
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Critical => "critical",
        }
    }

    /// Parse a level leniently.
    ///
    /// Matching ignores case, treats spaces and underscores as hyphens and
    /// drops parentheses. Short aliases such as `w`, `err` and `crit` are
    /// accepted. Anything unrecognized resolves to [`Level::Quiet`].
    ///
    /// ```
    /// use rust_log_facade::Level;
    ///
    /// assert_eq!(Level::parse("WARNING"), Level::Warn);
    /// assert_eq!(Level::parse("(crit)"), Level::Critical);
    /// assert_eq!(Level::parse("bogus"), Level::Quiet);
    /// ```
    pub fn parse(s: &str) -> Level {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !matches!(c, '(' | ')'))
            .map(|c| if c == ' ' || c == '_' { '-' } else { c })
            .collect();

        match normalized.as_str() {
            "q" | "quiet" | "off" => Level::Quiet,
            "t" | "trace" => Level::Trace,
            "d" | "debug" => Level::Debug,
            "i" | "info" => Level::Info,
            "w" | "warn" | "warning" => Level::Warn,
            "e" | "err" | "error" => Level::Error,
            "c" | "crit" | "critical" => Level::Critical,
            _ => Level::Quiet,
        }
    }

    /// Whether a message at `self` passes a `threshold` filter.
    ///
    /// A `Quiet` message never passes, and a `Quiet` threshold blocks
    /// everything.
    pub fn is_enabled_at(&self, threshold: Level) -> bool {
        *self != Level::Quiet && threshold != Level::Quiet && *self >= threshold
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Level::parse(s))
    }
}

impl Serialize for Level {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Level {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Level::parse(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_roundtrip() {
        for level in Level::ALL {
            assert_eq!(Level::parse(level.as_str()), level);
            assert_eq!(level.to_string(), level.as_str());
        }
    }

    #[test]
    fn test_unknown_is_quiet() {
        assert_eq!(Level::parse("bogus"), Level::Quiet);
        assert_eq!(Level::parse(""), Level::Quiet);
        assert_eq!(Level::parse("  "), Level::Quiet);
        assert_eq!(Level::parse("warn-level"), Level::Quiet);
    }

    #[test]
    fn test_aliases_and_case() {
        for s in ["critical", "CRITICAL", "crit", "c", "Crit", "(critical)"] {
            assert_eq!(Level::parse(s), Level::Critical, "input {:?}", s);
        }
        assert_eq!(Level::parse("WARN"), Level::Warn);
        assert_eq!(Level::parse("Warning"), Level::Warn);
        assert_eq!(Level::parse(&"Warn_Level"[..4]), Level::Warn);
        assert_eq!(Level::parse("Err"), Level::Error);
        assert_eq!(Level::parse("OFF"), Level::Quiet);
        assert_eq!(Level::parse(" info "), Level::Info);
    }

    #[test]
    fn test_from_str_never_fails() {
        let level: Level = "nonsense".parse().unwrap();
        assert_eq!(level, Level::Quiet);
        let level: Level = "D".parse().unwrap();
        assert_eq!(level, Level::Debug);
    }

    #[test]
    fn test_ordering() {
        assert!(Level::Quiet < Level::Trace);
        assert!(Level::Trace < Level::Debug);
        assert!(Level::Info < Level::Warn);
        assert!(Level::Error < Level::Critical);
    }

    #[test]
    fn test_is_enabled_at() {
        assert!(Level::Warn.is_enabled_at(Level::Info));
        assert!(Level::Info.is_enabled_at(Level::Info));
        assert!(!Level::Debug.is_enabled_at(Level::Info));
        assert!(!Level::Critical.is_enabled_at(Level::Quiet));
        assert!(!Level::Quiet.is_enabled_at(Level::Trace));
    }

    #[test]
    fn test_serde_roundtrip() {
        let json = serde_json::to_string(&Level::Warn).unwrap();
        assert_eq!(json, "\"warn\"");

        let parsed: Level = serde_json::from_str("\"ERROR\"").unwrap();
        assert_eq!(parsed, Level::Error);

        let unknown: Level = serde_json::from_str("\"loud\"").unwrap();
        assert_eq!(unknown, Level::Quiet);
    }
}
