//! Standard-mode sinks used when no backend is supplied

use crate::core::{interpolate::interpolate, Level, Result, Value};
use std::io::{self, Write};

/// Destination stream for standard mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sink {
    Discard,
    Stdout,
    Stderr,
}

impl Sink {
    /// Route a level to its stream
    ///
    /// Quiet is discarded, Trace through Info go to stdout, and Warn through
    /// Critical go to stderr.
    pub fn for_level(level: Level) -> Self {
        match level {
            Level::Quiet => Sink::Discard,
            Level::Trace | Level::Debug | Level::Info => Sink::Stdout,
            Level::Warn | Level::Error | Level::Critical => Sink::Stderr,
        }
    }

    /// Stream name used in diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            Sink::Discard => "discard",
            Sink::Stdout => "stdout",
            Sink::Stderr => "stderr",
        }
    }

    /// Write one interpolated line to the process stream for this sink
    ///
    /// Discard never fails.
    pub fn emit(&self, msg: &str, args: &[Value]) -> Result<()> {
        match self {
            Sink::Discard => write_line(&mut io::sink(), msg, args),
            Sink::Stdout => write_line(&mut io::stdout().lock(), msg, args),
            Sink::Stderr => write_line(&mut io::stderr().lock(), msg, args),
        }
    }
}

/// Interpolate `msg` with `args` and write it to `out` as a single line
pub fn write_line(out: &mut dyn Write, msg: &str, args: &[Value]) -> Result<()> {
    let mut line = interpolate(msg, args);
    line.push('\n');
    out.write_all(line.as_bytes())?;
    Ok(())
}
