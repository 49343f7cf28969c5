//! Fallback sinks for standard mode

pub mod standard;

pub use standard::{write_line, Sink};
