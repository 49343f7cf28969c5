//! Basic facade usage example
//!
//! Demonstrates standard mode and a small field-based backend that prints
//! classified fields.
//!
//! Run with: cargo run --example basic_usage

use rust_log_facade::prelude::*;
use rust_log_facade::{info, warn};

struct PrintFields;

impl PrintFields {
    fn print(&self, level: &str, msg: &str, fields: &[Field]) {
        let rendered: Vec<String> = fields.iter().map(|f| f.to_string()).collect();
        println!("[{:5}] {} {}", level, msg, rendered.join(" "));
    }
}

impl FieldLogger for PrintFields {
    fn debug(&self, msg: &str, fields: &[Field]) {
        self.print("DEBUG", msg, fields);
    }
    fn info(&self, msg: &str, fields: &[Field]) {
        self.print("INFO", msg, fields);
    }
    fn warn(&self, msg: &str, fields: &[Field]) {
        self.print("WARN", msg, fields);
    }
    fn error(&self, msg: &str, fields: &[Field]) {
        self.print("ERROR", msg, fields);
    }
    fn fatal(&self, msg: &str, fields: &[Field]) {
        self.print("FATAL", msg, fields);
    }
}

fn main() -> Result<()> {
    println!("=== Rust Log Facade - Basic Usage Example ===\n");

    println!("1. Standard mode (no backend):");
    let std_logger = LoggerRef::None;
    info!(std_logger, "Server listening on port {}", 8080);
    warn!(std_logger, "Disk usage at {}%", 91);
    log(std_logger, Level::Quiet, "This message is discarded");

    println!("\n2. Field-based backend:");
    let registry = LoggerRegistry::new();
    registry.register("app", Backend::fields(PrintFields));
    let loggers = registry.snapshot();
    let app = loggers.by_name("app");

    info!(app, "request handled", "path", "/health", "status", 200);
    warn!(app, "odd arguments", 42, "x", "dangling");
    logf(
        app,
        Level::Error,
        "sync failed",
        &[
            Value::from(ErrorValue::msg("connection reset")),
            Value::from(ErrorValue::msg("retry budget exhausted")),
        ],
    );

    println!("\n3. Level parsing:");
    for input in ["WARNING", "crit", "(debug)", "bogus"] {
        println!("   {:>8} -> {}", input, Level::parse(input));
    }

    registry.close()?;
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
