//! Argument classifier for field-based backends
//!
//! Turns a loose argument list into structured fields. Pre-built fields pass
//! through, the first error is keyed under `error`, and everything else is
//! paired up as alternating keys and values. Malformed input never fails
//! the call: it is reported inside the emitted record instead.

use super::value::{ErrorValue, Field, InvalidPair, Value};

/// Key for the first error argument of a call
pub const ERROR_KEY: &str = "error";

/// Key for a trailing argument with no partner
pub const IGNORED_KEY: &str = "ignored";

/// Key for the list of pairs whose key was not a string
pub const INVALID_KEY: &str = "invalid";

/// Message of the side record emitted for each error after the first
pub const MULTIPLE_ERRORS_MESSAGE: &str = "multiple errors without a key";

/// Result of classifying one call's arguments
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Classified {
    /// Fields for the main record, in argument order
    pub fields: Vec<Field>,
    /// Errors beyond the first; each becomes its own error-level record
    pub stray_errors: Vec<ErrorValue>,
}

impl Classified {
    /// Look up the first field with `key`
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.iter().find(|f| f.key == key).map(|f| &f.value)
    }
}

/// Classify an argument list into structured fields
///
/// # Example
///
/// ```
/// use rust_log_facade::core::classifier::classify;
/// use rust_log_facade::{Field, Value};
///
/// let out = classify(&[Value::from("count"), Value::from(5)]);
/// assert_eq!(out.fields, vec![Field::new("count", 5)]);
/// ```
pub fn classify(args: &[Value]) -> Classified {
    let mut out = Classified {
        fields: Vec::with_capacity(args.len() / 2 + 1),
        stray_errors: Vec::new(),
    };
    let mut invalid: Vec<InvalidPair> = Vec::new();
    let mut seen_error = false;
    let mut i = 0;

    while i < args.len() {
        match &args[i] {
            Value::Field(field) => {
                out.fields.push((**field).clone());
                i += 1;
                continue;
            }
            Value::Error(err) => {
                if seen_error {
                    out.stray_errors.push(err.clone());
                } else {
                    seen_error = true;
                    out.fields.push(Field::error(err.clone()));
                }
                i += 1;
                continue;
            }
            _ => {}
        }

        if i == args.len() - 1 {
            out.fields.push(Field::new(IGNORED_KEY, args[i].clone()));
            break;
        }

        let (key, value) = (&args[i], &args[i + 1]);
        match key {
            Value::String(k) => out.fields.push(Field::new(k.clone(), value.clone())),
            _ => invalid.push(InvalidPair {
                position: i,
                key: key.clone(),
                value: value.clone(),
            }),
        }
        i += 2;
    }

    if !invalid.is_empty() {
        let entries = invalid.into_iter().map(Value::from).collect::<Vec<_>>();
        out.fields.push(Field::new(INVALID_KEY, Value::Array(entries)));
    }

    out
}
