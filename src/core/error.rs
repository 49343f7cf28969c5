//! Error types for the facade's collaborator-facing operations
//!
//! Logging calls themselves never fail. These errors surface from backend
//! flushes, registry shutdown and standard-stream writes.

pub type Result<T> = std::result::Result<T, FacadeError>;

#[derive(Debug, thiserror::Error)]
pub enum FacadeError {
    /// A standard-mode sink could not be written
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A backend failed to flush buffered output
    #[error("Flush failed for backend '{backend}': {message}")]
    Flush { backend: String, message: String },

    /// A registered logger failed to close
    #[error("Failed to close logger '{name}': {message}")]
    Close { name: String, message: String },
}

impl FacadeError {
    /// Create a flush error
    pub fn flush(backend: impl Into<String>, message: impl Into<String>) -> Self {
        FacadeError::Flush {
            backend: backend.into(),
            message: message.into(),
        }
    }

    /// Create a close error
    pub fn close(name: impl Into<String>, message: impl Into<String>) -> Self {
        FacadeError::Close {
            name: name.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FacadeError::flush("seelog", "buffer closed");
        assert_eq!(
            err.to_string(),
            "Flush failed for backend 'seelog': buffer closed"
        );

        let err = FacadeError::close("audit", "already closed");
        assert_eq!(err.to_string(), "Failed to close logger 'audit': already closed");
    }

    #[test]
    fn test_io_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: FacadeError = io_err.into();
        assert!(matches!(err, FacadeError::Io(_)));
        assert!(err.to_string().contains("pipe closed"));
    }
}
