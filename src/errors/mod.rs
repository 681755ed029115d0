//! # Error Handling
//!
//! Crate-level error types using `thiserror`. These cover startup and
//! transport-surface failures; remote API failures are normalized inside the
//! gateway layer and never surface through this type (see `crate::gateway`).

/// Custom result type for bolna-mcp operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the bolna-mcp server
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Configuration errors (missing credential, malformed base URL, ...)
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors on the stdio transport
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors on the protocol surface
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal server errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    /// Create a new internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("BOLNA_API_KEY is not set");
        assert_eq!(err.to_string(), "Configuration error: BOLNA_API_KEY is not set");

        let err = Error::internal("handler panicked");
        assert_eq!(err.to_string(), "Internal error: handler panicked");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
