//! Error types for the pain.001 element builders.

use thiserror::Error;

/// Result type alias for builder operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while constructing a message element.
///
/// A builder either returns a fully valid element or one of these; no
/// partially built element is ever handed out.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Input violates a schema constraint (length bound, BIC pattern, IBAN check).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A validation facility could not be initialized. Not caused by input.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl Error {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Error::InvalidArgument(message.into())
    }

    /// Whether the error was caused by the caller's input.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }
}
