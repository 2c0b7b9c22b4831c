//! Error types for Algoscope.
//!
//! This module defines the centralized error type [`AlgoscopeError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for Algoscope operations.
///
/// Covers input validation, the sorted-input precondition of Binary and Jump
/// search, cooperative cancellation, and configuration or I/O failures in the
/// outer layers. Variants wrapping errors from external crates use `#[from]`
/// for automatic conversion.
///
/// # Examples
///
/// ```
/// use algoscope::AlgoscopeError;
///
/// fn validate_limit(max_len: usize) -> Result<(), AlgoscopeError> {
///     if max_len == 0 {
///         return Err(AlgoscopeError::Config("max length must be positive".to_string()));
///     }
///     Ok(())
/// }
///
/// assert!(validate_limit(0).is_err());
/// ```
#[derive(Debug, Error)]
pub enum AlgoscopeError {
    /// A piece of user input could not be read as an integer.
    ///
    /// The string holds the offending piece.
    #[error("Invalid input: {0:?} is not an integer")]
    InvalidInput(String),

    /// More values were supplied than the configured maximum allows.
    #[error("Sequence too long: {len} values (maximum {max})")]
    SequenceTooLong {
        /// Number of values supplied.
        len: usize,
        /// Configured maximum.
        max: usize,
    },

    /// A search that requires ascending input was handed an unsorted sequence.
    ///
    /// `index` is the first position whose successor is smaller.
    #[error("Sequence is not sorted: descent after index {index}")]
    Unsorted {
        /// First index `i` with `a[i] > a[i + 1]`.
        index: usize,
    },

    /// An algorithm name did not match any catalogue entry.
    #[error("Unknown algorithm: {0:?}")]
    UnknownAlgorithm(String),

    /// The run was cancelled through its [`CancelToken`](crate::algorithms::CancelToken).
    #[error("Run cancelled")]
    Cancelled,

    /// Configuration is invalid.
    ///
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file contained malformed TOML.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// A run transcript could not be serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized `Result` type for Algoscope operations.
///
/// This is a type alias for `std::result::Result<T, AlgoscopeError>`.
pub type Result<T> = std::result::Result<T, AlgoscopeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsorted_message_names_the_descent() {
        let err = AlgoscopeError::Unsorted { index: 2 };
        assert_eq!(err.to_string(), "Sequence is not sorted: descent after index 2");
    }

    #[test]
    fn io_errors_convert() {
        fn read() -> Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"))?;
            Ok(())
        }
        assert!(matches!(read(), Err(AlgoscopeError::Io(_))));
    }
}
