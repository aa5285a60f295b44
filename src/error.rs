//! Error types for porter-stem.
//!
//! Stemming itself never fails: [`crate::porter::stem`] is total over every
//! input string. The errors here belong to the layers around it, such as
//! loading a [`StemmerConfig`](crate::config::StemmerConfig), reading a
//! reference vocabulary, or driving the command line interface.
//!
//! # Examples
//!
//! ```
//! use porter_stem::error::{StemError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(StemError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The error type for the fallible parts of porter-stem.
#[derive(Error, Debug)]
pub enum StemError {
    /// I/O errors (reading config or vocabulary files, stdin)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// Reference vocabulary errors (misaligned files, malformed lines)
    #[error("Vocabulary error: {0}")]
    Vocabulary(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with StemError.
pub type Result<T> = std::result::Result<T, StemError>;

impl StemError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        StemError::Config(msg.into())
    }

    /// Create a new vocabulary error.
    pub fn vocabulary<S: Into<String>>(msg: S) -> Self {
        StemError::Vocabulary(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        StemError::InvalidArgument(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        StemError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = StemError::config("min_length must be at least 1");
        assert_eq!(
            error.to_string(),
            "Config error: min_length must be at least 1"
        );

        let error = StemError::vocabulary("line counts differ");
        assert_eq!(error.to_string(), "Vocabulary error: line counts differ");

        let error = StemError::invalid_argument("no words given");
        assert_eq!(error.to_string(), "Invalid argument: no words given");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let stem_error = StemError::from(io_error);

        match stem_error {
            StemError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(StemError::from(json_error), StemError::Json(_)));
    }
}
