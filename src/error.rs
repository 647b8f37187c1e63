//! Error types for the opfind library.
//!
//! Ranking itself cannot fail: an empty result is a valid outcome. Errors only
//! come from the edges of the crate, i.e. loading catalogs and configuration
//! files. All of them are represented by [`OpfindError`].
//!
//! # Examples
//!
//! ```
//! use opfind::error::{OpfindError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(OpfindError::catalog("duplicate name: Subset"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for opfind operations.
#[derive(Error, Debug)]
pub enum OpfindError {
    /// I/O errors (reading catalog or config files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Catalog construction errors (empty or duplicate names, ...)
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with OpfindError.
pub type Result<T> = std::result::Result<T, OpfindError>;

impl OpfindError {
    /// Create a new catalog error.
    pub fn catalog<S: Into<String>>(msg: S) -> Self {
        OpfindError::Catalog(msg.into())
    }

    /// Create a new config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        OpfindError::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = OpfindError::catalog("duplicate name");
        assert_eq!(error.to_string(), "Catalog error: duplicate name");

        let error = OpfindError::config("bad weight");
        assert_eq!(error.to_string(), "Config error: bad weight");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let opfind_error = OpfindError::from(io_error);

        match opfind_error {
            OpfindError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<Vec<String>>("{").unwrap_err();
        assert!(matches!(OpfindError::from(json_error), OpfindError::Json(_)));
    }
}
