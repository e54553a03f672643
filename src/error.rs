//! Error types for plagcheck.
//!
//! All fallible operations in this crate return [`PlagcheckError`] through the
//! [`Result`] alias.
//!
//! # Examples
//!
//! ```
//! use plagcheck::error::{PlagcheckError, Result};
//!
//! fn check_tuple_size(size: usize) -> Result<()> {
//!     if size < 1 {
//!         return Err(PlagcheckError::invalid_argument("tuple size must be positive"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_tuple_size(0).is_err());
//! ```

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// The main error type for plagcheck operations.
#[derive(Error, Debug)]
pub enum PlagcheckError {
    /// A synonym or text file could not be opened or read
    #[error("Problem opening file '{}': {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Invalid arguments or configuration (e.g. a tuple size below 1)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The text being checked produced no windows at all
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with PlagcheckError.
pub type Result<T> = std::result::Result<T, PlagcheckError>;

impl PlagcheckError {
    /// Create a new file read error for `path`.
    pub fn file_read<P: AsRef<Path>>(path: P, source: io::Error) -> Self {
        PlagcheckError::FileRead {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        PlagcheckError::InvalidArgument(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        PlagcheckError::InvalidArgument(format!("invalid configuration: {}", msg.into()))
    }

    /// Create a new empty input error.
    pub fn empty_input<S: Into<String>>(msg: S) -> Self {
        PlagcheckError::EmptyInput(msg.into())
    }

    /// Whether this error stems from reading an input file.
    pub fn is_io(&self) -> bool {
        matches!(self, PlagcheckError::FileRead { .. })
    }
}
