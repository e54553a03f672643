//! Configuration for plagiarism checks.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PlagcheckError, Result};
use crate::util::read_text_file;

/// Window size used when none is given.
pub const DEFAULT_TUPLE_SIZE: usize = 3;

/// Configuration for a [`PlagiarismChecker`](crate::checker::PlagiarismChecker).
///
/// Can be loaded from JSON; missing fields take their defaults.
///
/// ```json
/// { "tuple_size": 4 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckerConfig {
    /// Number of consecutive words in each compared window.
    ///
    /// The cost of synonym expansion grows with the product of synonym group
    /// sizes across a window, so this should stay small (2 to 5).
    pub tuple_size: usize,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            tuple_size: DEFAULT_TUPLE_SIZE,
        }
    }
}

impl CheckerConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the window size.
    pub fn with_tuple_size(mut self, tuple_size: usize) -> Self {
        self.tuple_size = tuple_size;
        self
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = read_text_file(path)?;
        let config: CheckerConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every value is usable.
    pub fn validate(&self) -> Result<()> {
        if self.tuple_size < 1 {
            return Err(PlagcheckError::invalid_config(
                "tuple_size must be a positive integer",
            ));
        }
        Ok(())
    }
}
