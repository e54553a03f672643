//! # plagcheck
//!
//! A lightweight plagiarism-similarity estimator. Two texts are split into
//! overlapping windows ("tuples") of consecutive words, and the share of the
//! first text's windows that recur in the second is reported. Words declared
//! synonymous are interchangeable when windows are compared.
//!
//! ## Pipeline
//!
//! - [`analysis::SynonymDictionary`] maps each word to the other members of its group
//! - [`window::WindowExtractor`] turns a text into synonym-annotated windows
//! - [`overlap::OverlapScorer`] counts the windows of one text found in another
//!
//! [`checker::PlagiarismChecker`] wires the three together.

pub mod analysis;
pub mod checker;
pub mod cli;
pub mod config;
pub mod error;
pub mod overlap;
pub mod util;
pub mod window;

pub mod prelude {
    pub use crate::analysis::SynonymDictionary;
    pub use crate::checker::{ComparisonOutcome, PlagiarismChecker};
    pub use crate::config::CheckerConfig;
    pub use crate::error::{PlagcheckError, Result};
    pub use crate::overlap::{OverlapReport, OverlapScorer};
    pub use crate::window::{Extraction, Window, WindowExtractor};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
