//! Synonym-aware overlap scoring between two window sequences.
//!
//! Scoring is one-directional: it measures how many windows of the first
//! text recur in the second, so `score(a, b)` and `score(b, a)` generally
//! differ.

pub mod scorer;
pub mod variants;

pub use scorer::{OverlapReport, OverlapScorer};
pub use variants::SynonymVariants;
