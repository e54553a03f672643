//! Text analysis for plagcheck.
//!
//! Splits raw text into whitespace-delimited tokens and maps words to their
//! declared synonyms. No case folding, stemming or punctuation stripping is
//! applied: a token is exactly the run of non-whitespace characters found in
//! the source text.

pub mod synonym;
pub mod token;
pub mod tokenizer;

// Re-export commonly used types
pub use synonym::*;
pub use token::*;
pub use tokenizer::*;
