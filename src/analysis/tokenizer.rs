//! Tokenizer implementations for text analysis.
//!
//! # Examples
//!
//! ```
//! use plagcheck::analysis::tokenizer::Tokenizer;
//! use plagcheck::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let tokenizer = WhitespaceTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("the  quick\tfox").unwrap().collect();
//! assert_eq!(tokens.len(), 3);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so a tokenizer can be shared between
/// independent comparisons.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod whitespace;

pub use whitespace::WhitespaceTokenizer;
