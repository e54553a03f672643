//! Window extraction from raw text.

use log::debug;

use crate::analysis::synonym::SynonymDictionary;
use crate::analysis::token::Token;
use crate::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};
use crate::error::{PlagcheckError, Result};
use crate::window::annotated::{AnnotatedWord, Window};

/// The windows extracted from one text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Extraction {
    windows: Vec<Window>,
    token_count: usize,
    degenerate: bool,
}

impl Extraction {
    /// The windows, in source order.
    pub fn windows(&self) -> &[Window] {
        &self.windows
    }

    /// Consume the extraction, returning its windows.
    pub fn into_windows(self) -> Vec<Window> {
        self.windows
    }

    /// Number of whitespace-delimited tokens in the source text.
    pub fn token_count(&self) -> usize {
        self.token_count
    }

    /// Whether the tuple size equalled or exceeded the token count.
    ///
    /// A degenerate extraction holds the whole text as a single window (or no
    /// window at all for a blank text). This is a warning condition for the
    /// caller, not an error.
    pub fn is_degenerate(&self) -> bool {
        self.degenerate
    }
}

/// Splits texts into overlapping windows of `tuple_size` annotated words.
#[derive(Clone, Debug)]
pub struct WindowExtractor {
    tuple_size: usize,
    tokenizer: WhitespaceTokenizer,
}

impl WindowExtractor {
    /// Create an extractor producing windows of `tuple_size` words.
    pub fn new(tuple_size: usize) -> Result<Self> {
        if tuple_size < 1 {
            return Err(PlagcheckError::invalid_argument(
                "tuple size must be a positive integer",
            ));
        }

        Ok(WindowExtractor {
            tuple_size,
            tokenizer: WhitespaceTokenizer::new(),
        })
    }

    /// The configured window size.
    pub fn tuple_size(&self) -> usize {
        self.tuple_size
    }

    /// Extract the ordered windows of `text`, annotating every word with its
    /// synonyms from `dictionary`.
    ///
    /// Every window wraps its words independently, so a word shared by
    /// overlapping windows is annotated once per window.
    pub fn extract(&self, text: &str, dictionary: &SynonymDictionary) -> Result<Extraction> {
        let tokens: Vec<Token> = self.tokenizer.tokenize(text)?.collect();
        let token_count = tokens.len();

        if self.tuple_size >= token_count {
            debug!(
                "Tuple size {} covers all {} tokens; using a single window",
                self.tuple_size, token_count
            );

            let windows = if tokens.is_empty() {
                Vec::new()
            } else {
                vec![annotate(&tokens, dictionary)]
            };

            return Ok(Extraction {
                windows,
                token_count,
                degenerate: true,
            });
        }

        let windows: Vec<Window> = tokens
            .windows(self.tuple_size)
            .map(|run| annotate(run, dictionary))
            .collect();

        debug!(
            "Extracted {} windows of size {} from {} tokens",
            windows.len(),
            self.tuple_size,
            token_count
        );

        Ok(Extraction {
            windows,
            token_count,
            degenerate: false,
        })
    }
}

fn annotate(tokens: &[Token], dictionary: &SynonymDictionary) -> Window {
    Window::new(
        tokens
            .iter()
            .map(|token| AnnotatedWord::new(token.text.as_str(), dictionary))
            .collect(),
    )
}
