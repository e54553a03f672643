//! Whitespace tokenizer implementation.

use super::Tokenizer;

use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// A tokenizer that splits text on runs of whitespace.
///
/// Leading and trailing whitespace is ignored and consecutive whitespace is
/// collapsed, so no empty tokens are ever produced.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();
        let mut start: Option<usize> = None;

        for (offset, ch) in text.char_indices() {
            match (ch.is_whitespace(), start) {
                (true, Some(word_start)) => {
                    tokens.push(Token::with_offsets(
                        &text[word_start..offset],
                        tokens.len(),
                        word_start,
                        offset,
                    ));
                    start = None;
                }
                (false, None) => start = Some(offset),
                _ => {}
            }
        }

        if let Some(word_start) = start {
            tokens.push(Token::with_offsets(
                &text[word_start..],
                tokens.len(),
                word_start,
                text.len(),
            ));
        }

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_tokenizer() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("hello  world\ttest").unwrap().collect();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[1].text, "world");
        assert_eq!(tokens[2].text, "test");
        assert_eq!(tokens[2].position, 2);
    }

    #[test]
    fn test_offsets_and_surrounding_whitespace() {
        let tokenizer = WhitespaceTokenizer::new();
        let text = "\n  go  go\r\n";
        let tokens: Vec<Token> = tokenizer.tokenize(text).unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(&text[tokens[0].start_offset..tokens[0].end_offset], "go");
        assert_eq!(tokens[1].start_offset, 7);
        assert_eq!(tokens[1].end_offset, 9);
    }

    #[test]
    fn test_blank_text_has_no_tokens() {
        let tokenizer = WhitespaceTokenizer::new();
        assert_eq!(tokenizer.tokenize(" \t\n ").unwrap().count(), 0);
        assert_eq!(tokenizer.tokenize("").unwrap().count(), 0);
    }

    #[test]
    fn test_unicode_whitespace() {
        let tokenizer = WhitespaceTokenizer::new();
        let text = "été  naïve\u{3000}café";
        let tokens: Vec<String> = tokenizer.tokenize(text).unwrap().map(|t| t.text).collect();

        assert_eq!(tokens, text.split_whitespace().collect::<Vec<_>>());
        assert_eq!(tokens, vec!["été", "naïve", "café"]);
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(WhitespaceTokenizer::new().name(), "whitespace");
    }
}
