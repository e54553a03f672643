//! Sliding windows ("tuples") of consecutive, synonym-annotated words.
//!
//! A text of `L` tokens split with a tuple size of `n < L` yields exactly
//! `L - n + 1` overlapping windows of `n` words each, in source order. When
//! `n >= L` the whole text becomes a single, shorter window and the extraction
//! is flagged as degenerate.

pub mod annotated;
pub mod extractor;

pub use annotated::{AnnotatedWord, Window};
pub use extractor::{Extraction, WindowExtractor};
