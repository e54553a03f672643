//! Synonym handling shared by window extraction and overlap scoring.

pub mod dictionary;

pub use dictionary::SynonymDictionary;
