//! Synonym dictionary mapping each word to the other members of its group.
//!
//! The source format is plain text: one synonym group per line, words
//! separated by single spaces. No escaping, comments or quoting.
//!
//! ```text
//! fast quick rapid
//! run jog sprint
//! ```

use std::path::Path;

use ahash::AHashMap;
use log::debug;

use crate::error::Result;
use crate::util::read_text_file;

/// Synonym dictionary built once and shared read-only afterwards.
///
/// For every group, each member maps to the *other* members of that group.
/// A word that appears in more than one group keeps only the mapping of the
/// last group it appears in; earlier associations for that word are lost.
#[derive(Debug, Clone, Default)]
pub struct SynonymDictionary {
    term_to_synonyms: AHashMap<String, Vec<String>>,
}

impl SynonymDictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a synonym dictionary from a file with one group per line.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = read_text_file(path)?;
        let dictionary = Self::parse(&content);

        debug!(
            "Loaded {} synonym entries from '{}'",
            dictionary.len(),
            path.display()
        );

        Ok(dictionary)
    }

    /// Parse synonym definitions from in-memory text.
    pub fn parse(content: &str) -> Self {
        Self::from_lines(content.lines())
    }

    /// Build a dictionary from individual definition lines.
    ///
    /// Each line is trimmed and then split on single spaces. Consecutive
    /// spaces therefore yield empty-string members; blank lines are skipped.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Self::new();

        for line in lines {
            let line = line.as_ref().trim();
            if line.is_empty() {
                continue;
            }

            let group: Vec<&str> = line.split(' ').collect();
            dictionary.add_synonym_group(group.as_slice());
        }

        dictionary
    }

    /// Build a dictionary from pre-split synonym groups.
    pub fn from_synonym_groups<I, G, S>(groups: I) -> Self
    where
        I: IntoIterator<Item = G>,
        G: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut dictionary = Self::new();
        for group in groups {
            let group: Vec<String> = group.into_iter().map(Into::into).collect();
            dictionary.add_synonym_group(group.as_slice());
        }
        dictionary
    }

    /// Add a group of mutually synonymous words.
    ///
    /// For example, adding `["big", "large", "huge"]` will create:
    /// - "big" -> ["large", "huge"]
    /// - "large" -> ["big", "huge"]
    /// - "huge" -> ["big", "large"]
    ///
    /// Existing mappings for any member are replaced, not merged. A word
    /// repeated within the group is listed once, at its first position.
    pub fn add_synonym_group<S: AsRef<str>>(&mut self, terms: &[S]) {
        for term in terms {
            let term = term.as_ref();
            let mut synonyms: Vec<String> = Vec::with_capacity(terms.len());
            for other in terms.iter().map(AsRef::as_ref) {
                if other != term && !synonyms.iter().any(|s| s == other) {
                    synonyms.push(other.to_string());
                }
            }

            if let Some(previous) = self.term_to_synonyms.insert(term.to_string(), synonyms)
                && !previous.is_empty()
            {
                debug!("Synonyms for '{term}' replaced by a later group");
            }
        }
    }

    /// Get the synonyms of `term`, or an empty slice when it is unknown.
    pub fn get_synonyms(&self, term: &str) -> &[String] {
        self.term_to_synonyms
            .get(term)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether `term` appears in any synonym group.
    pub fn contains(&self, term: &str) -> bool {
        self.term_to_synonyms.contains_key(term)
    }

    /// Number of words with a synonym mapping.
    pub fn len(&self) -> usize {
        self.term_to_synonyms.len()
    }

    /// Whether the dictionary has no mappings.
    pub fn is_empty(&self) -> bool {
        self.term_to_synonyms.is_empty()
    }
}
