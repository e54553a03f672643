//! Annotated words and the windows built from them.

use std::fmt;

use crate::analysis::synonym::SynonymDictionary;
use crate::overlap::variants::SynonymVariants;

/// A token paired with every word it may be substituted by.
///
/// The candidate list always starts with the root word itself, followed by
/// its synonyms in dictionary order. Duplicates are dropped so the list
/// behaves as a set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnnotatedWord {
    root: String,
    candidates: Vec<String>,
}

impl AnnotatedWord {
    /// Wrap `root` with a snapshot of its synonyms from `dictionary`.
    pub fn new<S: Into<String>>(root: S, dictionary: &SynonymDictionary) -> Self {
        let root = root.into();
        let synonyms = dictionary.get_synonyms(&root);

        let mut candidates = Vec::with_capacity(synonyms.len() + 1);
        candidates.push(root.clone());
        for synonym in synonyms {
            if !candidates.contains(synonym) {
                candidates.push(synonym.clone());
            }
        }

        AnnotatedWord { root, candidates }
    }

    /// The word as it appears in the source text.
    pub fn root(&self) -> &str {
        &self.root
    }

    /// The root word followed by its distinct synonyms.
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// Whether the dictionary knew any synonym for this word.
    pub fn has_synonyms(&self) -> bool {
        self.candidates.len() > 1
    }
}

impl fmt::Display for AnnotatedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root)
    }
}

/// An ordered run of consecutive annotated words from one text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Window {
    words: Vec<AnnotatedWord>,
}

impl Window {
    /// Create a window from already annotated words.
    pub fn new(words: Vec<AnnotatedWord>) -> Self {
        Window { words }
    }

    /// Number of words in this window.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the window holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The annotated words, in source order.
    pub fn words(&self) -> &[AnnotatedWord] {
        &self.words
    }

    /// The root words, in source order, without synonym annotations.
    pub fn root_sequence(&self) -> Vec<&str> {
        self.words.iter().map(AnnotatedWord::root).collect()
    }

    /// Lazily enumerate every synonym substitution of this window.
    ///
    /// The first variant is always the root sequence itself.
    pub fn variants(&self) -> SynonymVariants<'_> {
        SynonymVariants::new(self.words.iter().map(AnnotatedWord::candidates).collect())
    }

    /// Number of variants [`Window::variants`] yields, saturating at `usize::MAX`.
    pub fn variant_count(&self) -> usize {
        self.words
            .iter()
            .fold(1usize, |acc, word| acc.saturating_mul(word.candidates.len()))
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root_sequence().join(" "))
    }
}
