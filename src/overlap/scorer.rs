//! Overlap scoring.

use ahash::AHashSet;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::error::{PlagcheckError, Result};
use crate::window::annotated::Window;

/// Outcome of comparing one window sequence against another.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OverlapReport {
    /// Windows of the first text found in the second, directly or via synonyms
    pub matched_windows: usize,
    /// Total windows in the first text
    pub total_windows: usize,
    /// `matched_windows / total_windows`, in `[0.0, 1.0]`
    pub ratio: f64,
}

impl OverlapReport {
    /// The ratio as a whole percentage, truncated toward zero.
    pub fn percent(&self) -> u32 {
        (self.ratio * 100.0) as u32
    }
}

/// Computes the fraction of windows from one text that recur in another.
///
/// A window matches when its root words equal, position by position, the
/// root words of some window of the other text, or when any synonym
/// substitution of it does. Each window counts at most once no matter how
/// many of its variants match.
#[derive(Clone, Copy, Debug, Default)]
pub struct OverlapScorer;

impl OverlapScorer {
    /// Create a new scorer.
    pub fn new() -> Self {
        OverlapScorer
    }

    /// Score `windows_a` against `windows_b`, returning the matched ratio.
    pub fn score(&self, windows_a: &[Window], windows_b: &[Window]) -> Result<f64> {
        Ok(self.score_report(windows_a, windows_b)?.ratio)
    }

    /// Score `windows_a` against `windows_b`, returning the full report.
    ///
    /// Fails with [`PlagcheckError::EmptyInput`] when `windows_a` is empty.
    pub fn score_report(
        &self,
        windows_a: &[Window],
        windows_b: &[Window],
    ) -> Result<OverlapReport> {
        if windows_a.is_empty() {
            return Err(PlagcheckError::empty_input(
                "the checked text contains no words to compare",
            ));
        }

        let comparison: AHashSet<Vec<&str>> =
            windows_b.iter().map(Window::root_sequence).collect();

        let matched_windows = windows_a
            .iter()
            .filter(|window| Self::is_match(window, &comparison))
            .count();
        let total_windows = windows_a.len();

        debug!(
            "Matched {} of {} windows against {} distinct windows",
            matched_windows,
            total_windows,
            comparison.len()
        );

        Ok(OverlapReport {
            matched_windows,
            total_windows,
            ratio: matched_windows as f64 / total_windows as f64,
        })
    }

    fn is_match(window: &Window, comparison: &AHashSet<Vec<&str>>) -> bool {
        if comparison.contains(&window.root_sequence()) {
            return true;
        }

        trace!(
            "Expanding up to {} synonym variants of '{}'",
            window.variant_count(),
            window
        );

        window.variants().any(|variant| comparison.contains(&variant))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::synonym::SynonymDictionary;
    use crate::window::extractor::WindowExtractor;

    fn windows(text: &str, size: usize, dict: &SynonymDictionary) -> Vec<Window> {
        WindowExtractor::new(size)
            .unwrap()
            .extract(text, dict)
            .unwrap()
            .into_windows()
    }

    #[test]
    fn test_identical_texts_score_one() {
        let scorer = OverlapScorer::new();
        let dict = SynonymDictionary::new();
        let text = windows("go for a jog in the park", 3, &dict);

        assert_eq!(scorer.score(&text, &text).unwrap(), 1.0);
    }

    #[test]
    fn test_identical_texts_with_synonyms_score_one() {
        let scorer = OverlapScorer::new();
        let dict = SynonymDictionary::parse("run sprint jog\npark garden");
        let text = windows("go for a jog in the park", 2, &dict);

        assert_eq!(scorer.score(&text, &text).unwrap(), 1.0);
    }

    #[test]
    fn test_disjoint_texts_score_zero() {
        let scorer = OverlapScorer::new();
        let dict = SynonymDictionary::parse("fast quick");
        let a = windows("a b c d", 2, &dict);
        let b = windows("w x y z", 2, &dict);

        assert_eq!(scorer.score(&a, &b).unwrap(), 0.0);
    }

    #[test]
    fn test_synonym_substitution_matches() {
        let scorer = OverlapScorer::new();
        let dict = SynonymDictionary::parse("fast quick rapid");
        let a = windows("the fast fox", 3, &dict);
        let b = windows("the quick fox", 3, &dict);

        assert_eq!(scorer.score(&a, &b).unwrap(), 1.0);
    }

    #[test]
    fn test_go_for_a_run() {
        let scorer = OverlapScorer::new();
        let dict = SynonymDictionary::parse("run sprint jog");
        let a = windows("go for a run", 3, &dict);
        let b = windows("go for a jog", 3, &dict);

        let report = scorer.score_report(&a, &b).unwrap();
        assert_eq!(report.matched_windows, 2);
        assert_eq!(report.total_windows, 2);
        assert_eq!(report.percent(), 100);
    }

    #[test]
    fn test_window_counts_once_with_many_matching_variants() {
        let scorer = OverlapScorer::new();
        let dict = SynonymDictionary::parse("fast quick rapid");
        let a = windows("the fast fox", 3, &dict);
        let b = windows("the quick fox the rapid fox", 3, &dict);

        let report = scorer.score_report(&a, &b).unwrap();
        assert_eq!(report.matched_windows, 1);
        assert_eq!(report.ratio, 1.0);
    }

    #[test]
    fn test_scoring_is_not_symmetric() {
        let scorer = OverlapScorer::new();
        let dict = SynonymDictionary::new();
        let a = windows("a b c", 2, &dict);
        let b = windows("a b c x y", 2, &dict);

        assert_eq!(scorer.score(&a, &b).unwrap(), 1.0);
        assert_eq!(scorer.score(&b, &a).unwrap(), 0.5);
    }

    #[test]
    fn test_windows_match_by_position() {
        let scorer = OverlapScorer::new();
        let dict = SynonymDictionary::new();
        let a = windows("a b", 2, &dict);
        let b = windows("b a", 2, &dict);

        assert_eq!(scorer.score(&a, &b).unwrap(), 0.0);
    }

    #[test]
    fn test_short_window_only_matches_equal_length() {
        let scorer = OverlapScorer::new();
        let dict = SynonymDictionary::new();
        let a = windows("a b", 3, &dict);
        let b = windows("a b c", 3, &dict);

        assert_eq!(scorer.score(&a, &b).unwrap(), 0.0);
    }

    #[test]
    fn test_partial_overlap() {
        let scorer = OverlapScorer::new();
        let dict = SynonymDictionary::new();
        let a = windows("one two three four", 2, &dict);
        let b = windows("zero one two nine", 2, &dict);

        let report = scorer.score_report(&a, &b).unwrap();
        assert_eq!(report.matched_windows, 1);
        assert_eq!(report.total_windows, 3);
        assert_eq!(report.percent(), 33);
    }

    #[test]
    fn test_empty_first_text_is_an_error() {
        let scorer = OverlapScorer::new();
        let dict = SynonymDictionary::new();
        let b = windows("a b c", 3, &dict);

        let err = scorer.score(&[], &b).unwrap_err();
        assert!(matches!(err, PlagcheckError::EmptyInput(_)));
    }

    #[test]
    fn test_empty_second_text_scores_zero() {
        let scorer = OverlapScorer::new();
        let dict = SynonymDictionary::new();
        let a = windows("a b c", 3, &dict);

        assert_eq!(scorer.score(&a, &[]).unwrap(), 0.0);
    }
}
