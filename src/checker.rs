//! End-to-end plagiarism check between two texts.
//!
//! # Examples
//!
//! ```
//! use plagcheck::analysis::SynonymDictionary;
//! use plagcheck::checker::PlagiarismChecker;
//! use plagcheck::config::CheckerConfig;
//!
//! let dictionary = SynonymDictionary::parse("run sprint jog");
//! let checker = PlagiarismChecker::new(dictionary, CheckerConfig::default()).unwrap();
//!
//! let report = checker.compare_texts("go for a run", "go for a jog").unwrap();
//! assert_eq!(report.percent(), 100);
//! ```

use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::analysis::synonym::SynonymDictionary;
use crate::config::CheckerConfig;
use crate::error::Result;
use crate::overlap::scorer::{OverlapReport, OverlapScorer};
use crate::util::read_text_file;
use crate::window::extractor::{Extraction, WindowExtractor};

/// Result of comparing two files.
#[derive(Debug, Clone)]
pub struct ComparisonOutcome {
    /// The overlap of the first file with the second
    pub report: OverlapReport,
    /// Inputs whose token count did not exceed the tuple size
    pub degenerate_inputs: Vec<PathBuf>,
}

/// Compares texts using one synonym dictionary and window size.
///
/// The dictionary is built once and only read afterwards, so a checker can
/// run any number of comparisons.
#[derive(Debug, Clone)]
pub struct PlagiarismChecker {
    dictionary: SynonymDictionary,
    extractor: WindowExtractor,
    scorer: OverlapScorer,
    config: CheckerConfig,
}

impl PlagiarismChecker {
    /// Create a checker from a dictionary and a validated configuration.
    pub fn new(dictionary: SynonymDictionary, config: CheckerConfig) -> Result<Self> {
        config.validate()?;
        let extractor = WindowExtractor::new(config.tuple_size)?;

        Ok(PlagiarismChecker {
            dictionary,
            extractor,
            scorer: OverlapScorer::new(),
            config,
        })
    }

    /// Create a checker whose dictionary is loaded from `synonym_file`.
    pub fn from_synonym_file<P: AsRef<Path>>(
        synonym_file: P,
        config: CheckerConfig,
    ) -> Result<Self> {
        // Validate before touching the filesystem.
        config.validate()?;
        let dictionary = SynonymDictionary::load_from_file(synonym_file)?;
        Self::new(dictionary, config)
    }

    /// The synonym dictionary in use.
    pub fn dictionary(&self) -> &SynonymDictionary {
        &self.dictionary
    }

    /// The configuration in use.
    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    /// Measure how much of `text_a` recurs in `text_b`.
    pub fn compare_texts(&self, text_a: &str, text_b: &str) -> Result<OverlapReport> {
        let windows_a = self.extract(text_a, "first text")?;
        let windows_b = self.extract(text_b, "second text")?;

        self.scorer.score_report(windows_a.windows(), windows_b.windows())
    }

    /// Measure how much of the file at `path_a` recurs in the file at `path_b`.
    pub fn compare_files<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        path_a: P,
        path_b: Q,
    ) -> Result<ComparisonOutcome> {
        let (path_a, path_b) = (path_a.as_ref(), path_b.as_ref());

        let text_a = read_text_file(path_a)?;
        let text_b = read_text_file(path_b)?;

        let windows_a = self.extract(&text_a, &path_a.display().to_string())?;
        let windows_b = self.extract(&text_b, &path_b.display().to_string())?;

        let degenerate_inputs = [(path_a, &windows_a), (path_b, &windows_b)]
            .into_iter()
            .filter(|(_, extraction)| extraction.is_degenerate())
            .map(|(path, _)| path.to_path_buf())
            .collect();

        let report = self
            .scorer
            .score_report(windows_a.windows(), windows_b.windows())?;

        info!(
            "'{}' vs '{}': {} of {} windows matched",
            path_a.display(),
            path_b.display(),
            report.matched_windows,
            report.total_windows
        );

        Ok(ComparisonOutcome {
            report,
            degenerate_inputs,
        })
    }

    fn extract(&self, text: &str, source: &str) -> Result<Extraction> {
        let extraction = self.extractor.extract(text, &self.dictionary)?;
        if extraction.is_degenerate() {
            warn!("tuple size equals or exceeds text length in '{source}'");
        }
        Ok(extraction)
    }
}
