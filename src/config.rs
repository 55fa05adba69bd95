//! Processing pipeline configuration

use crate::Args;
use std::num::NonZeroUsize;

/// Final process configuration
///
/// This is the result of digesting [`Args`]. Please refer to [`Args`] to know
/// more about common fields.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Config {
    /// Location of the document to be analyzed
    pub url: Box<str>,

    /// Subset of the configuration that affects the text analysis
    pub analysis: AnalysisConfig,
}
//
impl Config {
    /// Determine process configuration from CLI arguments
    pub(crate) fn new(args: Args) -> Self {
        let Args {
            url,
            top,
            longest,
            palindromes,
        } = args;
        Self {
            url,
            analysis: AnalysisConfig {
                top,
                longest,
                palindromes,
            },
        }
    }
}

/// Subset of the configuration that affects the text analysis
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct AnalysisConfig {
    /// Number of most frequent words to be reported
    pub top: usize,

    // Other fields have the same meaning as in Args
    pub longest: Option<NonZeroUsize>,
    pub palindromes: Option<NonZeroUsize>,
}
//
impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top: crate::DEFAULT_TOP_WORDS,
            longest: None,
            palindromes: None,
        }
    }
}
