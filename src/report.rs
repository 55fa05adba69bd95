//! Analysis of a whole document and presentation of the results

use crate::{
    config::AnalysisConfig,
    longest::{self, LongestWords, Palindromes},
    stopwords, tokenize,
    top::{self, TopWords},
};
use std::fmt;

/// Results of a document analysis
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Report {
    /// Number of words in the document, stopwords included
    pub total_words: usize,

    /// Most frequent words, stopwords excluded
    pub frequent_words: TopWords,

    /// Longest words, if requested
    pub longest_words: Option<LongestWords>,

    /// Longest palindromes, if requested
    pub palindromes: Option<Palindromes>,
}
//
impl Report {
    /// Run the full text analysis pipeline on a document
    pub fn analyze(text: &str, config: &AnalysisConfig) -> Self {
        let tokens = tokenize::tokens(text);
        log::debug!("Found {} words in the document", tokens.len());

        let filtered = stopwords::filter(&tokens);
        log::debug!("{} words remain after stopword removal", filtered.len());

        let frequent_words = top::pick_top_words(&filtered, config.top);
        let longest_words = config
            .longest
            .map(|n| longest::longest_words(&tokens, n.get()));
        let palindromes = config
            .palindromes
            .map(|n| longest::longest_palindromes(&tokens, n.get()));

        Self {
            total_words: tokens.len(),
            frequent_words,
            longest_words,
            palindromes,
        }
    }
}
//
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total words: {}", self.total_words)?;
        writeln!(f, "Frequent words: {}", self.frequent_words)?;
        if let Some(longest_words) = &self.longest_words {
            writeln!(f, "Longest words: {longest_words}")?;
        }
        if let Some(palindromes) = &self.palindromes {
            writeln!(f, "Longest palindromes: {palindromes}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::NonZeroUsize;

    fn analyze(text: &str, top: usize) -> Report {
        Report::analyze(
            text,
            &AnalysisConfig {
                top,
                ..AnalysisConfig::default()
            },
        )
    }

    #[test]
    fn quick_brown_fox() {
        let report = analyze("The quick brown fox. The fox runs.", 2);
        assert_eq!(report.total_words, 7);
        assert_eq!(report.frequent_words.len(), 2);
        assert_eq!(report.frequent_words.get("fox"), Some(2));
        assert_eq!(report.longest_words, None);
        assert_eq!(report.palindromes, None);
        assert_eq!(
            report.to_string(),
            "Total words: 7\nFrequent words: {fox: 2, brown: 1}\n"
        );
    }

    #[test]
    fn empty_document() {
        let report = analyze("", 10);
        assert_eq!(report.total_words, 0);
        assert!(report.frequent_words.is_empty());
        assert_eq!(report.to_string(), "Total words: 0\nFrequent words: {}\n");
    }

    #[test]
    fn only_stopwords() {
        let report = analyze("the a an", 10);
        assert_eq!(report.total_words, 3);
        assert!(report.frequent_words.is_empty());
    }

    #[test]
    fn frequent_words_cover_filtered_words() {
        let text = "You will rejoice to hear that no disaster has accompanied the \
                    commencement of an enterprise which you have regarded with such \
                    evil forebodings. I arrived here yesterday, and my first task is \
                    to assure my dear sister of my welfare.";
        let report = analyze(text, usize::MAX);
        let filtered = stopwords::filter(&tokenize::tokens(text));
        let counted = (report.frequent_words.entries().iter())
            .map(|(_word, count)| count)
            .sum::<usize>();
        assert_eq!(counted, filtered.len());
    }

    #[test]
    fn analysis_is_deterministic() {
        let text = "Beware; for I am fearless, and therefore powerful. \
                    I am alone, and miserable; fearless and alone.";
        let config = AnalysisConfig {
            top: 3,
            longest: NonZeroUsize::new(4),
            palindromes: NonZeroUsize::new(2),
        };
        let first = Report::analyze(text, &config);
        let second = Report::analyze(text, &config);
        assert_eq!(first, second);
        assert_eq!(first.to_string(), second.to_string());
    }

    #[test]
    fn optional_analyses() {
        let config = AnalysisConfig {
            top: 1,
            longest: NonZeroUsize::new(1),
            palindromes: NonZeroUsize::new(1),
        };
        let report = Report::analyze("Noon came, and the wretch saw the civic hall", &config);
        assert_eq!(
            report.to_string(),
            "Total words: 9\n\
             Frequent words: {came: 1}\n\
             Longest words: {6: [wretch]}\n\
             Longest palindromes: [civic]\n"
        );
    }
}
