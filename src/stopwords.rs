//! Common English words which carry no interesting meaning on their own

use crate::Word;
use std::{collections::HashSet, sync::OnceLock};

/// Words that are excluded from frequency analysis
const STOPWORDS: &[&str] = &[
    "a", "able", "about", "across", "after", "all", "almost", "also", "am", "among", "an",
    "and", "any", "are", "as", "at", "be", "because", "been", "before", "but", "by", "can",
    "cannot", "could", "dear", "did", "do", "does", "either", "else", "even", "ever", "every",
    "for", "from", "get", "got", "had", "has", "have", "he", "her", "hers", "him", "his", "how",
    "however", "i", "if", "in", "into", "is", "it", "its", "just", "least", "let", "like",
    "likely", "may", "me", "might", "more", "most", "must", "my", "neither", "no", "nor", "not",
    "now", "of", "off", "often", "on", "one", "only", "or", "other", "our", "own", "rather",
    "said", "says", "shall", "she", "should", "since", "so", "some", "than", "that", "the",
    "their", "them", "then", "there", "these", "they", "this", "those", "through", "to", "too",
    "upon", "us", "wants", "was", "we", "were", "what", "when", "where", "which", "while", "who",
    "whom", "why", "will", "with", "would", "yet", "you", "your",
];

/// Lookup table for [`STOPWORDS`], built on first use
fn stopword_set() -> &'static HashSet<&'static str> {
    static LAZY: OnceLock<HashSet<&'static str>> = OnceLock::new();
    LAZY.get_or_init(|| STOPWORDS.iter().copied().collect())
}

/// Truth that the lowercase form of a word is a stopword
pub fn is_stopword(word: &str) -> bool {
    stopword_set().contains(word.to_lowercase().as_str())
}

/// Lowercase a sequence of tokens and drop the stopwords
///
/// Surviving words are kept in their original order, repeated occurences
/// included.
pub fn filter<S: AsRef<str>>(tokens: &[S]) -> Vec<Word> {
    tokens
        .iter()
        .map(|token| token.as_ref().to_lowercase())
        .filter(|word| {
            let rejected = stopword_set().contains(word.as_str());
            if rejected {
                log::trace!("Rejected stopword {word:?}");
            }
            !rejected
        })
        .map(String::into_boxed_str)
        .collect()
}
