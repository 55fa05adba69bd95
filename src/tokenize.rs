//! Extraction of words from raw text

use regex::Regex;
use std::sync::OnceLock;

/// Word pattern: runs of Unicode word characters, plus the typographic
/// apostrophe (U+2019) so that contractions like "don’t" stay in one piece
fn word_regex() -> &'static Regex {
    static LAZY: OnceLock<Regex> = OnceLock::new();
    LAZY.get_or_init(|| {
        Regex::new(r"[\w\x{2019}]+").expect("word pattern should be a valid regex")
    })
}

/// Split text into words, in order of appearance and with original casing
pub fn tokens(text: &str) -> Vec<&str> {
    word_regex().find_iter(text).map(|m| m.as_str()).collect()
}
