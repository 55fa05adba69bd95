//! Length-based curiosities: longest words and longest palindromes

use crate::{stopwords, Word};
use std::{
    cmp::Reverse,
    collections::{BTreeMap, HashSet},
    fmt,
};

/// Longest distinct words, grouped by length in characters
///
/// Groups are enumerated by decreasing length, and words within a group are
/// sorted alphabetically.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LongestWords(BTreeMap<Reverse<usize>, Vec<Word>>);
//
impl LongestWords {
    /// Iterate over (length, words) groups, longest first
    pub fn groups(&self) -> impl Iterator<Item = (usize, &[Word])> + '_ {
        (self.0.iter()).map(|(Reverse(len), words)| (*len, &words[..]))
    }
}
//
impl fmt::Display for LongestWords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (idx, (len, words)) in self.groups().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{len}: ")?;
            write_list(f, words)?;
        }
        write!(f, "}}")
    }
}

/// Longest distinct palindromes, longest first
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Palindromes(Vec<Word>);
//
impl Palindromes {
    /// Palindromes by decreasing length
    pub fn words(&self) -> &[Word] {
        &self.0
    }
}
//
impl fmt::Display for Palindromes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, self.words())
    }
}

/// Display a list of words as `[a, b, c]`
fn write_list(f: &mut fmt::Formatter<'_>, words: &[Word]) -> fmt::Result {
    write!(f, "[")?;
    for (idx, word) in words.iter().enumerate() {
        if idx > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{word}")?;
    }
    write!(f, "]")
}

/// Find the `max_len` longest distinct words among a document's tokens
///
/// Stopwords are not excluded here, but casing is ignored.
pub fn longest_words<S: AsRef<str>>(tokens: &[S], max_len: usize) -> LongestWords {
    let mut groups = BTreeMap::<_, Vec<Word>>::new();
    for word in take_longest(distinct_lowercase(tokens), max_len) {
        groups.entry(Reverse(char_len(&word))).or_default().push(word);
    }
    LongestWords(groups)
}

/// Find the `max_len` longest distinct palindromes that are not stopwords
pub fn longest_palindromes<S: AsRef<str>>(tokens: &[S], max_len: usize) -> Palindromes {
    let candidates = distinct_lowercase(tokens)
        .into_iter()
        .filter(|word| !stopwords::is_stopword(word) && is_palindrome(word))
        .collect();
    Palindromes(take_longest(candidates, max_len))
}

/// Truth that a word reads the same in both directions
pub fn is_palindrome(word: &str) -> bool {
    word.chars().eq(word.chars().rev())
}

/// Lowercase tokens and deduplicate them
fn distinct_lowercase<S: AsRef<str>>(tokens: &[S]) -> HashSet<Word> {
    (tokens.iter())
        .map(|token| token.as_ref().to_lowercase().into_boxed_str())
        .collect()
}

/// Sort words by decreasing length (then alphabetically) and keep the first
/// `max_len` ones
fn take_longest(words: HashSet<Word>, max_len: usize) -> Vec<Word> {
    let mut words = words.into_iter().collect::<Vec<_>>();
    words.sort_unstable_by(|a, b| char_len(b).cmp(&char_len(a)).then_with(|| a.cmp(b)));
    words.truncate(max_len);
    words
}

/// Length of a word in characters
fn char_len(word: &str) -> usize {
    word.chars().count()
}
