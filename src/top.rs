//! Select the most frequent words of a document

use crate::Word;
use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashMap},
    fmt,
};

/// Number of occurences of each distinct word
pub type FrequencyTable = HashMap<Word, usize>;

/// Count how many times each word occurs
pub fn count_words<S: AsRef<str>>(words: &[S]) -> FrequencyTable {
    let mut table = FrequencyTable::new();
    for word in words {
        let word = word.as_ref();
        if let Some(count) = table.get_mut(word) {
            *count += 1;
        } else {
            table.insert(word.into(), 1);
        }
    }
    table
}

/// Most frequent words, in order of decreasing occurence count
///
/// Words with the same occurence count are ordered alphabetically (by byte
/// value), which is also how ties are resolved at the selection cutoff.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TopWords(Vec<(Word, usize)>);
//
impl TopWords {
    /// Selected words and their occurence counts
    pub fn entries(&self) -> &[(Word, usize)] {
        &self.0
    }
}
//
#[cfg(test)]
impl TopWords {
    /// Number of selected words
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Truth that no word was selected
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Occurence count of a selected word, if it was selected
    pub fn get(&self, word: &str) -> Option<usize> {
        (self.0.iter())
            .find(|(selected, _count)| &**selected == word)
            .map(|(_word, count)| *count)
    }
}
//
impl fmt::Display for TopWords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (idx, (word, count)) in self.entries().iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{word}: {count}")?;
        }
        write!(f, "}}")
    }
}

/// Pick the `max_len` most frequent words from a sequence of filtered words
pub fn pick_top_words<S: AsRef<str>>(words: &[S], max_len: usize) -> TopWords {
    pick_top_entries(count_words(words), max_len)
}

/// Pick the `max_len` entries with the highest count from a frequency table
pub fn pick_top_entries(table: FrequencyTable, max_len: usize) -> TopWords {
    if max_len == 0 {
        return TopWords::default();
    }

    // Larger keys are better: higher count first, then alphabetical order. We
    // keep the best keys in a min-heap, evicting the worst one on overflow.
    let mut heap = BinaryHeap::with_capacity(max_len.min(table.len()) + 1);
    for (word, count) in table {
        heap.push(Reverse((count, Reverse(word))));
        if heap.len() > max_len {
            heap.pop();
        }
    }

    // Ascending order of Reverse<key> is descending order of key
    let entries = heap
        .into_sorted_vec()
        .into_iter()
        .map(|Reverse((count, Reverse(word)))| (word, count))
        .collect();
    TopWords(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().copied().map(Into::into).collect()
    }

    #[test]
    fn counts_every_occurence() {
        let table = count_words(&["quick", "brown", "fox", "fox", "runs"]);
        assert_eq!(table.len(), 4);
        assert_eq!(table["fox"], 2);
        assert_eq!(table["quick"], 1);
        assert_eq!(table["brown"], 1);
        assert_eq!(table["runs"], 1);
    }

    #[test]
    fn top_two_with_ties() {
        let top = pick_top_words(&words(&["quick", "brown", "fox", "fox", "runs"]), 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top.get("fox"), Some(2));
        let others = ["quick", "brown", "runs"]
            .into_iter()
            .filter(|w| top.get(w) == Some(1))
            .count();
        assert_eq!(others, 1);

        // Ties are resolved alphabetically
        assert_eq!(top.entries()[1], (Word::from("brown"), 1));
    }

    #[test]
    fn zero_requested_words() {
        assert!(pick_top_words(&["fox", "fox"], 0).is_empty());
    }

    #[test]
    fn empty_input() {
        assert!(pick_top_words::<&str>(&[], 10).is_empty());
    }

    #[test]
    fn oversized_request_returns_everything() {
        let input = words(&["ice", "ice", "ice", "sea", "sea", "north", "pole", "pole"]);
        let top = pick_top_words(&input, 100);
        assert_eq!(top.len(), 4);
        assert_eq!(top.entries().iter().map(|(_w, c)| c).sum::<usize>(), input.len());
        let table = count_words(&input);
        for (word, count) in top.entries() {
            assert_eq!(table[word], *count);
        }
    }

    #[test]
    fn entries_by_decreasing_count() {
        let input = words(&["b", "a", "c", "c", "a", "c", "d"]);
        let top = pick_top_words(&input, 3);
        assert_eq!(
            top.entries(),
            vec![(Word::from("c"), 3), (Word::from("a"), 2), (Word::from("b"), 1)]
        );
        assert_eq!(top.to_string(), "{c: 3, a: 2, b: 1}");
    }

    #[test]
    fn display_empty() {
        assert_eq!(TopWords::default().to_string(), "{}");
    }
}
