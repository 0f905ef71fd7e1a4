use super::{DictionaryStore, Strategy};
use crate::tokenizer::normalize;

/// Words kept in lexicographic order, membership by binary search.
///
/// Built one ordered insert at a time (leftmost position among equal words),
/// so a build over `n` words costs O(n²) in shifting. Lookups are O(log n).
/// Reported as "BBST" on charts.
#[derive(Debug, Clone, Default)]
pub struct SortedListStore {
    words: Vec<String>,
}

impl SortedListStore {
    #[cfg(test)]
    pub(crate) fn words(&self) -> &[String] {
        &self.words
    }

    /// Index of the first stored word that is not less than `word`.
    fn lower_bound(&self, word: &str) -> usize {
        self.words.partition_point(|w| w.as_str() < word)
    }

    fn insert(&mut self, word: String) {
        let idx = self.lower_bound(&word);
        self.words.insert(idx, word);
    }
}

impl DictionaryStore for SortedListStore {
    const STRATEGY: Strategy = Strategy::Sorted;

    fn build<I>(words: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut store = Self::default();
        for word in words {
            store.insert(normalize(word.as_ref()));
        }
        store
    }

    fn accepts(&self, word: &str) -> bool {
        let idx = self.lower_bound(word);
        // idx == len means every stored word sorts before `word`
        idx < self.words.len() && self.words[idx] == word
    }

    fn len(&self) -> usize {
        self.words.len()
    }
}
