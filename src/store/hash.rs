use super::{DictionaryStore, Strategy};
use crate::tokenizer::normalize;
use std::collections::HashSet;

/// Unordered set of words with expected O(1) membership.
#[derive(Debug, Clone, Default)]
pub struct HashSetStore {
    words: HashSet<String>,
}

impl DictionaryStore for HashSetStore {
    const STRATEGY: Strategy = Strategy::Hash;

    fn build<I>(words: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let words = words.into_iter().map(|w| normalize(w.as_ref())).collect();
        Self { words }
    }

    fn accepts(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    fn len(&self) -> usize {
        self.words.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicates_collapse() {
        let store = HashSetStore::build(["cat", "Cat", "dog"]);
        assert_eq!(store.len(), 2);
        assert!(store.accepts("cat"));
        assert!(!store.accepts("bird"));
    }
}
