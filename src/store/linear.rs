use super::{DictionaryStore, Strategy};
use crate::tokenizer::normalize;

/// Words in file order, membership by linear scan.
///
/// Duplicates are kept. This is the worst-case baseline.
#[derive(Debug, Clone, Default)]
pub struct LinearListStore {
    words: Vec<String>,
}

impl LinearListStore {
    #[cfg(test)]
    pub(crate) fn words(&self) -> &[String] {
        &self.words
    }
}

impl DictionaryStore for LinearListStore {
    const STRATEGY: Strategy = Strategy::Linear;

    fn build<I>(words: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let words = words.into_iter().map(|w| normalize(w.as_ref())).collect();
        Self { words }
    }

    fn accepts(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    fn len(&self) -> usize {
        self.words.len()
    }
}
