use super::{DictionaryStore, Strategy};
use crate::tokenizer::normalize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: BTreeMap<char, TrieNode>,
    is_word: bool,
}

/// Character trie.
///
/// Lookup cost depends on the token length only. Note that [`accepts`]
/// treats a token as correctly spelled as soon as every character is matched
/// by an existing edge, whether or not a stored word ends there: with only
/// "application" stored, "appl" is accepted. The same holds for the empty
/// word (a blank or whitespace-only token), which every trie accepts, even an
/// empty one. [`contains_word`] is the exact membership test.
///
/// [`accepts`]: DictionaryStore::accepts
/// [`contains_word`]: TrieStore::contains_word
#[derive(Debug, Clone, Default)]
pub struct TrieStore {
    root: TrieNode,
    len: usize,
}

impl TrieStore {
    fn insert(&mut self, word: &str) {
        let mut node = &mut self.root;
        for ch in word.chars() {
            node = node.children.entry(ch).or_default();
        }
        if !node.is_word {
            node.is_word = true;
            self.len += 1;
        }
    }

    /// Follow `word` from the root, stopping at the first missing edge.
    fn walk(&self, word: &str) -> Option<&TrieNode> {
        word.chars()
            .try_fold(&self.root, |node, ch| node.children.get(&ch))
    }

    /// Exact membership: the walk must end on a node that terminates a word.
    pub fn contains_word(&self, word: &str) -> bool {
        self.walk(word).is_some_and(|node| node.is_word)
    }

    /// Stored words in lexicographic (per character) order.
    pub fn words(&self) -> Vec<String> {
        let mut words = Vec::with_capacity(self.len);
        let mut prefix = String::new();
        collect(&self.root, &mut prefix, &mut words);
        words
    }
}

fn collect(node: &TrieNode, prefix: &mut String, out: &mut Vec<String>) {
    if node.is_word {
        out.push(prefix.clone());
    }
    for (&ch, child) in &node.children {
        prefix.push(ch);
        collect(child, prefix, out);
        prefix.pop();
    }
}

impl DictionaryStore for TrieStore {
    const STRATEGY: Strategy = Strategy::Trie;

    fn build<I>(words: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut store = Self::default();
        for word in words {
            store.insert(&normalize(word.as_ref()));
        }
        store
    }

    fn accepts(&self, word: &str) -> bool {
        self.walk(word).is_some()
    }

    fn len(&self) -> usize {
        self.len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_is_not_a_word() {
        let trie = TrieStore::build(["application"]);
        assert!(trie.contains_word("application"));
        assert!(!trie.contains_word("appl"));
        assert!(!trie.contains_word("applications"));
    }

    #[test]
    fn test_accepts_any_reachable_prefix() {
        let trie = TrieStore::build(["application"]);
        assert!(trie.accepts("appl"));
        assert!(trie.accepts("application"));
        assert!(!trie.accepts("apply"));
        assert!(!trie.accepts("applications"));
        // zero characters to consume
        assert!(trie.accepts(""));
    }

    #[test]
    fn test_empty_trie_accepts_blank_token() {
        let trie = TrieStore::build(Vec::<String>::new());
        assert!(trie.check(&["   ", ""]).is_empty());
        assert_eq!(trie.check(&["word"]), vec!["word"]);
        assert!(!trie.contains_word(""));
    }

    #[test]
    fn test_shared_prefixes_keep_flags() {
        let trie = TrieStore::build(["car", "cart", "Carton", "car"]);
        assert_eq!(trie.len(), 3);
        assert!(trie.contains_word("car"));
        assert!(trie.contains_word("cart"));
        assert!(!trie.contains_word("carto"));
        assert_eq!(trie.words(), vec!["car", "cart", "carton"]);
    }

    #[test]
    fn test_non_ascii_words() {
        let trie = TrieStore::build(["Café", "naïve"]);
        assert!(trie.contains_word("café"));
        assert!(trie.contains_word("naïve"));
        assert!(!trie.accepts("cafe"));
    }
}
