//! The four dictionary representations under comparison.
//!
//! Every store is built from a word list and answers one question per token:
//! is the normalized token accepted? [`DictionaryStore::check`] turns that
//! into the ordered list of misspelled tokens.

pub mod hash;
pub mod linear;
pub mod sorted;
pub mod trie;

pub use hash::HashSetStore;
pub use linear::LinearListStore;
pub use sorted::SortedListStore;
pub use trie::TrieStore;

use crate::error::{Error, Result};
use crate::tokenizer::normalize;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

/// Which representation to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    #[serde(alias = "list")]
    Linear,
    #[serde(alias = "bbst")]
    Sorted,
    Trie,
    #[serde(alias = "hashset", alias = "hashmap")]
    Hash,
}

impl Strategy {
    /// Sweep order. Charts and reports list strategies in this order.
    pub const ALL: [Strategy; 4] = [
        Strategy::Linear,
        Strategy::Sorted,
        Strategy::Trie,
        Strategy::Hash,
    ];

    /// Legend name used on charts.
    pub fn label(self) -> &'static str {
        match self {
            Strategy::Linear => "Linear List",
            Strategy::Sorted => "BBST",
            Strategy::Trie => "Trie",
            Strategy::Hash => "Hash Map",
        }
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "linear" | "list" => Ok(Strategy::Linear),
            "sorted" | "bbst" => Ok(Strategy::Sorted),
            "trie" => Ok(Strategy::Trie),
            "hash" | "hashset" | "hashmap" => Ok(Strategy::Hash),
            _ => Err(format!("Unknown strategy: {}", s)),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Linear => write!(f, "linear"),
            Strategy::Sorted => write!(f, "sorted"),
            Strategy::Trie => write!(f, "trie"),
            Strategy::Hash => write!(f, "hash"),
        }
    }
}

/// A built dictionary handle.
pub trait DictionaryStore: Sized {
    const STRATEGY: Strategy;

    /// Build from raw words. Each word is normalized before it is stored.
    fn build<I>(words: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>;

    /// Whether an already-normalized word is accepted as correctly spelled.
    fn accepts(&self, word: &str) -> bool;

    /// Number of stored entries.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read a word list from disk and build from it.
    fn from_path(path: &Path, skip_blank_lines: bool) -> Result<Self> {
        let words = load_word_list(path, skip_blank_lines)?;
        Ok(Self::build(words))
    }

    /// Tokens whose normalized form is not accepted, in input order and with
    /// their original casing. Duplicates are kept.
    fn check<T: AsRef<str>>(&self, text: &[T]) -> Vec<String> {
        let mut misspelled = Vec::new();
        for token in text {
            let token: &str = token.as_ref();
            if !self.accepts(&normalize(token)) {
                misspelled.push(token.to_string());
            }
        }
        misspelled
    }
}

/// Read a word list, one word per line.
///
/// Lines are returned as read; stores normalize on insert. Blank lines are
/// kept (they become the empty word) unless `skip_blank_lines` is set.
pub fn load_word_list(path: &Path, skip_blank_lines: bool) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|e| Error::file_access(path, e))?;
    let reader = BufReader::new(file);

    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|e| Error::file_access(path, e))?;
        if skip_blank_lines && line.trim().is_empty() {
            continue;
        }
        words.push(line);
    }

    Ok(words)
}

/// A built store whose strategy was picked at runtime.
#[derive(Debug, Clone)]
pub enum Dictionary {
    Linear(LinearListStore),
    Sorted(SortedListStore),
    Trie(TrieStore),
    Hash(HashSetStore),
}

impl Dictionary {
    pub fn load(strategy: Strategy, path: &Path, skip_blank_lines: bool) -> Result<Self> {
        Ok(match strategy {
            Strategy::Linear => Dictionary::Linear(LinearListStore::from_path(path, skip_blank_lines)?),
            Strategy::Sorted => Dictionary::Sorted(SortedListStore::from_path(path, skip_blank_lines)?),
            Strategy::Trie => Dictionary::Trie(TrieStore::from_path(path, skip_blank_lines)?),
            Strategy::Hash => Dictionary::Hash(HashSetStore::from_path(path, skip_blank_lines)?),
        })
    }

    pub fn strategy(&self) -> Strategy {
        match self {
            Dictionary::Linear(_) => Strategy::Linear,
            Dictionary::Sorted(_) => Strategy::Sorted,
            Dictionary::Trie(_) => Strategy::Trie,
            Dictionary::Hash(_) => Strategy::Hash,
        }
    }

    pub fn check<T: AsRef<str>>(&self, text: &[T]) -> Vec<String> {
        match self {
            Dictionary::Linear(store) => store.check(text),
            Dictionary::Sorted(store) => store.check(text),
            Dictionary::Trie(store) => store.check(text),
            Dictionary::Hash(store) => store.check(text),
        }
    }
}

/// Build the store picked at runtime from `path` and check `text` against it.
pub fn check_with(
    strategy: Strategy,
    path: &Path,
    skip_blank_lines: bool,
    text: &[String],
) -> Result<Vec<String>> {
    Ok(Dictionary::load(strategy, path, skip_blank_lines)?.check(text))
}
