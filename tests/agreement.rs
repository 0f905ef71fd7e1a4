use spellbench::store::load_word_list;
use spellbench::tokenizer::tokenize;
use spellbench::{DictionaryStore, HashSetStore, LinearListStore, SortedListStore, TrieStore};
use std::path::Path;

const WORD_LIST: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/wordlist.txt");
const SAMPLE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/example_text.txt");

#[test]
fn test_bundled_sample_agrees_across_stores() {
    let words = load_word_list(Path::new(WORD_LIST), false).unwrap();
    let text = tokenize(&std::fs::read_to_string(SAMPLE).unwrap());

    let linear = LinearListStore::build(&words).check(&text);
    let sorted = SortedListStore::build(&words).check(&text);
    let hash = HashSetStore::build(&words).check(&text);
    let trie = TrieStore::build(&words).check(&text);

    assert_eq!(linear, sorted);
    assert_eq!(linear, hash);
    assert_eq!(linear, vec!["checked", "misspeled", "listed", "data", "dictionaries"]);
    // none of the misspellings is a proper prefix of a stored word
    assert_eq!(trie, linear);
}

#[test]
fn test_trie_only_diverges_on_prefixes() {
    let words = ["spelling", "structures", "dictionary"];
    let text = ["spell", "struct", "diction", "dict", "spellings", "zzz"];

    let linear = LinearListStore::build(words).check(&text);
    let trie = TrieStore::build(words).check(&text);

    assert_eq!(linear, text.to_vec());
    assert_eq!(trie, vec!["spellings", "zzz"]);

    let store = TrieStore::build(words);
    let strict: Vec<_> = text.iter().filter(|t| !store.contains_word(t)).collect();
    assert_eq!(strict.len(), linear.len());
}
