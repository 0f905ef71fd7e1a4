use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use spellbench::store::load_word_list;
use spellbench::tokenizer::{synthetic_text, tokenize};
use spellbench::{DictionaryStore, HashSetStore, LinearListStore, SortedListStore, TrieStore};
use std::path::Path;

const WORD_LIST: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/wordlist.txt");
const SAMPLE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/example_text.txt");

fn bench_build(c: &mut Criterion) {
    let words = load_word_list(Path::new(WORD_LIST), false).unwrap();
    let mut group = c.benchmark_group("build");
    group.throughput(Throughput::Elements(words.len() as u64));

    group.bench_function("linear", |b| b.iter(|| LinearListStore::build(black_box(&words))));
    group.bench_function("sorted", |b| b.iter(|| SortedListStore::build(black_box(&words))));
    group.bench_function("trie", |b| b.iter(|| TrieStore::build(black_box(&words))));
    group.bench_function("hash", |b| b.iter(|| HashSetStore::build(black_box(&words))));

    group.finish();
}

fn check_group<S: DictionaryStore>(c: &mut Criterion, words: &[String]) {
    let store = S::build(words);
    let mut group = c.benchmark_group(format!("check/{}", S::STRATEGY));

    for length in [1000, 5000, 10000] {
        let text = synthetic_text("word", length);
        group.throughput(Throughput::Elements(length as u64));
        group.bench_with_input(BenchmarkId::from_parameter(length), &text, |b, text| {
            b.iter(|| store.check(black_box(text)))
        });
    }

    let sample = tokenize(&std::fs::read_to_string(SAMPLE).unwrap());
    group.bench_function("sample", |b| b.iter(|| store.check(black_box(&sample))));

    group.finish();
}

fn bench_check(c: &mut Criterion) {
    let words = load_word_list(Path::new(WORD_LIST), false).unwrap();
    check_group::<LinearListStore>(c, &words);
    check_group::<SortedListStore>(c, &words);
    check_group::<TrieStore>(c, &words);
    check_group::<HashSetStore>(c, &words);
}

criterion_group!(benches, bench_build, bench_check);
criterion_main!(benches);
