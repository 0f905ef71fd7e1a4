pub mod bench;
pub mod cli;
pub mod config;
pub mod error;
pub mod maze;
pub mod report;
pub mod runner;
pub mod store;
pub mod tokenizer;

pub use config::Config;
pub use error::{Error, Result};
pub use runner::{run_benchmark, BenchmarkOutcome, RunOptions};
pub use store::{
    Dictionary, DictionaryStore, HashSetStore, LinearListStore, SortedListStore, Strategy, TrieStore,
};
