//! Timing driver: build a store from the word list, check a synthetic text,
//! and record how long each phase took.

pub mod sweep;

pub use sweep::{run_sweep, LengthRange, Phase, Series, SweepReport};

use crate::error::Result;
use crate::store::{
    DictionaryStore, HashSetStore, LinearListStore, SortedListStore, Strategy, TrieStore,
};
use crate::tokenizer::synthetic_text;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Instant;

/// Inputs shared by every measurement of a run.
#[derive(Debug, Clone, Copy)]
pub struct Workload<'a> {
    pub word_list: &'a Path,
    pub skip_blank_lines: bool,
    /// Token repeated to form the synthetic text.
    pub token: &'a str,
}

/// Wall-clock durations of one build and one check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Timing {
    pub build_secs: f64,
    pub check_secs: f64,
    /// Tokens reported misspelled by the check.
    pub misspelled: usize,
}

/// Time a fresh build of `S` and one check over `text_length` tokens.
///
/// The build includes reading the word list, so a missing file surfaces here.
pub fn measure<S: DictionaryStore>(workload: &Workload<'_>, text_length: usize) -> Result<Timing> {
    let start = Instant::now();
    let store = S::from_path(workload.word_list, workload.skip_blank_lines)?;
    let build_secs = start.elapsed().as_secs_f64();

    let text = synthetic_text(workload.token, text_length);

    let start = Instant::now();
    let misspelled = store.check(&text);
    let check_secs = start.elapsed().as_secs_f64();

    Ok(Timing {
        build_secs,
        check_secs,
        misspelled: misspelled.len(),
    })
}

/// [`measure`] for a strategy chosen at runtime.
pub fn measure_strategy(
    strategy: Strategy,
    workload: &Workload<'_>,
    text_length: usize,
) -> Result<Timing> {
    match strategy {
        Strategy::Linear => measure::<LinearListStore>(workload, text_length),
        Strategy::Sorted => measure::<SortedListStore>(workload, text_length),
        Strategy::Trie => measure::<TrieStore>(workload, text_length),
        Strategy::Hash => measure::<HashSetStore>(workload, text_length),
    }
}
