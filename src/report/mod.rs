//! Charts for a finished sweep and the sample-file spell check.

pub mod chart;

pub use chart::{Chart, Line};

use crate::bench::{Phase, SweepReport};
use crate::error::Result;
use crate::store::{check_with, Strategy};
use crate::tokenizer::tokenize_file;
use std::path::Path;

/// Build-time and check-time charts, in that order.
pub fn charts(report: &SweepReport) -> [Chart; 2] {
    [
        Chart::from_sweep(report, Phase::Build),
        Chart::from_sweep(report, Phase::Check),
    ]
}

/// Spell-check a real text file with one store built from `word_list`.
pub fn spell_check_text_file(
    text_file: &Path,
    word_list: &Path,
    strategy: Strategy,
    skip_blank_lines: bool,
) -> Result<Vec<String>> {
    let tokens = tokenize_file(text_file)?;
    check_with(strategy, word_list, skip_blank_lines, &tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_spell_check_text_file() {
        let dir = tempdir().unwrap();
        let words = dir.path().join("wordlist.txt");
        let text = dir.path().join("example_text.txt");
        fs::write(&words, "world\nthe\nend\n").unwrap();
        fs::write(&text, "Helllo, world!\nThe end... the ENDD\n").unwrap();

        let misspelled = spell_check_text_file(&text, &words, Strategy::Linear, false).unwrap();
        assert_eq!(misspelled, vec!["Helllo", "ENDD"]);

        let misspelled = spell_check_text_file(&text, &words, Strategy::Hash, false).unwrap();
        assert_eq!(misspelled, vec!["Helllo", "ENDD"]);
    }

    #[test]
    fn test_missing_sample_file() {
        let dir = tempdir().unwrap();
        let words = dir.path().join("wordlist.txt");
        fs::write(&words, "world\n").unwrap();

        let err = spell_check_text_file(&dir.path().join("missing.txt"), &words, Strategy::Trie, false)
            .unwrap_err();
        assert!(matches!(err, Error::FileAccess { .. }));
    }
}
