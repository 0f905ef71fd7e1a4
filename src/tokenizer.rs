use crate::error::{Error, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

lazy_static! {
    static ref WORD: Regex = Regex::new(r"\b\w+\b").unwrap();
}

/// Case-normalize a word: strip surrounding whitespace and lowercase it.
pub fn normalize(word: &str) -> String {
    word.trim().to_lowercase()
}

/// Maximal runs of word characters (alphanumerics and underscore).
pub fn tokenize_line(line: &str) -> Vec<String> {
    WORD.find_iter(line).map(|m| m.as_str().to_string()).collect()
}

/// Tokenize a whole document, line by line, keeping token order.
pub fn tokenize(content: &str) -> Vec<String> {
    content.lines().flat_map(tokenize_line).collect()
}

/// Read and tokenize a text file.
pub fn tokenize_file(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|e| Error::file_access(path, e))?;

    let mut tokens = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|e| Error::file_access(path, e))?;
        tokens.extend(tokenize_line(&line));
    }

    Ok(tokens)
}

/// Synthetic text of `length` copies of one token.
pub fn synthetic_text(token: &str, length: usize) -> Vec<String> {
    vec![token.to_string(); length]
}
