//! Word list loading utilities
//!
//! Provides functions to read dictionary files or normalize embedded constants.

use crate::core::normalize;
use std::fs;
use std::io;
use std::path::Path;

/// Load dictionary words from a file, one word per line
///
/// Lines are trimmed and uppercased; blank lines and `#` comments are skipped.
/// Duplicates are kept here and collapsed by `PuzzleConfig`.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use spelling_bee::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/dictionary.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_word_list(&content))
}

/// Parse word list text into normalized words
#[must_use]
pub fn parse_word_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(normalize)
        .collect()
}

/// Convert an embedded string slice to owned, normalized words
///
/// # Examples
/// ```
/// use spelling_bee::wordlists::loader::words_from_slice;
/// use spelling_bee::wordlists::DICTIONARY;
///
/// let words = words_from_slice(DICTIONARY);
/// assert_eq!(words.len(), DICTIONARY.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| normalize(s.trim())).collect()
}
