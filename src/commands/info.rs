//! Puzzle summary command
//!
//! Describes the puzzle without playing it: word counts, scores, pangrams and
//! which ranks are attainable.

use crate::core::{RANK_THRESHOLDS, Rank, word_length};
use crate::engine::PuzzleConfig;
use std::collections::BTreeMap;

/// Summary of a puzzle
pub struct PuzzleSummary {
    pub letters: String,
    pub center_letter: char,
    pub min_word_length: usize,
    pub total_words: usize,
    /// Words that can be typed on the board and pass the length and center checks
    pub reachable_words: usize,
    pub max_score: u32,
    pub reachable_score: u32,
    pub words_by_length: BTreeMap<usize, usize>,
    pub pangrams: Vec<String>,
    /// The puzzle's listed pangram and whether it really is one
    pub listed_pangram: Option<(String, bool)>,
    /// Ranks from lowest to highest, with their threshold and whether playable words can reach it
    pub rank_ladder: Vec<(Rank, u32, bool)>,
}

/// Summarize a puzzle
#[must_use]
pub fn summarize_puzzle(config: &PuzzleConfig) -> PuzzleSummary {
    let mut words_by_length: BTreeMap<usize, usize> = BTreeMap::new();
    for word in config.words() {
        *words_by_length.entry(word_length(word)).or_insert(0) += 1;
    }

    let reachable: Vec<&String> = config
        .words()
        .iter()
        .filter(|w| config.is_reachable(w))
        .collect();

    let max_score = config.max_score();
    let reachable_score: u32 = reachable.iter().map(|w| config.word_points(w)).sum();

    PuzzleSummary {
        letters: config.letters().iter().collect(),
        center_letter: config.center_letter(),
        min_word_length: config.min_word_length(),
        total_words: config.words().len(),
        reachable_words: reachable.len(),
        max_score,
        reachable_score,
        words_by_length,
        pangrams: config.pangrams().into_iter().map(String::from).collect(),
        listed_pangram: config
            .listed_pangram()
            .map(|w| (w.to_string(), config.is_pangram(w))),
        rank_ladder: RANK_THRESHOLDS
            .iter()
            .rev()
            .map(|&(threshold, rank)| (rank, threshold, threshold <= reachable_score))
            .collect(),
    }
}
