//! Mutable per-game state

use crate::core::Rank;
use rustc_hash::FxHashSet;

/// State of one game in progress
///
/// Only the rules engine mutates it; presentation reads it through accessors.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    current_word: String,
    found_words: Vec<String>,
    found_lookup: FxHashSet<String>,
    score: u32,
    rank: Rank,
    max_score: u32,
}

impl SessionState {
    /// Fresh session: nothing typed, nothing found, lowest rank
    #[must_use]
    pub fn new(max_score: u32) -> Self {
        Self {
            max_score,
            ..Self::default()
        }
    }

    #[inline]
    #[must_use]
    pub fn current_word(&self) -> &str {
        &self.current_word
    }

    /// Accepted words in the order they were found
    #[inline]
    #[must_use]
    pub fn found_words(&self) -> &[String] {
        &self.found_words
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    #[inline]
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    #[inline]
    #[must_use]
    pub const fn max_score(&self) -> u32 {
        self.max_score
    }

    #[must_use]
    pub fn has_found(&self, word: &str) -> bool {
        self.found_lookup.contains(word)
    }

    pub(crate) fn push_letter(&mut self, letter: char) {
        self.current_word.push(letter);
    }

    pub(crate) fn pop_letter(&mut self) {
        self.current_word.pop();
    }

    pub(crate) fn clear_word(&mut self) {
        self.current_word.clear();
    }

    /// Record an accepted word and clear the input
    pub(crate) fn record(&mut self, word: String, points: u32) {
        self.score = self.score.saturating_add(points);
        self.rank = Rank::for_score(self.score);
        self.found_lookup.insert(word.clone());
        self.found_words.push(word);
        self.current_word.clear();
    }
}
