//! Letter board shown to the player
//!
//! Display order only: shuffling never changes which letter is mandatory.

use crate::engine::PuzzleConfig;
use rand::Rng;
use rand::seq::SliceRandom;

/// The center letter plus the six outer letters in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterBoard {
    center: char,
    outer: Vec<char>,
}

impl LetterBoard {
    #[must_use]
    pub fn new(config: &PuzzleConfig) -> Self {
        let center = config.center_letter();
        Self {
            center,
            outer: config
                .letters()
                .iter()
                .copied()
                .filter(|&c| c != center)
                .collect(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn center(&self) -> char {
        self.center
    }

    #[inline]
    #[must_use]
    pub fn outer(&self) -> &[char] {
        &self.outer
    }

    /// Reorder the outer letters (Fisher-Yates)
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.outer.shuffle(rng);
    }
}
