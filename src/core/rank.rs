//! Player rank derived from cumulative score

use std::fmt;

/// Coarse progress label for a session
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    #[default]
    Beginner,
    GoodStart,
    MovingUp,
    Good,
    Excellent,
    Genius,
}

/// Minimum score for each rank, highest first
///
/// Evaluated top-down: the first threshold the score reaches wins.
pub const RANK_THRESHOLDS: [(u32, Rank); 6] = [
    (101, Rank::Genius),
    (76, Rank::Excellent),
    (51, Rank::Good),
    (31, Rank::MovingUp),
    (16, Rank::GoodStart),
    (0, Rank::Beginner),
];

impl Rank {
    /// Rank reached with the given score
    ///
    /// # Examples
    /// ```
    /// use spelling_bee::core::Rank;
    ///
    /// assert_eq!(Rank::for_score(0), Rank::Beginner);
    /// assert_eq!(Rank::for_score(31), Rank::MovingUp);
    /// assert_eq!(Rank::for_score(250), Rank::Genius);
    /// ```
    #[must_use]
    pub fn for_score(score: u32) -> Self {
        RANK_THRESHOLDS
            .iter()
            .find(|(threshold, _)| score >= *threshold)
            .map_or(Self::Beginner, |&(_, rank)| rank)
    }

    /// Score needed to reach this rank
    #[must_use]
    pub fn threshold(self) -> u32 {
        RANK_THRESHOLDS
            .iter()
            .find(|(_, rank)| *rank == self)
            .map_or(0, |&(threshold, _)| threshold)
    }

    /// The rank after this one, or `None` at the top
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Beginner => Some(Self::GoodStart),
            Self::GoodStart => Some(Self::MovingUp),
            Self::MovingUp => Some(Self::Good),
            Self::Good => Some(Self::Excellent),
            Self::Excellent => Some(Self::Genius),
            Self::Genius => None,
        }
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::GoodStart => "Good Start",
            Self::MovingUp => "Moving Up",
            Self::Good => "Good",
            Self::Excellent => "Excellent",
            Self::Genius => "Genius",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
