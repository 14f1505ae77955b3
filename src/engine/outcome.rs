//! Values returned by engine operations

use std::fmt;

/// Why a submitted word was not accepted
///
/// These are ordinary gameplay results, not errors: the player edits the word
/// and tries again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    TooShort,
    MissingCenterLetter,
    AlreadyFound,
    NotInDictionary,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort => write!(f, "too short"),
            Self::MissingCenterLetter => write!(f, "missing the center letter"),
            Self::AlreadyFound => write!(f, "already found"),
            Self::NotInDictionary => write!(f, "not in word list"),
        }
    }
}

/// Result of submitting the current word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted {
        word: String,
        points: u32,
        is_pangram: bool,
    },
    Rejected(Rejection),
}

impl SubmitOutcome {
    #[inline]
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// The rejection reason, if the word was rejected
    #[must_use]
    pub const fn rejection(&self) -> Option<Rejection> {
        match self {
            Self::Accepted { .. } => None,
            Self::Rejected(reason) => Some(*reason),
        }
    }
}

/// Result of asking for a hint
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HintOutcome {
    /// First two letters of a word not yet found
    Available { preview: String },
    /// Every dictionary word has been found
    AllFound,
}
