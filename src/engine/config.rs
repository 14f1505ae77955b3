//! Puzzle configuration
//!
//! The immutable description of one puzzle: its letters, mandatory letter,
//! minimum word length and accepted words.

use crate::core::{is_pangram, normalize, word_length, word_points};
use crate::wordlists::{CENTER_LETTER, DICTIONARY, LETTERS, LISTED_PANGRAM, MIN_WORD_LENGTH};
use log::{debug, info, warn};
use rustc_hash::FxHashSet;
use std::fmt;

/// Number of letters in every puzzle
pub const LETTER_COUNT: usize = 7;

/// Error type for invalid puzzle configurations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    WrongLetterCount(usize),
    InvalidLetter(char),
    DuplicateLetter(char),
    CenterNotInLetters(char),
    ZeroMinWordLength,
    EmptyDictionary,
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLetterCount(count) => {
                write!(f, "Puzzle must have exactly {LETTER_COUNT} letters, got {count}")
            }
            Self::InvalidLetter(letter) => write!(f, "'{letter}' is not a letter"),
            Self::DuplicateLetter(letter) => write!(f, "Letter '{letter}' appears more than once"),
            Self::CenterNotInLetters(letter) => {
                write!(f, "Center letter '{letter}' is not one of the puzzle letters")
            }
            Self::ZeroMinWordLength => write!(f, "Minimum word length must be at least 1"),
            Self::EmptyDictionary => write!(f, "Dictionary contains no words"),
        }
    }
}

impl std::error::Error for PuzzleError {}

/// An immutable Spelling Bee puzzle
///
/// Words are stored uppercase, de-duplicated, in first-seen order.
#[derive(Debug, Clone)]
pub struct PuzzleConfig {
    letters: [char; LETTER_COUNT],
    center_letter: char,
    min_word_length: usize,
    words: Vec<String>,
    lookup: FxHashSet<String>,
    listed_pangram: Option<String>,
}

impl PuzzleConfig {
    /// Build a puzzle, validating its letters and dictionary
    ///
    /// Dictionary words that could never be accepted (missing the center letter,
    /// using other letters, or too short) are kept but logged.
    ///
    /// # Errors
    /// Returns `PuzzleError` if:
    /// - There are not exactly seven letters, or one is repeated or not alphabetic
    /// - The center letter is not one of the letters
    /// - The minimum word length is zero
    /// - The dictionary is empty after normalization
    ///
    /// # Examples
    /// ```
    /// use spelling_bee::engine::PuzzleConfig;
    ///
    /// let config = PuzzleConfig::new("TARSPIN".chars(), 's', 4, ["spin", "SNAP"]).unwrap();
    /// assert_eq!(config.center_letter(), 'S');
    /// assert!(config.contains_word("SPIN"));
    ///
    /// assert!(PuzzleConfig::new("TARSPIN".chars(), 'E', 4, ["SPIN"]).is_err());
    /// ```
    pub fn new<L, D, W>(
        letters: L,
        center_letter: char,
        min_word_length: usize,
        dictionary: D,
    ) -> Result<Self, PuzzleError>
    where
        L: IntoIterator<Item = char>,
        D: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let letters: Vec<char> = letters
            .into_iter()
            .map(|c| c.to_ascii_uppercase())
            .collect();

        if letters.len() != LETTER_COUNT {
            return Err(PuzzleError::WrongLetterCount(letters.len()));
        }

        let mut seen = FxHashSet::default();
        for &letter in &letters {
            if !letter.is_ascii_alphabetic() {
                return Err(PuzzleError::InvalidLetter(letter));
            }
            if !seen.insert(letter) {
                return Err(PuzzleError::DuplicateLetter(letter));
            }
        }

        let center_letter = center_letter.to_ascii_uppercase();
        if !seen.contains(&center_letter) {
            return Err(PuzzleError::CenterNotInLetters(center_letter));
        }

        if min_word_length == 0 {
            return Err(PuzzleError::ZeroMinWordLength);
        }

        let letters: [char; LETTER_COUNT] = letters
            .try_into()
            .map_err(|v: Vec<char>| PuzzleError::WrongLetterCount(v.len()))?;

        let mut words = Vec::new();
        let mut lookup = FxHashSet::default();
        for word in dictionary {
            let word = normalize(word.as_ref().trim());
            if word.is_empty() {
                continue;
            }
            if lookup.insert(word.clone()) {
                words.push(word);
            } else {
                debug!("Dropping duplicate dictionary word {word}");
            }
        }

        if words.is_empty() {
            return Err(PuzzleError::EmptyDictionary);
        }

        let config = Self {
            letters,
            center_letter,
            min_word_length,
            words,
            lookup,
            listed_pangram: None,
        };

        let unreachable = config
            .words
            .iter()
            .filter(|w| !config.is_reachable(w))
            .inspect(|w| warn!("Dictionary word {w} can never be accepted"))
            .count();

        info!(
            "Puzzle {} (center {}): {} words, {} unreachable, max score {}",
            config.letters.iter().collect::<String>(),
            config.center_letter,
            config.words.len(),
            unreachable,
            config.max_score()
        );

        Ok(config)
    }

    /// The built-in TARSPIN puzzle
    ///
    /// # Errors
    /// Returns `PuzzleError` only if the embedded data is inconsistent.
    pub fn builtin() -> Result<Self, PuzzleError> {
        Self::new(LETTERS, CENTER_LETTER, MIN_WORD_LENGTH, DICTIONARY)
            .map(|config| config.with_listed_pangram(LISTED_PANGRAM))
    }

    /// Attach the pangram label shipped with the puzzle data
    ///
    /// The label is informational; scoring always uses [`Self::is_pangram`].
    #[must_use]
    pub fn with_listed_pangram(mut self, word: &str) -> Self {
        let word = normalize(word.trim());
        if !is_pangram(&word, &self.letters) {
            info!("Listed pangram {word} does not use every puzzle letter");
        }
        self.listed_pangram = Some(word);
        self
    }

    /// The seven puzzle letters, in configured order
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[char; LETTER_COUNT] {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub const fn center_letter(&self) -> char {
        self.center_letter
    }

    #[inline]
    #[must_use]
    pub const fn min_word_length(&self) -> usize {
        self.min_word_length
    }

    /// All accepted words, de-duplicated, in first-seen order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn listed_pangram(&self) -> Option<&str> {
        self.listed_pangram.as_deref()
    }

    /// Check if the letter is one of the seven puzzle letters (case-insensitive)
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.letters.contains(&letter.to_ascii_uppercase())
    }

    /// Check dictionary membership of an already-normalized word
    #[inline]
    #[must_use]
    pub fn contains_word(&self, word: &str) -> bool {
        self.lookup.contains(word)
    }

    #[must_use]
    pub fn is_long_enough(&self, word: &str) -> bool {
        word_length(word) >= self.min_word_length
    }

    #[must_use]
    pub fn has_center_letter(&self, word: &str) -> bool {
        word.contains(self.center_letter)
    }

    /// Check whether a word could ever be typed and accepted with this puzzle's letters
    #[must_use]
    pub fn is_reachable(&self, word: &str) -> bool {
        self.is_long_enough(word)
            && self.has_center_letter(word)
            && word.chars().all(|c| self.letters.contains(&c))
    }

    /// Check whether the word uses all seven letters
    #[must_use]
    pub fn is_pangram(&self, word: &str) -> bool {
        is_pangram(word, &self.letters)
    }

    /// Points the word is worth in this puzzle
    #[must_use]
    pub fn word_points(&self, word: &str) -> u32 {
        word_points(word, &self.letters)
    }

    /// Sum of the points of every dictionary word
    #[must_use]
    pub fn max_score(&self) -> u32 {
        self.words.iter().map(|w| self.word_points(w)).sum()
    }

    /// Dictionary words that really use every letter
    #[must_use]
    pub fn pangrams(&self) -> Vec<&str> {
        self.words
            .iter()
            .filter(|w| self.is_pangram(w))
            .map(String::as_str)
            .collect()
    }
}
