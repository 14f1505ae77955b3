//! Word scoring rules
//!
//! Points depend only on the word's length, plus a flat bonus when the word
//! uses every letter of the puzzle.

/// Bonus added on top of the length score for a pangram
pub const PANGRAM_BONUS: u32 = 7;

/// Normalize a word for comparison against the puzzle
///
/// All checks and lookups happen on uppercase text.
///
/// # Examples
/// ```
/// use spelling_bee::core::normalize;
///
/// assert_eq!(normalize("Spin"), "SPIN");
/// ```
#[must_use]
pub fn normalize(word: &str) -> String {
    word.to_uppercase()
}

/// Length of a word in letters (not bytes)
#[inline]
#[must_use]
pub fn word_length(word: &str) -> usize {
    word.chars().count()
}

/// Points awarded for a word of the given length, before any pangram bonus
///
/// Words under four letters are never accepted, but still score zero here so
/// the function is total.
#[must_use]
pub const fn base_points(length: usize) -> u32 {
    match length {
        0..=3 => 0,
        4 => 1,
        5 => 2,
        6 => 3,
        7 => 4,
        _ => 5,
    }
}

/// Check whether `word` contains every one of `letters` at least once
///
/// Case-insensitive; order and repetition do not matter.
///
/// # Examples
/// ```
/// use spelling_bee::core::is_pangram;
///
/// let letters = ['T', 'A', 'R', 'S', 'P', 'I', 'N'];
/// assert!(is_pangram("PARTISAN", &letters));
/// assert!(!is_pangram("PAINS", &letters));
/// ```
#[must_use]
pub fn is_pangram(word: &str, letters: &[char]) -> bool {
    let word = normalize(word);
    letters
        .iter()
        .all(|&letter| word.contains(letter.to_ascii_uppercase()))
}

/// Total points for a word: length score plus the pangram bonus
#[must_use]
pub fn word_points(word: &str, letters: &[char]) -> u32 {
    let base = base_points(word_length(word));
    if is_pangram(word, letters) {
        base + PANGRAM_BONUS
    } else {
        base
    }
}
