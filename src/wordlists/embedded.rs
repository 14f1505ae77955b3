//! Embedded puzzle data
//!
//! The built-in puzzle, with its word list compiled into the binary at build time.

// Include generated word list from build script
include!(concat!(env!("OUT_DIR"), "/dictionary.rs"));

/// Letters of the built-in puzzle
pub const LETTERS: [char; 7] = ['T', 'A', 'R', 'S', 'P', 'I', 'N'];

/// Mandatory letter of the built-in puzzle
pub const CENTER_LETTER: char = 'S';

/// Shortest word the built-in puzzle accepts
pub const MIN_WORD_LENGTH: usize = 4;

/// Pangram label shipped with the puzzle data (informational only)
pub const LISTED_PANGRAM: &str = "PAINS";
