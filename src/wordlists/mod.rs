//! Word lists for Spelling Bee puzzles
//!
//! Provides the embedded built-in puzzle and loaders for custom dictionaries.

mod embedded;
pub mod loader;

pub use embedded::{
    CENTER_LETTER, DICTIONARY, DICTIONARY_COUNT, LETTERS, LISTED_PANGRAM, MIN_WORD_LENGTH,
};
