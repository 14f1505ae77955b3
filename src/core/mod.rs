//! Core domain types for Spelling Bee
//!
//! This module contains the scoring rules and rank ladder with zero external dependencies.
//! Everything here is a pure function of its inputs.

mod rank;
mod scoring;

pub use rank::{RANK_THRESHOLDS, Rank};
pub use scoring::{PANGRAM_BONUS, base_points, is_pangram, normalize, word_length, word_points};
