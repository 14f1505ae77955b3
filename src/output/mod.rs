//! Terminal output formatting
//!
//! Player-facing messages and pretty-printing for CLI results.

pub mod display;
pub mod formatters;

pub use display::{print_analysis_result, print_puzzle_summary};
