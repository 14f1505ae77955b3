//! Command implementations

pub mod analyze;
pub mod info;
pub mod simple;

pub use analyze::{AnalysisResult, analyze_word};
pub use info::{PuzzleSummary, summarize_puzzle};
pub use simple::{play_lines, run_simple};
