//! Spelling Bee rules engine
//!
//! Puzzle configuration, session state and the engine that ties them together.

mod config;
mod outcome;
mod rules;
mod session;

pub use config::{LETTER_COUNT, PuzzleConfig, PuzzleError};
pub use outcome::{HintOutcome, Rejection, SubmitOutcome};
pub use rules::{RulesEngine, rng_from_seed};
pub use session::SessionState;
