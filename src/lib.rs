//! Spelling Bee
//!
//! A Spelling Bee word puzzle: make words from seven letters, always using the center one.
//!
//! # Quick Start
//!
//! ```rust
//! use spelling_bee::engine::{PuzzleConfig, RulesEngine, SubmitOutcome};
//!
//! let config = PuzzleConfig::builtin().unwrap();
//! let mut engine = RulesEngine::seeded(&config, 42);
//!
//! engine.type_word("spin");
//! let outcome = engine.submit_word();
//! assert!(matches!(outcome, SubmitOutcome::Accepted { points: 1, .. }));
//! assert_eq!(engine.score(), 1);
//! ```

// Core scoring rules
pub mod core;

// Puzzle configuration and rules engine
pub mod engine;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
