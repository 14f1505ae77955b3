//! Spelling Bee rules engine

use super::config::PuzzleConfig;
use super::outcome::{HintOutcome, Rejection, SubmitOutcome};
use super::session::SessionState;
use crate::core::{Rank, normalize};
use log::debug;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

/// Number of leading letters revealed by a hint
const HINT_PREVIEW_LEN: usize = 2;

/// Build a generator from an optional seed, falling back to OS entropy
#[must_use]
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

/// Main Spelling Bee engine
///
/// Validates and scores words for one session against a borrowed puzzle.
/// Randomness (hints) comes from the injected generator.
pub struct RulesEngine<'a, R: Rng> {
    config: &'a PuzzleConfig,
    session: SessionState,
    rng: R,
}

impl<'a> RulesEngine<'a, StdRng> {
    /// Create an engine with a deterministic generator
    #[must_use]
    pub fn seeded(config: &'a PuzzleConfig, seed: u64) -> Self {
        Self::new(config, StdRng::seed_from_u64(seed))
    }
}

impl<'a, R: Rng> RulesEngine<'a, R> {
    /// Create an engine and start a fresh session
    ///
    /// The maximum score is computed here, once, for the whole session.
    pub fn new(config: &'a PuzzleConfig, rng: R) -> Self {
        Self {
            config,
            session: SessionState::new(config.max_score()),
            rng,
        }
    }

    /// Discard the session and start over with the same puzzle
    pub fn new_game(&mut self) {
        debug!(
            "New game after {} words, score {}",
            self.session.found_words().len(),
            self.session.score()
        );
        self.session = SessionState::new(self.config.max_score());
    }

    /// Append a letter to the current word
    ///
    /// Any character is accepted; callers filter input if they want to.
    pub fn append_letter(&mut self, letter: char) {
        for upper in letter.to_uppercase() {
            self.session.push_letter(upper);
        }
    }

    /// Append every letter of `word` to the current word
    pub fn type_word(&mut self, word: &str) {
        for letter in word.chars() {
            self.append_letter(letter);
        }
    }

    /// Remove the last letter of the current word, if any
    pub fn delete_last_letter(&mut self) {
        self.session.pop_letter();
    }

    pub fn clear_word(&mut self) {
        self.session.clear_word();
    }

    /// Validate and score the current word
    ///
    /// Checks run in order: length, center letter, already found, dictionary.
    /// The first failure is returned and the session is left untouched,
    /// including the current word. On success the word is recorded, the
    /// score and rank are updated and the current word is cleared.
    pub fn submit_word(&mut self) -> SubmitOutcome {
        let word = normalize(self.session.current_word());

        if let Err(reason) = self.check(&word) {
            debug!("Rejected {word}: {reason}");
            return SubmitOutcome::Rejected(reason);
        }

        let points = self.config.word_points(&word);
        let is_pangram = self.config.is_pangram(&word);
        self.session.record(word.clone(), points);

        debug!(
            "Accepted {word} for {points} (score {}, rank {})",
            self.session.score(),
            self.session.rank()
        );

        SubmitOutcome::Accepted {
            word,
            points,
            is_pangram,
        }
    }

    fn check(&self, word: &str) -> Result<(), Rejection> {
        if !self.config.is_long_enough(word) {
            return Err(Rejection::TooShort);
        }
        if !self.config.has_center_letter(word) {
            return Err(Rejection::MissingCenterLetter);
        }
        if self.session.has_found(word) {
            return Err(Rejection::AlreadyFound);
        }
        if !self.config.contains_word(word) {
            return Err(Rejection::NotInDictionary);
        }
        Ok(())
    }

    /// Points a word would be worth, independent of the session
    #[must_use]
    pub fn word_points(&self, word: &str) -> u32 {
        self.config.word_points(&normalize(word))
    }

    #[must_use]
    pub fn is_pangram(&self, word: &str) -> bool {
        self.config.is_pangram(word)
    }

    /// Reveal the first letters of a random word not found yet
    pub fn hint(&mut self) -> HintOutcome {
        let remaining: Vec<&str> = self
            .config
            .words()
            .iter()
            .filter(|w| !self.session.has_found(w))
            .map(String::as_str)
            .collect();

        match remaining.choose(&mut self.rng) {
            Some(word) => {
                debug!("Hint drawn from {} remaining words", remaining.len());
                HintOutcome::Available {
                    preview: word.chars().take(HINT_PREVIEW_LEN).collect(),
                }
            }
            None => HintOutcome::AllFound,
        }
    }

    /// Score as a percentage of the maximum, clamped to 100
    ///
    /// Returns 0 for a puzzle whose words are all worth nothing.
    #[must_use]
    pub fn progress_percentage(&self) -> f64 {
        let max_score = self.session.max_score();
        if max_score == 0 {
            return 0.0;
        }
        (f64::from(self.session.score()) / f64::from(max_score) * 100.0).min(100.0)
    }

    /// Number of dictionary words still to find
    #[must_use]
    pub fn remaining_words(&self) -> usize {
        self.config.words().len().saturating_sub(self.session.found_words().len())
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &'a PuzzleConfig {
        self.config
    }

    #[inline]
    #[must_use]
    pub const fn session(&self) -> &SessionState {
        &self.session
    }

    #[inline]
    #[must_use]
    pub fn current_word(&self) -> &str {
        self.session.current_word()
    }

    #[inline]
    #[must_use]
    pub fn found_words(&self) -> &[String] {
        self.session.found_words()
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.session.score()
    }

    #[inline]
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.session.rank()
    }

    #[inline]
    #[must_use]
    pub const fn max_score(&self) -> u32 {
        self.session.max_score()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builtin() -> PuzzleConfig {
        PuzzleConfig::builtin().unwrap()
    }

    fn submit<R: Rng>(engine: &mut RulesEngine<R>, word: &str) -> SubmitOutcome {
        engine.clear_word();
        engine.type_word(word);
        engine.submit_word()
    }

    #[test]
    fn new_session_starts_empty() {
        let config = builtin();
        let engine = RulesEngine::seeded(&config, 1);

        assert_eq!(engine.current_word(), "");
        assert!(engine.found_words().is_empty());
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.rank(), Rank::Beginner);
        assert_eq!(engine.max_score(), 62);
        assert_eq!(engine.remaining_words(), 39);
    }

    #[test]
    fn append_and_delete_letters() {
        let config = builtin();
        let mut engine = RulesEngine::seeded(&config, 1);

        engine.append_letter('s');
        engine.append_letter('P');
        engine.append_letter('1'); // Not filtered by the engine
        assert_eq!(engine.current_word(), "SP1");

        engine.delete_last_letter();
        assert_eq!(engine.current_word(), "SP");

        engine.delete_last_letter();
        engine.delete_last_letter();
        engine.delete_last_letter(); // No-op when empty
        assert_eq!(engine.current_word(), "");
    }

    #[test]
    fn submit_spin_scenario() {
        let config = builtin();
        let mut engine = RulesEngine::seeded(&config, 1);

        let outcome = submit(&mut engine, "SPIN");
        assert_eq!(
            outcome,
            SubmitOutcome::Accepted {
                word: "SPIN".to_string(),
                points: 1,
                is_pangram: false,
            }
        );
        assert_eq!(engine.score(), 1);
        assert_eq!(engine.rank(), Rank::Beginner);
        assert_eq!(engine.current_word(), "");
        assert_eq!(engine.found_words(), &["SPIN"]);
    }

    #[test]
    fn submit_lowercase_is_normalized() {
        let config = builtin();
        let mut engine = RulesEngine::seeded(&config, 1);

        assert!(submit(&mut engine, "spin").is_accepted());
        assert_eq!(engine.found_words(), &["SPIN"]);
    }

    #[test]
    fn listed_pangram_scores_as_plain_word() {
        let config = builtin();
        let mut engine = RulesEngine::seeded(&config, 1);

        let outcome = submit(&mut engine, "PAINS");
        assert_eq!(
            outcome,
            SubmitOutcome::Accepted {
                word: "PAINS".to_string(),
                points: 2,
                is_pangram: false,
            }
        );
        assert_eq!(engine.score(), 2);
    }

    #[test]
    fn too_short_leaves_state_untouched() {
        let config = builtin();
        let mut engine = RulesEngine::seeded(&config, 1);
        assert!(submit(&mut engine, "SPAN").is_accepted());

        for word in ["", "S", "SP", "SPA", "TIS"] {
            let outcome = submit(&mut engine, word);
            assert_eq!(outcome, SubmitOutcome::Rejected(Rejection::TooShort));
            assert_eq!(engine.current_word(), word);
            assert_eq!(engine.score(), 1);
            assert_eq!(engine.found_words(), &["SPAN"]);
        }
    }

    #[test]
    fn length_is_checked_before_center_letter() {
        let config = builtin();
        let mut engine = RulesEngine::seeded(&config, 1);

        // Short and missing S: length wins
        assert_eq!(
            submit(&mut engine, "TAP").rejection(),
            Some(Rejection::TooShort)
        );
    }

    #[test]
    fn missing_center_letter() {
        let config = builtin();
        let mut engine = RulesEngine::seeded(&config, 1);

        // In the dictionary, but without S
        for word in ["TRAP", "TRAIN", "PRINT"] {
            assert_eq!(
                submit(&mut engine, word),
                SubmitOutcome::Rejected(Rejection::MissingCenterLetter)
            );
            assert_eq!(engine.current_word(), word);
        }
        assert_eq!(engine.score(), 0);
    }

    #[test]
    fn duplicate_word_is_already_found() {
        let config = builtin();
        let mut engine = RulesEngine::seeded(&config, 1);

        assert!(submit(&mut engine, "STAR").is_accepted());
        assert_eq!(
            submit(&mut engine, "STAR"),
            SubmitOutcome::Rejected(Rejection::AlreadyFound)
        );
        assert_eq!(engine.current_word(), "STAR");
        assert_eq!(engine.score(), 1);
        assert_eq!(engine.found_words().len(), 1);
    }

    #[test]
    fn unknown_word_not_in_dictionary() {
        let config = builtin();
        let mut engine = RulesEngine::seeded(&config, 1);

        assert_eq!(
            submit(&mut engine, "SPINT"),
            SubmitOutcome::Rejected(Rejection::NotInDictionary)
        );
        assert_eq!(engine.current_word(), "SPINT");
        assert_eq!(engine.score(), 0);
    }

    #[test]
    fn off_alphabet_dictionary_word_is_still_accepted() {
        // RAISE uses E, which is not a puzzle letter; the engine does not police letters
        let config = builtin();
        let mut engine = RulesEngine::seeded(&config, 1);

        assert!(submit(&mut engine, "RAISE").is_accepted());
        assert_eq!(engine.score(), 2);
    }

    #[test]
    fn rank_crosses_to_moving_up_at_31() {
        let config = builtin();
        let mut engine = RulesEngine::seeded(&config, 1);

        let fours = [
            "SPIN", "SPAN", "SPAT", "SPIT", "STAR", "STIR", "TAPS", "TIPS", "SNIP", "SNAP",
            "SPAR", "RASP", "RATS", "RIPS", "RAPS",
        ];
        for word in fours {
            assert!(submit(&mut engine, word).is_accepted(), "{word}");
        }
        assert_eq!(engine.score(), 15);
        assert_eq!(engine.rank(), Rank::Beginner);

        for word in ["STRIP", "STRAP", "SAINT", "SATIN", "STAIN", "PANTS"] {
            assert!(submit(&mut engine, word).is_accepted(), "{word}");
        }
        assert!(submit(&mut engine, "SPRAIN").is_accepted());
        assert_eq!(engine.score(), 30);
        assert_eq!(engine.rank(), Rank::GoodStart);

        let outcome = submit(&mut engine, "PAINS");
        assert_eq!(outcome.rejection(), None);
        assert_eq!(engine.score(), 32);
        assert_eq!(engine.rank(), Rank::MovingUp);
    }

    #[test]
    fn score_never_decreases() {
        let config = builtin();
        let mut engine = RulesEngine::seeded(&config, 1);

        let mut previous = 0;
        for word in ["SPIN", "SPIN", "XYZ", "TRAP", "SPRINT", "SPINT", "STAIN"] {
            submit(&mut engine, word);
            assert!(engine.score() >= previous);
            previous = engine.score();
        }
        assert_eq!(engine.score(), 1 + 3 + 2);
    }

    #[test]
    fn pangram_bonus_in_custom_puzzle() {
        let config =
            PuzzleConfig::new("TARSPIN".chars(), 'S', 4, ["PARTISAN", "SPIN"]).unwrap();
        let mut engine = RulesEngine::seeded(&config, 1);

        assert_eq!(engine.max_score(), 12 + 1);
        assert!(engine.is_pangram("PARTISAN"));
        assert_eq!(engine.word_points("partisan"), 12);

        assert_eq!(
            submit(&mut engine, "PARTISAN"),
            SubmitOutcome::Accepted {
                word: "PARTISAN".to_string(),
                points: 12,
                is_pangram: true,
            }
        );
    }

    #[test]
    fn custom_min_length_applies() {
        let config = PuzzleConfig::new("TARSPIN".chars(), 'S', 6, ["SPRAIN", "SPIN"]).unwrap();
        let mut engine = RulesEngine::seeded(&config, 1);

        assert_eq!(
            submit(&mut engine, "SPIN").rejection(),
            Some(Rejection::TooShort)
        );
        assert!(submit(&mut engine, "SPRAIN").is_accepted());
    }

    #[test]
    fn hint_reveals_two_letters_of_unfound_word() {
        let config = builtin();
        let mut engine = RulesEngine::seeded(&config, 7);

        for _ in 0..50 {
            match engine.hint() {
                HintOutcome::Available { preview } => {
                    assert_eq!(preview.chars().count(), 2);
                    assert!(config.words().iter().any(|w| w.starts_with(&preview)));
                }
                HintOutcome::AllFound => panic!("words remain"),
            }
        }
    }

    #[test]
    fn hint_only_points_at_remaining_word() {
        let config = PuzzleConfig::new("TARSPIN".chars(), 'S', 4, ["SPIN", "TAPS"]).unwrap();
        let mut engine = RulesEngine::seeded(&config, 3);
        assert!(submit(&mut engine, "SPIN").is_accepted());

        for _ in 0..20 {
            assert_eq!(
                engine.hint(),
                HintOutcome::Available {
                    preview: "TA".to_string()
                }
            );
        }
    }

    #[test]
    fn hint_when_everything_found() {
        let config = PuzzleConfig::new("TARSPIN".chars(), 'S', 4, ["SPIN", "SNAP"]).unwrap();
        let mut engine = RulesEngine::seeded(&config, 3);
        assert!(submit(&mut engine, "SPIN").is_accepted());
        assert!(submit(&mut engine, "SNAP").is_accepted());

        assert_eq!(engine.hint(), HintOutcome::AllFound);
        assert_eq!(engine.remaining_words(), 0);
    }

    #[test]
    fn rng_from_same_seed_matches() {
        let mut a = rng_from_seed(Some(9));
        let mut b = rng_from_seed(Some(9));
        assert_eq!(a.random::<u64>(), b.random::<u64>());
    }

    #[test]
    fn seeded_hints_are_reproducible() {
        let config = builtin();
        let mut a = RulesEngine::seeded(&config, 42);
        let mut b = RulesEngine::seeded(&config, 42);

        for _ in 0..10 {
            assert_eq!(a.hint(), b.hint());
        }
    }

    #[test]
    fn progress_percentage_tracks_score() {
        let config = PuzzleConfig::new("TARSPIN".chars(), 'S', 4, ["SPIN", "SPRAIN"]).unwrap();
        let mut engine = RulesEngine::seeded(&config, 1);
        assert!((engine.progress_percentage() - 0.0).abs() < f64::EPSILON);

        assert!(submit(&mut engine, "SPIN").is_accepted());
        assert!((engine.progress_percentage() - 25.0).abs() < 1e-9);

        assert!(submit(&mut engine, "SPRAIN").is_accepted());
        assert!((engine.progress_percentage() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn progress_percentage_without_scoring_words() {
        // Every word is too short to score, so the maximum is zero
        let config = PuzzleConfig::new("TARSPIN".chars(), 'S', 2, ["SIP", "SPA"]).unwrap();
        let mut engine = RulesEngine::seeded(&config, 1);
        assert_eq!(engine.max_score(), 0);

        assert!(submit(&mut engine, "SIP").is_accepted());
        assert_eq!(engine.score(), 0);
        assert!((engine.progress_percentage() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn new_game_resets_session() {
        let config = builtin();
        let mut engine = RulesEngine::seeded(&config, 1);
        assert!(submit(&mut engine, "SPRINT").is_accepted());
        engine.type_word("SPA");

        engine.new_game();

        assert_eq!(engine.score(), 0);
        assert_eq!(engine.rank(), Rank::Beginner);
        assert!(engine.found_words().is_empty());
        assert_eq!(engine.current_word(), "");
        assert_eq!(engine.max_score(), 62);
        assert!(submit(&mut engine, "SPRINT").is_accepted());
    }

    #[test]
    fn found_words_keep_insertion_order() {
        let config = builtin();
        let mut engine = RulesEngine::seeded(&config, 1);
        for word in ["TRIPS", "SPIN", "PRINTS"] {
            assert!(submit(&mut engine, word).is_accepted());
        }
        assert_eq!(engine.found_words(), &["TRIPS", "SPIN", "PRINTS"]);
    }
}
