//! Word analysis command
//!
//! Reports how a single word scores in the puzzle and what a fresh session
//! would say about it.

use crate::core::{normalize, word_length};
use crate::engine::{PuzzleConfig, Rejection, RulesEngine};

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: String,
    pub length: usize,
    pub points: u32,
    pub is_pangram: bool,
    pub in_dictionary: bool,
    /// Uses only puzzle letters, so it can be typed on the board
    pub uses_puzzle_letters: bool,
    /// Why a fresh session would reject the word, if it would
    pub rejection: Option<Rejection>,
}

/// Analyze a word against a puzzle
///
/// # Errors
///
/// Returns an error if the word is empty or contains non-alphabetic characters.
pub fn analyze_word(word: &str, config: &PuzzleConfig) -> Result<AnalysisResult, String> {
    let word = normalize(word.trim());

    if word.is_empty() {
        return Err("No word given".to_string());
    }
    if !word.chars().all(char::is_alphabetic) {
        return Err(format!("Invalid word '{word}': letters only"));
    }

    // Verdict from a throwaway session; its generator is never drawn from
    let mut engine = RulesEngine::seeded(config, 0);
    engine.type_word(&word);
    let rejection = engine.submit_word().rejection();

    Ok(AnalysisResult {
        length: word_length(&word),
        points: config.word_points(&word),
        is_pangram: config.is_pangram(&word),
        in_dictionary: config.contains_word(&word),
        uses_puzzle_letters: word.chars().all(|c| config.has_letter(c)),
        rejection,
        word,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> PuzzleConfig {
        PuzzleConfig::builtin().unwrap()
    }

    #[test]
    fn analyze_valid_word() {
        let result = analyze_word("sprint", &config()).unwrap();

        assert_eq!(result.word, "SPRINT");
        assert_eq!(result.length, 6);
        assert_eq!(result.points, 3);
        assert!(!result.is_pangram);
        assert!(result.in_dictionary);
        assert!(result.uses_puzzle_letters);
        assert_eq!(result.rejection, None);
    }

    #[test]
    fn analyze_dictionary_word_without_center() {
        let result = analyze_word("TRAIN", &config()).unwrap();

        assert!(result.in_dictionary);
        assert_eq!(result.rejection, Some(Rejection::MissingCenterLetter));
    }

    #[test]
    fn analyze_unknown_word_still_scored() {
        let result = analyze_word("PARTISANS", &config()).unwrap();

        assert!(!result.in_dictionary);
        assert!(result.is_pangram);
        assert_eq!(result.points, 12);
        assert_eq!(result.rejection, Some(Rejection::NotInDictionary));
    }

    #[test]
    fn analyze_short_word() {
        let result = analyze_word("sip", &config()).unwrap();
        assert_eq!(result.points, 0);
        assert_eq!(result.rejection, Some(Rejection::TooShort));
    }

    #[test]
    fn analyze_off_board_letters() {
        let result = analyze_word("RAISE", &config()).unwrap();
        assert!(result.in_dictionary);
        assert!(!result.uses_puzzle_letters);
        assert_eq!(result.rejection, None);
    }

    #[test]
    fn verdict_matches_a_fresh_engine() {
        let config = config();
        for word in ["SPIN", "SIP", "TRAIN", "SPINS", "PAINS", "RAISE", "SPRAT"] {
            let mut engine = RulesEngine::seeded(&config, 7);
            engine.type_word(word);
            let expected = engine.submit_word().rejection();
            assert_eq!(analyze_word(word, &config).unwrap().rejection, expected, "{word}");
        }
    }

    #[test]
    fn analyze_invalid_input() {
        assert!(analyze_word("", &config()).is_err());
        assert!(analyze_word("   ", &config()).is_err());
        assert!(analyze_word("sp1n", &config()).is_err());
        assert!(analyze_word("spin!", &config()).is_err());
    }
}
