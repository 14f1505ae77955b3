//! Formatting utilities shared by the TUI and the CLI
//!
//! Turns engine outcomes into player-facing text.

use crate::core::Rank;
use crate::engine::{HintOutcome, PuzzleConfig, Rejection, SubmitOutcome};

/// Tone of a feedback message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Warning,
    Error,
}

/// A player-facing message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub text: String,
    pub style: MessageStyle,
}

impl Feedback {
    #[must_use]
    pub fn new(text: impl Into<String>, style: MessageStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// Message for the result of a submission
#[must_use]
pub fn submit_feedback(outcome: &SubmitOutcome, config: &PuzzleConfig) -> Feedback {
    match outcome {
        SubmitOutcome::Accepted {
            points, is_pangram, ..
        } => Feedback::new(
            format!(
                "+{points} {}{}",
                if *points == 1 { "point" } else { "points" },
                if *is_pangram { " - PANGRAM!" } else { "" }
            ),
            MessageStyle::Success,
        ),
        SubmitOutcome::Rejected(reason) => rejection_feedback(*reason, config),
    }
}

fn rejection_feedback(reason: Rejection, config: &PuzzleConfig) -> Feedback {
    match reason {
        Rejection::TooShort => Feedback::new(
            format!(
                "Words must be at least {} letters long",
                config.min_word_length()
            ),
            MessageStyle::Error,
        ),
        Rejection::MissingCenterLetter => Feedback::new(
            format!(
                "Words must include the center letter: {}",
                config.center_letter()
            ),
            MessageStyle::Error,
        ),
        Rejection::AlreadyFound => {
            Feedback::new("You already found this word", MessageStyle::Warning)
        }
        Rejection::NotInDictionary => Feedback::new("Not in word list", MessageStyle::Error),
    }
}

/// Message for a hint request
#[must_use]
pub fn hint_feedback(outcome: &HintOutcome) -> Feedback {
    match outcome {
        HintOutcome::Available { preview } => {
            Feedback::new(format!("Hint: {preview}..."), MessageStyle::Warning)
        }
        HintOutcome::AllFound => Feedback::new("You found all the words!", MessageStyle::Success),
    }
}

/// Describe the distance to the next rank
///
/// # Examples
/// ```
/// use spelling_bee::output::formatters::next_rank_text;
///
/// assert_eq!(next_rank_text(10), "6 to Good Start");
/// assert_eq!(next_rank_text(120), "Top rank reached");
/// ```
#[must_use]
pub fn next_rank_text(score: u32) -> String {
    match Rank::for_score(score).next() {
        Some(next) => format!("{} to {next}", next.threshold() - score),
        None => "Top rank reached".to_string(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Letters of a word separated by spaces, for large display
#[must_use]
pub fn spaced(word: &str) -> String {
    word.chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> PuzzleConfig {
        PuzzleConfig::builtin().unwrap()
    }

    #[test]
    fn accepted_messages() {
        let config = config();
        let one = SubmitOutcome::Accepted {
            word: "SPIN".to_string(),
            points: 1,
            is_pangram: false,
        };
        assert_eq!(
            submit_feedback(&one, &config),
            Feedback::new("+1 point", MessageStyle::Success)
        );

        let pangram = SubmitOutcome::Accepted {
            word: "PARTISAN".to_string(),
            points: 12,
            is_pangram: true,
        };
        assert_eq!(
            submit_feedback(&pangram, &config).text,
            "+12 points - PANGRAM!"
        );
    }

    #[test]
    fn rejection_messages() {
        let config = config();
        let text = |reason| submit_feedback(&SubmitOutcome::Rejected(reason), &config);

        assert_eq!(
            text(Rejection::TooShort).text,
            "Words must be at least 4 letters long"
        );
        assert_eq!(
            text(Rejection::MissingCenterLetter).text,
            "Words must include the center letter: S"
        );
        assert_eq!(
            text(Rejection::AlreadyFound),
            Feedback::new("You already found this word", MessageStyle::Warning)
        );
        assert_eq!(text(Rejection::NotInDictionary).style, MessageStyle::Error);
    }

    #[test]
    fn hint_messages() {
        let available = HintOutcome::Available {
            preview: "SP".to_string(),
        };
        assert_eq!(hint_feedback(&available).text, "Hint: SP...");
        assert_eq!(
            hint_feedback(&HintOutcome::AllFound).style,
            MessageStyle::Success
        );
    }

    #[test]
    fn next_rank_distances() {
        assert_eq!(next_rank_text(0), "16 to Good Start");
        assert_eq!(next_rank_text(30), "1 to Moving Up");
        assert_eq!(next_rank_text(31), "20 to Good");
        assert_eq!(next_rank_text(101), "Top rank reached");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn spaced_letters() {
        assert_eq!(spaced("SPIN"), "S P I N");
        assert_eq!(spaced(""), "");
    }
}
