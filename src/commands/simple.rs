//! Simple interactive CLI mode
//!
//! Line-based play without the TUI: each line is typed onto the board and submitted.

use crate::engine::{PuzzleConfig, RulesEngine, rng_from_seed};
use crate::interactive::LetterBoard;
use crate::output::formatters::{
    Feedback, MessageStyle, hint_feedback, next_rank_text, spaced, submit_feedback,
};
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading input or writing output.
pub fn run_simple(config: &PuzzleConfig, seed: Option<u64>) -> io::Result<()> {
    let mut rng = rng_from_seed(seed);
    let mut engine = RulesEngine::new(config, rng_from_seed(Some(rng.random())));
    let mut board = LetterBoard::new(config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    play_lines(
        &mut engine,
        &mut board,
        &mut rng,
        stdin.lock(),
        &mut stdout.lock(),
    )
}

/// Drive a session from line input until `/quit` or end of input
///
/// # Errors
///
/// Returns an error if reading from `input` or writing to `output` fails.
pub fn play_lines<R: Rng, S: Rng, I: BufRead, O: Write>(
    engine: &mut RulesEngine<R>,
    board: &mut LetterBoard,
    shuffle_rng: &mut S,
    input: I,
    output: &mut O,
) -> io::Result<()> {
    writeln!(
        output,
        "\n╔══════════════════════════════════════════════════════════════╗"
    )?;
    writeln!(
        output,
        "║                  Spelling Bee - Simple Mode                  ║"
    )?;
    writeln!(
        output,
        "╚══════════════════════════════════════════════════════════════╝\n"
    )?;
    writeln!(
        output,
        "Make words of {}+ letters. Every word must use the center letter.",
        engine.config().min_word_length()
    )?;
    writeln!(
        output,
        "Commands: /hint, /shuffle, /words, /new, /help, /quit\n"
    )?;
    print_board(board, output)?;

    let mut lines = input.lines();
    loop {
        write!(output, "> ")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            break;
        };
        let line = line?;
        let line = line.trim();

        match line {
            "" => {}
            "/quit" | "/q" | "/exit" => {
                writeln!(output, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            "/hint" | "/h" => {
                let outcome = engine.hint();
                print_feedback(&hint_feedback(&outcome), output)?;
            }
            "/shuffle" | "/s" => {
                board.shuffle(shuffle_rng);
                print_feedback(
                    &Feedback::new("Letters shuffled", MessageStyle::Success),
                    output,
                )?;
                print_board(board, output)?;
            }
            "/words" | "/w" => print_found_words(engine, output)?,
            "/new" | "/n" => {
                engine.new_game();
                print_feedback(
                    &Feedback::new("🔄 New game started!", MessageStyle::Info),
                    output,
                )?;
            }
            "/help" => {
                writeln!(
                    output,
                    "Type a word and press Enter. Commands: /hint, /shuffle, /words, /new, /quit"
                )?;
                print_board(board, output)?;
            }
            cmd if cmd.starts_with('/') => {
                print_feedback(
                    &Feedback::new(format!("Unknown command: {cmd}"), MessageStyle::Error),
                    output,
                )?;
            }
            word => {
                engine.clear_word();
                engine.type_word(word);
                let outcome = engine.submit_word();
                print_feedback(&submit_feedback(&outcome, engine.config()), output)?;

                if outcome.is_accepted() {
                    print_status(engine, output)?;
                } else {
                    // A new line is a fresh attempt
                    engine.clear_word();
                }
            }
        }
    }

    Ok(())
}

fn print_board<O: Write>(board: &LetterBoard, output: &mut O) -> io::Result<()> {
    let outer: String = board.outer().iter().collect();
    writeln!(
        output,
        "  Letters: [{}]  {}\n",
        board.center().to_string().bright_yellow().bold(),
        spaced(&outer)
    )
}

fn print_feedback<O: Write>(feedback: &Feedback, output: &mut O) -> io::Result<()> {
    let text = match feedback.style {
        MessageStyle::Info => feedback.text.normal(),
        MessageStyle::Success => feedback.text.green().bold(),
        MessageStyle::Warning => feedback.text.yellow(),
        MessageStyle::Error => feedback.text.red(),
    };
    writeln!(output, "  {text}")
}

fn print_status<R: Rng, O: Write>(engine: &RulesEngine<R>, output: &mut O) -> io::Result<()> {
    writeln!(
        output,
        "  Score: {}/{}  Rank: {}  ({})",
        engine.score().to_string().bright_cyan().bold(),
        engine.max_score(),
        engine.rank().to_string().bright_yellow(),
        next_rank_text(engine.score())
    )
}

fn print_found_words<R: Rng, O: Write>(
    engine: &RulesEngine<R>,
    output: &mut O,
) -> io::Result<()> {
    let found = engine.found_words();
    writeln!(output, "  Found ({}):", found.len())?;
    for word in found {
        if engine.is_pangram(word) {
            writeln!(output, "    • {}", word.bright_green().bold())?;
        } else {
            writeln!(output, "    • {word}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rank;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn play(config: &PuzzleConfig, script: &str) -> (u32, Rank, Vec<String>, String) {
        let mut engine = RulesEngine::seeded(config, 1);
        let mut board = LetterBoard::new(config);
        let mut rng = StdRng::seed_from_u64(2);
        let mut output = Vec::new();

        play_lines(
            &mut engine,
            &mut board,
            &mut rng,
            Cursor::new(script),
            &mut output,
        )
        .unwrap();

        (
            engine.score(),
            engine.rank(),
            engine.found_words().to_vec(),
            String::from_utf8(output).unwrap(),
        )
    }

    #[test]
    fn scripted_session_scores_words() {
        let config = PuzzleConfig::builtin().unwrap();
        let (score, rank, found, output) = play(&config, "spin\nsprint\n/quit\n");

        assert_eq!(score, 4);
        assert_eq!(rank, Rank::Beginner);
        assert_eq!(found, vec!["SPIN", "SPRINT"]);
        assert!(output.contains("+1 point"));
        assert!(output.contains("+3 points"));
        assert!(output.contains("Thanks for playing"));
    }

    #[test]
    fn scripted_session_reports_rejections() {
        let config = PuzzleConfig::builtin().unwrap();
        let (score, _, found, output) = play(&config, "spa\ntrap\nspin\nspin\nspint\n");

        assert_eq!(score, 1);
        assert_eq!(found, vec!["SPIN"]);
        assert!(output.contains("Words must be at least 4 letters long"));
        assert!(output.contains("Words must include the center letter: S"));
        assert!(output.contains("You already found this word"));
        assert!(output.contains("Not in word list"));
    }

    #[test]
    fn hint_and_unknown_command() {
        let config = PuzzleConfig::new("TARSPIN".chars(), 'S', 4, ["SPIN"]).unwrap();
        let (_, _, _, output) = play(&config, "/hint\nspin\n/hint\n/bogus\n");

        assert!(output.contains("Hint: SP..."));
        assert!(output.contains("You found all the words!"));
        assert!(output.contains("Unknown command: /bogus"));
    }

    #[test]
    fn new_game_resets_score() {
        let config = PuzzleConfig::builtin().unwrap();
        let (score, _, found, output) = play(&config, "sprain\n/new\nspin\n");

        assert_eq!(score, 1);
        assert_eq!(found, vec!["SPIN"]);
        assert!(output.contains("New game started!"));
    }

    #[test]
    fn words_and_shuffle_commands() {
        let config = PuzzleConfig::builtin().unwrap();
        let (_, _, _, output) = play(&config, "stain\n/words\n/shuffle\n");

        assert!(output.contains("Found (1):"));
        assert!(output.contains("STAIN"));
        assert!(output.contains("Letters shuffled"));
    }

    #[test]
    fn rejected_line_does_not_leak_into_next() {
        let config = PuzzleConfig::builtin().unwrap();
        // If "SPA" stayed typed, the next line would become "SPASPIN"
        let (score, _, found, _) = play(&config, "spa\nspin\n");

        assert_eq!(score, 1);
        assert_eq!(found, vec!["SPIN"]);
    }
}
