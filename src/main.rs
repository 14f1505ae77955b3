//! Spelling Bee - CLI
//!
//! Spelling Bee puzzle with TUI and CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::{Env, Target};
use log::info;
use spelling_bee::{
    commands::{analyze_word, run_simple, summarize_puzzle},
    engine::PuzzleConfig,
    output::{print_analysis_result, print_puzzle_summary},
    wordlists::{
        CENTER_LETTER, DICTIONARY, LETTERS, LISTED_PANGRAM, MIN_WORD_LENGTH,
        loader::{load_from_file, words_from_slice},
    },
};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "spelling_bee",
    about = "Spelling Bee: make words from seven letters, always using the center one",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary file, one word per line (default: built-in TARSPIN puzzle words)
    #[arg(short = 'w', long, global = true)]
    dictionary: Option<PathBuf>,

    /// The seven puzzle letters, e.g. TARSPIN
    #[arg(short, long, global = true)]
    letters: Option<String>,

    /// Mandatory center letter
    #[arg(short, long, global = true)]
    center: Option<char>,

    /// Minimum word length
    #[arg(short = 'm', long, global = true)]
    min_length: Option<usize>,

    /// Seed for hints and shuffling (random if omitted)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Append logs to this file (the TUI only logs when this is set)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based play without TUI)
    Simple,

    /// Show how a word scores in the puzzle
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Summarize the puzzle: word counts, max score, pangrams, ranks
    Info,
}

/// Initialize logging
///
/// With a log file, everything at `RUST_LOG` (default info) goes there. Without
/// one, non-TUI modes log warnings to stderr and the TUI stays silent.
fn init_logging(log_file: Option<&Path>, interactive: bool) -> Result<()> {
    if let Some(path) = log_file {
        let log_output = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;

        env_logger::Builder::from_env(Env::default().default_filter_or("info"))
            .target(Target::Pipe(Box::new(log_output)))
            .init();
    } else if !interactive {
        env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    }
    Ok(())
}

/// Build the puzzle from the built-in data and any command-line overrides
fn load_puzzle(cli: &Cli) -> Result<PuzzleConfig> {
    let letters: Vec<char> = cli
        .letters
        .as_deref()
        .map_or_else(|| LETTERS.to_vec(), |l| l.trim().chars().collect());
    let center = cli.center.unwrap_or(CENTER_LETTER);
    let min_length = cli.min_length.unwrap_or(MIN_WORD_LENGTH);

    let words = match &cli.dictionary {
        Some(path) => load_from_file(path)
            .with_context(|| format!("Failed to read dictionary {}", path.display()))?,
        None => words_from_slice(DICTIONARY),
    };

    let config = PuzzleConfig::new(letters, center, min_length, words)
        .context("Invalid puzzle configuration")?;

    // The listed pangram belongs to the built-in puzzle only
    let builtin = cli.letters.is_none() && cli.dictionary.is_none();
    Ok(if builtin {
        config.with_listed_pangram(LISTED_PANGRAM)
    } else {
        config
    })
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    init_logging(cli.log_file.as_deref(), matches!(command, Commands::Play))?;

    let config = load_puzzle(&cli)?;

    match command {
        Commands::Play => run_play_command(&config, cli.seed),
        Commands::Simple => run_simple(&config, cli.seed).context("Simple mode failed"),
        Commands::Analyze { word } => run_analyze_command(&word, &config),
        Commands::Info => {
            print_puzzle_summary(&summarize_puzzle(&config));
            Ok(())
        }
    }
}

fn run_analyze_command(word: &str, config: &PuzzleConfig) -> Result<()> {
    let result = analyze_word(word, config).map_err(|e| anyhow::anyhow!(e))?;
    print_analysis_result(&result);
    Ok(())
}

fn run_play_command(config: &PuzzleConfig, seed: Option<u64>) -> Result<()> {
    use spelling_bee::interactive::{App, run_tui};

    info!("Starting TUI");
    let app = App::new(config, seed);
    run_tui(app)
}
