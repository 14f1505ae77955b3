//! Display functions for command results

use super::formatters::{create_progress_bar, spaced};
use crate::commands::{AnalysisResult, PuzzleSummary};
use colored::Colorize;

/// Print the result of analyzing a word
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).yellow());
    println!(
        " {} {} ",
        "WORD ANALYSIS:".bright_yellow().bold(),
        result.word.bright_white().bold()
    );
    println!("{}", "═".repeat(60).yellow());

    println!("\n   Length:       {} letters", result.length);
    println!(
        "   Points:       {}",
        result.points.to_string().bright_cyan().bold()
    );
    println!(
        "   Pangram:      {}",
        if result.is_pangram {
            "yes".green().bold()
        } else {
            "no".normal()
        }
    );
    println!(
        "   In word list: {}",
        if result.in_dictionary {
            "yes".green()
        } else {
            "no".red()
        }
    );
    if !result.uses_puzzle_letters {
        println!("   {}", "Uses letters that are not on the board".yellow());
    }

    println!();
    match result.rejection {
        None => println!("{}", "✅ Accepted in a fresh game".green().bold()),
        Some(reason) => println!("{}", format!("❌ Rejected: {reason}").red().bold()),
    }
}

/// Print a puzzle summary
pub fn print_puzzle_summary(summary: &PuzzleSummary) {
    println!("\n{}", "═".repeat(60).yellow());
    println!(" {} ", "🐝 SPELLING BEE PUZZLE".bright_yellow().bold());
    println!("{}", "═".repeat(60).yellow());

    let outer: String = summary
        .letters
        .chars()
        .filter(|&c| c != summary.center_letter)
        .collect();
    println!(
        "\n   Letters:      [{}]  {}",
        summary.center_letter.to_string().bright_yellow().bold(),
        spaced(&outer)
    );
    println!("   Min length:   {}", summary.min_word_length);

    println!("\n📊 {}", "Words:".bright_cyan().bold());
    println!("   Total:        {}", summary.total_words);
    println!(
        "   Playable:     {} ({} points)",
        summary.reachable_words, summary.reachable_score
    );
    for (length, count) in &summary.words_by_length {
        println!("   {length:>2} letters:   {count}");
    }
    println!(
        "   Max score:    {}",
        summary.max_score.to_string().bright_yellow().bold()
    );

    println!("\n✨ {}", "Pangrams:".bright_cyan().bold());
    if summary.pangrams.is_empty() {
        println!("   {}", "none".bright_black());
    } else {
        for pangram in &summary.pangrams {
            println!("   {}", pangram.bright_green().bold());
        }
    }
    if let Some((listed, is_real)) = &summary.listed_pangram {
        if *is_real {
            println!("   Listed pangram {listed} uses every letter");
        } else {
            println!(
                "   {}",
                format!("Listed pangram {listed} does not use every letter (scored as a plain word)")
                    .yellow()
            );
        }
    }

    println!("\n🏆 {}", "Ranks:".bright_cyan().bold());
    for (rank, threshold, attainable) in &summary.rank_ladder {
        let bar = create_progress_bar(
            f64::from(*threshold),
            f64::from(summary.max_score.max(1)),
            20,
        );
        let line = format!("   {:<11} {threshold:>4}  {bar}", rank.label());
        if *attainable {
            println!("{line}");
        } else {
            println!("{}  {}", line.bright_black(), "(out of reach)".bright_black());
        }
    }
    println!();
}
