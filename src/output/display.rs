//! Display functions for command results

use super::formatters::{colored_guess, create_progress_bar, letter_list};
use crate::commands::{BenchmarkResult, SolveResult};
use crate::core::{ConstraintState, MAX_ROUNDS, PositionConstraint};
use crate::solver::{RoundRecord, SessionState};
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, round) in result.rounds.iter().enumerate() {
        println!(
            "\nRound {}: {} {}",
            i + 1,
            colored_guess(&round.guess, &round.feedback),
            round.feedback.to_emoji()
        );

        if verbose {
            let after = result
                .rounds
                .get(i + 1)
                .map_or_else(|| "-".to_string(), |next| next.candidates_before.to_string());
            println!("  Candidates: {} → {after}", round.candidates_before);
        }
    }

    println!();
    print_outcome(result.state, result.rounds.len());
}

/// Print how an interactive session ended, with the board
pub fn print_session_summary(state: SessionState, history: &[RoundRecord]) {
    println!("\n{}", "─".repeat(60).cyan());
    for round in history {
        println!("  {}", colored_guess(&round.guess, &round.feedback));
    }
    println!();
    print_outcome(state, history.len());
}

fn print_outcome(state: SessionState, rounds: usize) {
    match state {
        SessionState::Solved => println!(
            "{}",
            format!("✅ Solved in {rounds} guesses!").green().bold()
        ),
        SessionState::Exhausted => println!("{}", "❌ No words found".red().bold()),
        SessionState::Aborted => println!(
            "{}",
            format!("⏹  Stopped after {rounds} guesses").yellow().bold()
        ),
        SessionState::AwaitingGuessSelection | SessionState::AwaitingFeedback => {}
    }
}

/// Print the accumulated letter knowledge
pub fn print_constraints(constraints: &ConstraintState) {
    println!("\n{}", "Constraints:".bright_cyan().bold());
    println!(
        "   Correct:   {}",
        letter_list(constraints.correct_position_letters()).green()
    );
    println!(
        "   Elsewhere: {}",
        letter_list(constraints.present_elsewhere_letters()).yellow()
    );
    println!(
        "   Absent:    {}",
        letter_list(constraints.absent_letters()).bright_black()
    );

    let slots: Vec<String> = constraints
        .positions()
        .iter()
        .map(|record| {
            record.confirmed_letter().map_or_else(
                || "_".to_string(),
                |letter| letter.to_uppercase().to_string(),
            )
        })
        .collect();
    println!("   Pattern:   {}", slots.join(" "));
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {}",
        format!("{}", result.solved).green()
    );
    println!("   No words found:   {}", result.exhausted);
    println!("   Out of rounds:    {}", result.aborted);
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    if result.total_words == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for rounds in 1..=MAX_ROUNDS {
        if let Some(&count) = result.distribution.get(&rounds) {
            let pct = (count as f64 / result.total_words as f64) * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {rounds}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }
}

/// Print the opener pairs found by the offline search
pub fn print_openers(letters: &[char], pairs: &[(String, String)]) {
    let letters: String = letters.iter().collect();
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "OPENER PAIRS FOR".bright_cyan().bold(),
        letters.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if pairs.is_empty() {
        println!("\n{}", "No pair of dictionary words covers these letters".red());
        return;
    }

    println!();
    for (first, second) in pairs {
        println!("   {first}, {second}");
    }
}

/// Human-readable description of one position's allowed letters
#[must_use]
pub fn describe_position(constraint: &PositionConstraint) -> String {
    match constraint {
        PositionConstraint::Fixed(letter) => letter.to_string(),
        PositionConstraint::Allowed(letters) => format!("{} letters", letters.len()),
    }
}
