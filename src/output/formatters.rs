//! Formatting utilities for terminal output

use crate::core::{Color, Feedback};
use colored::Colorize;
use std::collections::BTreeSet;

/// Render a guess as coloured tiles, one letter per feedback colour
#[must_use]
pub fn colored_guess(guess: &str, feedback: &Feedback) -> String {
    guess
        .chars()
        .zip(feedback.colors())
        .map(|(letter, color)| {
            let tile = format!(" {} ", letter.to_uppercase());
            match color {
                Color::CorrectPosition => tile.black().on_green().bold().to_string(),
                Color::PresentElsewhere => tile.black().on_yellow().bold().to_string(),
                Color::Absent => tile.white().on_bright_black().to_string(),
            }
        })
        .collect()
}

/// Space-separated letters, or "-" for an empty set
#[must_use]
pub fn letter_list(letters: &BTreeSet<char>) -> String {
    if letters.is_empty() {
        return "-".to_string();
    }

    letters
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(" ")
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
