//! Offline opener search
//!
//! Looks for pairs of words that together cover a language's ten most
//! frequent letters. Slow on large dictionaries, so it runs behind a spinner.

use crate::language::{Dictionary, LanguageProfile};
use crate::solver::find_optimal_openers;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Search opener pairs for the profile's frequency letters
///
/// # Errors
///
/// Returns an error if the profile does not list exactly ten distinct
/// frequency letters, or the spinner template is invalid.
pub fn run_openers(
    profile: &LanguageProfile,
    dictionary: &Dictionary,
) -> anyhow::Result<Vec<(String, String)>> {
    let letters: String = profile.frequency_letters().iter().collect();

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message(format!(
        "Searching {} words for pairs covering '{letters}'...",
        dictionary.len()
    ));

    let pairs = find_optimal_openers(profile.frequency_letters(), dictionary)?;

    spinner.finish_with_message(format!("Found {} opener pairs", pairs.len()));
    Ok(pairs)
}
