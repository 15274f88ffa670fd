//! Benchmark command
//!
//! Runs self-play against many target words and collects statistics. Each
//! target gets its own session, so targets are solved in parallel.

use super::solve::{SolveConfig, SolveResult, solve_word};
use crate::core::{WORD_LENGTH, Word};
use crate::language::{Dictionary, LanguageProfile};
use crate::solver::SessionState;
use indicatif::ProgressBar;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub exhausted: usize,
    pub aborted: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Rounds needed -> number of solved targets
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Pick up to `count` random playable targets from the dictionary
#[must_use]
pub fn sample_targets(dictionary: &Dictionary, count: usize) -> Vec<String> {
    let playable: Vec<&str> = dictionary
        .words_of_length(WORD_LENGTH)
        .into_iter()
        .filter(|word| Word::new(*word).is_ok())
        .collect();

    playable
        .choose_multiple(&mut rand::rng(), count)
        .map(|word| (*word).to_string())
        .collect()
}

/// Run self-play on a set of target words
///
/// Invalid targets are skipped.
pub fn run_benchmark(
    profile: &LanguageProfile,
    dictionary: &Dictionary,
    targets: &[String],
    progress: &ProgressBar,
) -> BenchmarkResult {
    let start = Instant::now();

    let results: Vec<SolveResult> = targets
        .par_iter()
        .filter_map(|target| {
            let result = solve_word(SolveConfig::new(target.clone()), profile, dictionary).ok();
            progress.inc(1);
            result
        })
        .collect();

    progress.finish_with_message("Complete!");
    let duration = start.elapsed();

    let count_state = |state: SessionState| results.iter().filter(|r| r.state == state).count();
    let solved_rounds: Vec<usize> = results
        .iter()
        .filter(|r| r.success())
        .map(|r| r.rounds.len())
        .collect();

    let mut distribution: HashMap<usize, usize> = HashMap::new();
    for &rounds in &solved_rounds {
        *distribution.entry(rounds).or_insert(0) += 1;
    }

    let total_words = results.len();
    let solved = solved_rounds.len();

    BenchmarkResult {
        total_words,
        solved,
        exhausted: count_state(SessionState::Exhausted),
        aborted: count_state(SessionState::Aborted),
        average_guesses: if solved > 0 {
            solved_rounds.iter().sum::<usize>() as f64 / solved as f64
        } else {
            0.0
        },
        min_guesses: solved_rounds.iter().copied().min().unwrap_or(0),
        max_guesses: solved_rounds.iter().copied().max().unwrap_or(0),
        distribution,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
