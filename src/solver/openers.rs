//! Opening guesses
//!
//! The first two rounds use a fixed, precomputed pair of words per language.
//! `find_optimal_openers` is the offline search that produces such pairs: two
//! dictionary words that together cover the ten most frequent letters.

use crate::core::{SolverError, WORD_LENGTH};
use crate::language::Dictionary;
use itertools::Itertools;
use rayon::prelude::*;

/// Number of letters an opener pair covers
pub const OPENER_LETTERS: usize = WORD_LENGTH * 2;

/// Fixed opener for the given round, or `None` once both are used
///
/// # Examples
/// ```
/// use wordle_assist::solver::choose_opening_guess;
///
/// let openers = ["those".to_string(), "drain".to_string()];
/// assert_eq!(choose_opening_guess(0, &openers), Some("those"));
/// assert_eq!(choose_opening_guess(1, &openers), Some("drain"));
/// assert_eq!(choose_opening_guess(2, &openers), None);
/// ```
#[must_use]
pub fn choose_opening_guess(round: usize, openers: &[String; 2]) -> Option<&str> {
    openers.get(round).map(String::as_str)
}

/// Find every ordered pair of dictionary words that split the ten letters between them
///
/// Equivalent to trying all 10! permutations of the letters and keeping
/// those whose two halves are both words. Instead of walking permutations,
/// each five-letter subset is permuted on its own and paired with the
/// permutations of its complement. Subsets are processed in parallel.
///
/// # Errors
/// Returns `SolverError::InvalidInput` unless exactly ten distinct letters are given.
pub fn find_optimal_openers(
    letters: &[char],
    dictionary: &Dictionary,
) -> Result<Vec<(String, String)>, SolverError> {
    let mut distinct = letters.to_vec();
    distinct.sort_unstable();
    distinct.dedup();
    if letters.len() != OPENER_LETTERS || distinct.len() != OPENER_LETTERS {
        return Err(SolverError::invalid(format!(
            "opener search needs {OPENER_LETTERS} distinct letters, got {letters:?}"
        )));
    }

    let subsets: Vec<Vec<usize>> = (0..OPENER_LETTERS).combinations(WORD_LENGTH).collect();

    let mut pairs: Vec<(String, String)> = subsets
        .into_par_iter()
        .flat_map_iter(|subset| {
            let (first, second) = split_letters(letters, &subset);
            let first_words = dictionary_permutations(&first, dictionary);
            let second_words = dictionary_permutations(&second, dictionary);

            first_words
                .into_iter()
                .cartesian_product(second_words)
                .collect::<Vec<_>>()
        })
        .collect();

    pairs.sort_unstable();
    Ok(pairs)
}

/// Split letters into those at the `subset` indices and the rest
fn split_letters(letters: &[char], subset: &[usize]) -> (Vec<char>, Vec<char>) {
    let (selected, rest): (Vec<(usize, char)>, Vec<(usize, char)>) = letters
        .iter()
        .copied()
        .enumerate()
        .partition(|(i, _)| subset.contains(i));

    (
        selected.into_iter().map(|(_, letter)| letter).collect(),
        rest.into_iter().map(|(_, letter)| letter).collect(),
    )
}

/// Orderings of `letters` that are dictionary words
fn dictionary_permutations(letters: &[char], dictionary: &Dictionary) -> Vec<String> {
    letters
        .iter()
        .permutations(letters.len())
        .map(|ordering| ordering.into_iter().collect::<String>())
        .filter(|word| dictionary.contains(word))
        .collect()
}
