//! Candidate generation and ranking
//!
//! Candidates are produced by walking the per-position constraints depth
//! first and checking each completed word against the dictionary. Branches
//! are cut as soon as the remaining positions cannot fit every required
//! letter. When the constrained search space is larger than the dictionary
//! itself, scanning the dictionary is cheaper and yields the same words.
//!
//! Output order is deterministic: words come back in the language's alphabet
//! order, which is the order the depth-first walk visits them in.

use crate::core::{ConstraintState, PositionConstraint, WORD_LENGTH};
use crate::language::Dictionary;
use rustc_hash::FxHashSet;
use std::cmp::Reverse;
use tracing::debug;

/// Generate every dictionary word consistent with the constraints
///
/// # Examples
/// ```
/// use wordle_assist::core::{ConstraintState, Feedback};
/// use wordle_assist::language::Dictionary;
/// use wordle_assist::solver::generate_candidates;
///
/// let dictionary: Dictionary = ["apple", "angle", "eagle"].into_iter().collect();
/// let alphabet: Vec<char> = ('a'..='z').collect();
///
/// let mut state = ConstraintState::new();
/// let feedback = Feedback::parse("grrrg").unwrap();
/// state.record_guess("apple", feedback.colors()).unwrap();
///
/// let pattern = state.positional_pattern(&alphabet);
/// assert!(generate_candidates(&dictionary, &pattern, &state).is_empty());
/// ```
#[must_use]
pub fn generate_candidates(
    dictionary: &Dictionary,
    pattern: &[PositionConstraint; WORD_LENGTH],
    state: &ConstraintState,
) -> Vec<String> {
    let search_space = pattern
        .iter()
        .fold(1usize, |acc, constraint| acc.saturating_mul(constraint.width()));

    let candidates = if search_space > dictionary.len() {
        scan_dictionary(dictionary, pattern, state)
    } else {
        let required: Vec<char> = state.required_letters().collect();
        let mut walker = PatternWalker {
            dictionary,
            pattern,
            state,
            required: &required,
            prefix: String::with_capacity(WORD_LENGTH * 4),
            found: Vec::new(),
        };
        walker.descend(0);
        walker.found
    };

    debug!(
        search_space,
        dictionary = dictionary.len(),
        candidates = candidates.len(),
        "Generated candidates"
    );

    candidates
}

/// Check a word against the per-position constraints
#[must_use]
pub fn matches_pattern(word: &str, pattern: &[PositionConstraint; WORD_LENGTH]) -> bool {
    let mut letters = word.chars();
    let fits = pattern
        .iter()
        .all(|constraint| letters.next().is_some_and(|letter| constraint.allows(letter)));

    fits && letters.next().is_none()
}

fn scan_dictionary(
    dictionary: &Dictionary,
    pattern: &[PositionConstraint; WORD_LENGTH],
    state: &ConstraintState,
) -> Vec<String> {
    let mut found: Vec<String> = dictionary
        .iter()
        .filter(|word| matches_pattern(word, pattern) && state.is_consistent(word))
        .map(str::to_string)
        .collect();
    found.sort_by_cached_key(|word| walk_order(word, pattern));
    found
}

/// Sort key placing a matching word where the depth-first walk would find it
fn walk_order(word: &str, pattern: &[PositionConstraint; WORD_LENGTH]) -> Vec<usize> {
    word.chars()
        .zip(pattern)
        .map(|(letter, constraint)| constraint.rank_of(letter).unwrap_or(usize::MAX))
        .collect()
}

/// Depth-first walk over the constrained letter choices
struct PatternWalker<'a> {
    dictionary: &'a Dictionary,
    pattern: &'a [PositionConstraint; WORD_LENGTH],
    state: &'a ConstraintState,
    required: &'a [char],
    prefix: String,
    found: Vec<String>,
}

impl PatternWalker<'_> {
    fn descend(&mut self, depth: usize) {
        if depth == WORD_LENGTH {
            if self.dictionary.contains(&self.prefix) && self.state.is_consistent(&self.prefix) {
                self.found.push(self.prefix.clone());
            }
            return;
        }

        let missing = self
            .required
            .iter()
            .filter(|&&letter| !self.prefix.contains(letter))
            .count();
        if missing > WORD_LENGTH - depth {
            return;
        }

        let pattern = self.pattern;
        match &pattern[depth] {
            PositionConstraint::Fixed(letter) => self.step(*letter, depth),
            PositionConstraint::Allowed(letters) => {
                for &letter in letters {
                    self.step(letter, depth);
                }
            }
        }
    }

    fn step(&mut self, letter: char, depth: usize) {
        self.prefix.push(letter);
        self.descend(depth + 1);
        self.prefix.pop();
    }
}

/// Number of distinct letters in a word
#[must_use]
pub fn distinct_letters(word: &str) -> usize {
    word.chars().collect::<FxHashSet<char>>().len()
}

/// Rank candidates so that words with more distinct letters come first
///
/// The sort is stable: words with the same number of distinct letters keep
/// their generation order.
#[must_use]
pub fn rank_words(mut candidates: Vec<String>) -> Vec<String> {
    candidates.sort_by_key(|word| Reverse(distinct_letters(word)));
    candidates
}
