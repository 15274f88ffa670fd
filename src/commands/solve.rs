//! Self-play against a known target
//!
//! Runs a full session where the feedback is computed from the target word
//! instead of being typed in.

use crate::core::{Feedback, MAX_ROUNDS, SolverError, Word};
use anyhow::Result;
use crate::language::{Dictionary, LanguageProfile};
use crate::solver::{FeedbackSource, RoundRecord, Session, SessionState};

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_rounds: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_rounds: MAX_ROUNDS,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub target: String,
    pub state: SessionState,
    pub rounds: Vec<RoundRecord>,
}

impl SolveResult {
    #[must_use]
    pub fn success(&self) -> bool {
        self.state == SessionState::Solved
    }
}

/// Answers every guess with the feedback the game would give for the target
struct TargetOracle {
    target: Word,
}

impl FeedbackSource for TargetOracle {
    fn request(&mut self, _round: usize, guess: &str, _candidates: &[String]) -> Result<String> {
        // Unplayable dictionary entries are refused
        Ok(Word::new(guess).map_or_else(
            |_| "skip".to_string(),
            |guess| Feedback::calculate(&guess, &self.target).to_string(),
        ))
    }
}

/// Solve a specific word by self-play
///
/// # Errors
///
/// Returns `SolverError::InvalidInput` if the target is not a five-letter word.
pub fn solve_word(
    config: SolveConfig,
    profile: &LanguageProfile,
    dictionary: &Dictionary,
) -> Result<SolveResult> {
    let target = Word::new(config.target)
        .map_err(|e| SolverError::invalid(format!("invalid target word: {e}")))?;

    let mut oracle = TargetOracle { target };
    let mut session = Session::new(profile, dictionary).with_max_rounds(config.max_rounds);
    let state = session.run(&mut oracle)?;

    Ok(SolveResult {
        target: oracle.target.text().to_string(),
        state,
        rounds: session.history().to_vec(),
    })
}
