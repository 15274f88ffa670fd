//! Solving session
//!
//! A session owns the constraint state for one game and moves through
//! `AwaitingGuessSelection` -> `AwaitingFeedback` until it ends as `Solved`,
//! `Exhausted` (no candidate left) or `Aborted` (no response, or out of
//! rounds).

use super::candidates::{generate_candidates, rank_words};
use super::openers::choose_opening_guess;
use crate::core::{ConstraintState, Feedback, MAX_ROUNDS, SolverError};
use crate::language::{Dictionary, LanguageProfile};
use tracing::{debug, info};

/// Where a session currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingGuessSelection,
    AwaitingFeedback,
    Solved,
    Exhausted,
    Aborted,
}

impl SessionState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Solved | Self::Exhausted | Self::Aborted)
    }
}

/// One completed round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundRecord {
    pub guess: String,
    pub feedback: Feedback,
    /// Candidates consistent with the constraints before this guess was played
    pub candidates_before: usize,
}

/// Supplies the game's response to each proposed guess
///
/// Responses are raw text:
/// - empty: no response, the session is aborted
/// - `s` or `skip`: the game refused the word, propose the next candidate
/// - five `g`/`o`/`r` codes: the colour feedback
pub trait FeedbackSource {
    /// Ask for the response to `guess`
    ///
    /// # Errors
    /// Implementations return an error when their input channel fails.
    fn request(&mut self, round: usize, guess: &str, candidates: &[String]) -> anyhow::Result<String>;

    /// Called when a response could not be applied; the same guess is requested again
    fn rejected(&mut self, _error: &SolverError) {}
}

/// An interactive solving session
pub struct Session<'a> {
    profile: &'a LanguageProfile,
    dictionary: &'a Dictionary,
    constraints: ConstraintState,
    state: SessionState,
    max_rounds: usize,
    ranked: Vec<String>,
    cursor: usize,
    candidate_count: usize,
    history: Vec<RoundRecord>,
}

impl<'a> Session<'a> {
    #[must_use]
    pub fn new(profile: &'a LanguageProfile, dictionary: &'a Dictionary) -> Self {
        Self {
            profile,
            dictionary,
            constraints: ConstraintState::new(),
            state: SessionState::AwaitingGuessSelection,
            max_rounds: MAX_ROUNDS,
            ranked: Vec::new(),
            cursor: 0,
            candidate_count: 0,
            history: Vec::new(),
        }
    }

    /// Override the number of rounds (default 6)
    #[must_use]
    pub fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Zero-based index of the current round
    #[must_use]
    pub fn round(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub const fn max_rounds(&self) -> usize {
        self.max_rounds
    }

    #[must_use]
    pub const fn constraints(&self) -> &ConstraintState {
        &self.constraints
    }

    #[must_use]
    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    #[must_use]
    pub const fn profile(&self) -> &LanguageProfile {
        self.profile
    }

    /// The guess waiting for feedback
    #[must_use]
    pub fn current_guess(&self) -> Option<&str> {
        match self.state {
            SessionState::AwaitingFeedback => self.ranked.get(self.cursor).map(String::as_str),
            _ => None,
        }
    }

    /// The current guess followed by the remaining ranked alternatives
    #[must_use]
    pub fn remaining_candidates(&self) -> &[String] {
        self.ranked.get(self.cursor..).unwrap_or_default()
    }

    /// Number of dictionary words consistent with the constraints at this round
    #[must_use]
    pub const fn candidate_count(&self) -> usize {
        self.candidate_count
    }

    /// Pick the guess for the current round
    ///
    /// Rounds 0 and 1 use the profile's fixed openers when they are
    /// dictionary words; later rounds use the highest ranked candidate.
    ///
    /// # Errors
    /// Returns `SolverError::NoCandidates` (and moves to `Exhausted`) when
    /// nothing can be proposed, or `InvalidInput` if the session is not
    /// waiting for a guess selection.
    pub fn select_guess(&mut self) -> Result<&str, SolverError> {
        if self.state != SessionState::AwaitingGuessSelection {
            return Err(SolverError::invalid(format!(
                "cannot select a guess while {:?}",
                self.state
            )));
        }

        let pattern = self.constraints.positional_pattern(self.profile.alphabet());
        let candidates = rank_words(generate_candidates(
            self.dictionary,
            &pattern,
            &self.constraints,
        ));
        self.candidate_count = candidates.len();

        let opener = choose_opening_guess(self.round(), self.profile.openers())
            .filter(|opener| self.dictionary.contains(opener))
            .map(str::to_string);

        self.ranked = match opener {
            Some(opener) => std::iter::once(opener.clone())
                .chain(candidates.into_iter().filter(|word| *word != opener))
                .collect(),
            None => candidates,
        };
        self.cursor = 0;

        self.propose()
    }

    /// The game refused the current guess: propose the next ranked candidate
    ///
    /// # Errors
    /// Returns `SolverError::NoCandidates` (and moves to `Exhausted`) once the
    /// ranked list is used up.
    pub fn skip_guess(&mut self) -> Result<&str, SolverError> {
        if self.state != SessionState::AwaitingFeedback {
            return Err(SolverError::invalid(format!(
                "cannot skip a guess while {:?}",
                self.state
            )));
        }

        self.cursor += 1;
        self.propose()
    }

    fn propose(&mut self) -> Result<&str, SolverError> {
        if self.cursor >= self.ranked.len() {
            info!(round = self.round(), "No candidates left");
            self.state = SessionState::Exhausted;
            return Err(SolverError::NoCandidates);
        }

        self.state = SessionState::AwaitingFeedback;
        let guess = &self.ranked[self.cursor];
        debug!(
            round = self.round(),
            guess = %guess,
            alternatives = self.ranked.len() - self.cursor - 1,
            "Proposed guess"
        );
        Ok(guess)
    }

    /// Apply the game's feedback to the current guess
    ///
    /// # Errors
    /// Returns `SolverError::InvalidInput` if no guess is waiting for feedback
    /// or the feedback conflicts with earlier rounds. The session is left
    /// unchanged in that case.
    pub fn submit_feedback(&mut self, feedback: Feedback) -> Result<SessionState, SolverError> {
        let guess = self
            .current_guess()
            .ok_or_else(|| SolverError::invalid("no guess is waiting for feedback"))?
            .to_string();

        self.constraints.record_guess(&guess, feedback.colors())?;
        self.history.push(RoundRecord {
            guess,
            feedback,
            candidates_before: self.candidate_count,
        });
        self.ranked.clear();
        self.cursor = 0;

        self.state = if feedback.is_solved() {
            SessionState::Solved
        } else if self.round() >= self.max_rounds {
            SessionState::Aborted
        } else {
            SessionState::AwaitingGuessSelection
        };

        info!(
            round = self.round(),
            feedback = %feedback,
            state = ?self.state,
            "Feedback recorded"
        );
        Ok(self.state)
    }

    /// End the session because no response was given
    pub fn abort(&mut self) {
        if !self.state.is_terminal() {
            info!(round = self.round(), "Session aborted");
            self.state = SessionState::Aborted;
        }
    }

    /// Drive the session to a terminal state
    ///
    /// Invalid feedback is reported to the source and requested again;
    /// running out of candidates or receiving no response ends the session
    /// without an error.
    ///
    /// # Errors
    /// Only errors from the feedback source itself are returned.
    pub fn run<F: FeedbackSource + ?Sized>(&mut self, source: &mut F) -> anyhow::Result<SessionState> {
        while !self.state.is_terminal() {
            let mut guess = match self.select_guess() {
                Ok(guess) => guess.to_string(),
                Err(SolverError::NoCandidates) => break,
                Err(err) => return Err(err.into()),
            };

            loop {
                let response = source.request(self.round(), &guess, self.remaining_candidates())?;
                let response = response.trim();

                if response.is_empty() {
                    self.abort();
                    break;
                }

                if matches!(response, "s" | "skip") {
                    match self.skip_guess() {
                        Ok(next) => {
                            guess = next.to_string();
                            continue;
                        }
                        Err(SolverError::NoCandidates) => break,
                        Err(err) => return Err(err.into()),
                    }
                }

                match Feedback::parse(response).and_then(|feedback| self.submit_feedback(feedback)) {
                    Ok(_) => break,
                    Err(err) => source.rejected(&err),
                }
            }
        }

        Ok(self.state)
    }
}
