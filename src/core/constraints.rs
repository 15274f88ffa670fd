//! Constraint tracking across guesses
//!
//! Every guess appends one `LetterObservation` to each board position. The
//! three global letter classifications are rebuilt from the full history
//! after every update rather than patched incrementally.
//!
//! Precedence between classifications: correct position > present elsewhere
//! > absent. A letter reported absent in one slot and present in another (the
//! game does this for duplicate letters) is therefore never treated as absent.

use super::{Color, SolverError, WORD_LENGTH};
use std::collections::BTreeSet;
use tracing::debug;

/// A single letter/colour pair reported for one position of one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterObservation {
    letter: char,
    color: Color,
}

impl LetterObservation {
    #[must_use]
    pub const fn new(letter: char, color: Color) -> Self {
        Self { letter, color }
    }

    #[must_use]
    pub const fn letter(self) -> char {
        self.letter
    }

    #[must_use]
    pub const fn color(self) -> Color {
        self.color
    }
}

/// Observation history for one board position, in guess order
#[derive(Debug, Clone, Default)]
pub struct PositionRecord {
    observations: Vec<LetterObservation>,
}

impl PositionRecord {
    #[must_use]
    pub fn observations(&self) -> &[LetterObservation] {
        &self.observations
    }

    /// The letter confirmed at this position, if any
    ///
    /// The first correct-position observation wins.
    #[must_use]
    pub fn confirmed_letter(&self) -> Option<char> {
        self.observations
            .iter()
            .find(|obs| obs.color() == Color::CorrectPosition)
            .map(|obs| obs.letter())
    }

    /// Letters known to be in the word but not at this position
    #[must_use]
    pub fn misplaced_letters(&self) -> BTreeSet<char> {
        self.observations
            .iter()
            .filter(|obs| obs.color() == Color::PresentElsewhere)
            .map(|obs| obs.letter())
            .collect()
    }
}

/// What a single position may hold
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionConstraint {
    /// The position is confirmed to hold this letter
    Fixed(char),
    /// Any of these letters may appear at the position, in alphabet order
    Allowed(Vec<char>),
}

impl PositionConstraint {
    #[must_use]
    pub fn allows(&self, letter: char) -> bool {
        match self {
            Self::Fixed(fixed) => *fixed == letter,
            Self::Allowed(letters) => letters.contains(&letter),
        }
    }

    /// Index of `letter` in the position's enumeration order
    #[must_use]
    pub fn rank_of(&self, letter: char) -> Option<usize> {
        match self {
            Self::Fixed(fixed) => (*fixed == letter).then_some(0),
            Self::Allowed(letters) => letters.iter().position(|&c| c == letter),
        }
    }

    /// Number of letters the position may hold
    #[must_use]
    pub fn width(&self) -> usize {
        match self {
            Self::Fixed(_) => 1,
            Self::Allowed(letters) => letters.len(),
        }
    }
}

/// Accumulated constraints for one solving session
#[derive(Debug, Clone, Default)]
pub struct ConstraintState {
    positions: [PositionRecord; WORD_LENGTH],
    guess_count: usize,
    absent: BTreeSet<char>,
    present_elsewhere: BTreeSet<char>,
    correct_position: BTreeSet<char>,
}

impl ConstraintState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the feedback for one guess
    ///
    /// The update is all-or-nothing: on error no observation is appended.
    ///
    /// # Errors
    /// Returns `SolverError::InvalidInput` if the guess or the colours are not
    /// exactly five long, or if a correct-position colour names a different
    /// letter than the one already confirmed at that slot.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::{Color, ConstraintState};
    ///
    /// let mut state = ConstraintState::new();
    /// state
    ///     .record_guess("crane", &[
    ///         Color::Absent,
    ///         Color::PresentElsewhere,
    ///         Color::CorrectPosition,
    ///         Color::Absent,
    ///         Color::Absent,
    ///     ])
    ///     .unwrap();
    ///
    /// assert!(state.correct_position_letters().contains(&'a'));
    /// assert!(state.present_elsewhere_letters().contains(&'r'));
    /// assert!(state.absent_letters().contains(&'c'));
    /// ```
    pub fn record_guess(&mut self, guess: &str, colors: &[Color]) -> Result<(), SolverError> {
        let letters: Vec<char> = guess.chars().collect();
        if letters.len() != WORD_LENGTH {
            return Err(SolverError::invalid(format!(
                "guess '{guess}' has {} letters, expected {WORD_LENGTH}",
                letters.len()
            )));
        }
        if colors.len() != WORD_LENGTH {
            return Err(SolverError::invalid(format!(
                "got {} colours, expected {WORD_LENGTH}",
                colors.len()
            )));
        }

        for (i, (&letter, &color)) in letters.iter().zip(colors).enumerate() {
            if color == Color::CorrectPosition
                && let Some(confirmed) = self.positions[i].confirmed_letter()
                && confirmed != letter
            {
                return Err(SolverError::invalid(format!(
                    "position {} is already confirmed as '{confirmed}', cannot also be '{letter}'",
                    i + 1
                )));
            }
        }

        for ((position, &letter), &color) in self.positions.iter_mut().zip(&letters).zip(colors) {
            position
                .observations
                .push(LetterObservation::new(letter, color));
        }
        self.guess_count += 1;
        self.recalculate();

        debug!(
            guess,
            guess_count = self.guess_count,
            absent = self.absent.len(),
            present_elsewhere = self.present_elsewhere.len(),
            correct_position = self.correct_position.len(),
            "Recorded guess"
        );

        Ok(())
    }

    fn recalculate(&mut self) {
        let mut absent = BTreeSet::new();
        let mut present = BTreeSet::new();
        let mut correct = BTreeSet::new();

        for obs in self.positions.iter().flat_map(PositionRecord::observations) {
            match obs.color() {
                Color::Absent => absent.insert(obs.letter()),
                Color::PresentElsewhere => present.insert(obs.letter()),
                Color::CorrectPosition => correct.insert(obs.letter()),
            };
        }

        present.retain(|letter| !correct.contains(letter));
        absent.retain(|letter| !correct.contains(letter) && !present.contains(letter));

        self.absent = absent;
        self.present_elsewhere = present;
        self.correct_position = correct;
    }

    /// Check that every letter known to be in the word appears in `word`
    ///
    /// Only letter membership is checked; positional rules live in
    /// [`ConstraintState::positional_pattern`].
    #[must_use]
    pub fn is_consistent(&self, word: &str) -> bool {
        self.required_letters().all(|letter| word.contains(letter))
    }

    /// Per-position constraints over the given alphabet
    ///
    /// `Allowed` letters keep the order they have in `alphabet`.
    #[must_use]
    pub fn positional_pattern(&self, alphabet: &[char]) -> [PositionConstraint; WORD_LENGTH] {
        std::array::from_fn(|i| {
            let record = &self.positions[i];
            record.confirmed_letter().map_or_else(
                || {
                    let misplaced = record.misplaced_letters();
                    PositionConstraint::Allowed(
                        alphabet
                            .iter()
                            .copied()
                            .filter(|c| !self.absent.contains(c) && !misplaced.contains(c))
                            .collect(),
                    )
                },
                PositionConstraint::Fixed,
            )
        })
    }

    /// Letters that must appear somewhere in the answer
    pub fn required_letters(&self) -> impl Iterator<Item = char> + '_ {
        self.present_elsewhere
            .iter()
            .chain(&self.correct_position)
            .copied()
    }

    #[must_use]
    pub const fn guess_count(&self) -> usize {
        self.guess_count
    }

    #[must_use]
    pub const fn positions(&self) -> &[PositionRecord; WORD_LENGTH] {
        &self.positions
    }

    #[must_use]
    pub const fn absent_letters(&self) -> &BTreeSet<char> {
        &self.absent
    }

    #[must_use]
    pub const fn present_elsewhere_letters(&self) -> &BTreeSet<char> {
        &self.present_elsewhere
    }

    #[must_use]
    pub const fn correct_position_letters(&self) -> &BTreeSet<char> {
        &self.correct_position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback;

    fn record(state: &mut ConstraintState, guess: &str, codes: &str) {
        let feedback = Feedback::parse(codes).unwrap();
        state.record_guess(guess, feedback.colors()).unwrap();
    }

    fn assert_disjoint(state: &ConstraintState) {
        assert!(state.absent_letters().is_disjoint(state.present_elsewhere_letters()));
        assert!(state.absent_letters().is_disjoint(state.correct_position_letters()));
        assert!(
            state
                .present_elsewhere_letters()
                .is_disjoint(state.correct_position_letters())
        );
    }

    fn english() -> Vec<char> {
        ('a'..='z').collect()
    }

    #[test]
    fn empty_state_allows_everything() {
        let state = ConstraintState::new();
        assert_eq!(state.guess_count(), 0);
        assert!(state.is_consistent("zzzzz"));

        for constraint in state.positional_pattern(&english()) {
            assert_eq!(constraint.width(), 26);
        }
    }

    #[test]
    fn record_guess_appends_observations_in_order() {
        let mut state = ConstraintState::new();
        record(&mut state, "those", "rrrrr");
        record(&mut state, "drain", "rgrrr");

        assert_eq!(state.guess_count(), 2);
        let first = state.positions()[0].observations();
        assert_eq!(first.len(), 2);
        assert_eq!(first[0], LetterObservation::new('t', Color::Absent));
        assert_eq!(first[1], LetterObservation::new('d', Color::Absent));
        assert_eq!(state.positions()[1].confirmed_letter(), Some('r'));
    }

    #[test]
    fn derived_sets_follow_precedence() {
        let mut state = ConstraintState::new();
        // Two E's: one exact, one absent. E must not be treated as absent.
        record(&mut state, "geese", "rrrgg");

        assert!(state.correct_position_letters().contains(&'e'));
        assert!(!state.absent_letters().contains(&'e'));
        assert!(state.absent_letters().contains(&'g'));
        assert_disjoint(&state);
    }

    #[test]
    fn precedence_independent_of_recording_order() {
        let mut absent_first = ConstraintState::new();
        record(&mut absent_first, "salty", "rrrrr");
        record(&mut absent_first, "lasso", "orrrr");
        record(&mut absent_first, "plant", "rgrrr");

        let mut correct_first = ConstraintState::new();
        record(&mut correct_first, "plant", "rgrrr");
        record(&mut correct_first, "lasso", "orrrr");
        record(&mut correct_first, "salty", "rrrrr");

        for state in [&absent_first, &correct_first] {
            assert!(state.correct_position_letters().contains(&'l'));
            assert!(!state.present_elsewhere_letters().contains(&'l'));
            assert!(!state.absent_letters().contains(&'l'));
            assert_disjoint(state);
        }
        assert_eq!(
            absent_first.absent_letters(),
            correct_first.absent_letters()
        );
        assert_eq!(
            absent_first.present_elsewhere_letters(),
            correct_first.present_elsewhere_letters()
        );
    }

    #[test]
    fn sets_stay_disjoint_after_every_update() {
        let guesses = [
            ("those", "rorro"),
            ("drain", "rrrrr"),
            ("mover", "rgrgr"),
            ("boxes", "rgrgr"),
            ("hoped", "orrgr"),
        ];

        let mut state = ConstraintState::new();
        for (guess, codes) in guesses {
            record(&mut state, guess, codes);
            assert_disjoint(&state);
        }
    }

    #[test]
    fn present_letters_leave_absent_set() {
        let mut state = ConstraintState::new();
        record(&mut state, "eerie", "orrrr");

        assert!(state.present_elsewhere_letters().contains(&'e'));
        assert!(!state.absent_letters().contains(&'e'));
        assert!(state.absent_letters().contains(&'r'));
        assert!(state.absent_letters().contains(&'i'));
    }

    #[test]
    fn is_consistent_checks_required_letters_only() {
        let mut state = ConstraintState::new();
        record(&mut state, "crane", "ogrrr");

        assert!(state.is_consistent("rocks"));
        // Membership only: c at position 0 is still accepted here
        assert!(state.is_consistent("cr..."));
        assert!(!state.is_consistent("rusty"));
        assert!(!state.is_consistent("comic"));
    }

    #[test]
    fn positional_pattern_fixed_and_allowed() {
        let mut state = ConstraintState::new();
        record(&mut state, "crane", "ogrrr");
        let pattern = state.positional_pattern(&english());

        assert_eq!(pattern[1], PositionConstraint::Fixed('r'));
        // Misplaced C is excluded only at position 0
        assert!(!pattern[0].allows('c'));
        assert!(pattern[2].allows('c'));
        // Absent letters are excluded everywhere
        for constraint in [&pattern[0], &pattern[2], &pattern[3], &pattern[4]] {
            assert!(!constraint.allows('a'));
            assert!(!constraint.allows('n'));
            assert!(!constraint.allows('e'));
        }
        assert_eq!(pattern[0].width(), 26 - 3 - 1);
        assert_eq!(pattern[2].width(), 26 - 3);
    }

    #[test]
    fn allowed_letters_follow_alphabet_order() {
        let state = ConstraintState::new();
        let alphabet = ['z', 'b', 'a'];

        let pattern = state.positional_pattern(&alphabet);

        assert_eq!(pattern[0], PositionConstraint::Allowed(vec!['z', 'b', 'a']));
        assert_eq!(pattern[0].rank_of('a'), Some(2));
        assert_eq!(pattern[0].rank_of('q'), None);
        assert_eq!(PositionConstraint::Fixed('e').rank_of('e'), Some(0));
    }

    #[test]
    fn first_confirmed_letter_wins() {
        let mut state = ConstraintState::new();
        record(&mut state, "crane", "rrgrr");
        record(&mut state, "plaid", "rrgrr");

        assert_eq!(state.positions()[2].confirmed_letter(), Some('a'));
    }

    #[test]
    fn conflicting_green_is_rejected_without_mutation() {
        let mut state = ConstraintState::new();
        record(&mut state, "crane", "rrgrr");

        let conflicting = Feedback::parse("rrgrr").unwrap();
        let result = state.record_guess("droid", conflicting.colors());

        assert!(matches!(result, Err(SolverError::InvalidInput(_))));
        assert_eq!(state.guess_count(), 1);
        assert_eq!(state.positions()[0].observations().len(), 1);
        assert!(!state.absent_letters().contains(&'d'));
    }

    #[test]
    fn length_mismatch_is_rejected_without_mutation() {
        let mut state = ConstraintState::new();

        let too_short = state.record_guess("cat", &[Color::Absent; 3]);
        assert!(matches!(too_short, Err(SolverError::InvalidInput(_))));

        let wrong_colours = state.record_guess("crane", &[Color::Absent; 4]);
        assert!(matches!(wrong_colours, Err(SolverError::InvalidInput(_))));

        assert_eq!(state.guess_count(), 0);
        assert!(state.positions().iter().all(|p| p.observations().is_empty()));
    }

    #[test]
    fn hebrew_guess_is_tracked_per_letter() {
        let mut state = ConstraintState::new();
        record(&mut state, "יובהר", "grrro");

        assert_eq!(state.positions()[0].confirmed_letter(), Some('י'));
        assert!(state.present_elsewhere_letters().contains(&'ר'));
        assert!(state.absent_letters().contains(&'ו'));
    }
}
