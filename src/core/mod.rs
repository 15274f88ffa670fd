//! Core domain types for the assistant
//!
//! Words, colour feedback and the constraint tracker. Everything here is
//! pure and independent of I/O.

mod constraints;
mod error;
mod feedback;
mod word;

pub use constraints::{ConstraintState, LetterObservation, PositionConstraint, PositionRecord};
pub use error::SolverError;
pub use feedback::{Color, Feedback};
pub use word::{Word, WordError};

/// Number of letters in every word on the board
pub const WORD_LENGTH: usize = 5;

/// Number of rounds in a game
pub const MAX_ROUNDS: usize = 6;
