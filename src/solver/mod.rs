//! Candidate generation, ranking and the solving session
//!
//! Guesses are ranked by how many distinct letters they contain: the more
//! letters a guess tries, the more feedback it earns.

pub mod candidates;
pub mod openers;
pub mod session;

pub use candidates::{distinct_letters, generate_candidates, matches_pattern, rank_words};
pub use openers::{OPENER_LETTERS, choose_opening_guess, find_optimal_openers};
pub use session::{FeedbackSource, RoundRecord, Session, SessionState};
