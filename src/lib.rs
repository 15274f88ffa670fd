//! Wordle Assistant
//!
//! Suggests guesses for Wordle-style games by narrowing a dictionary with the
//! colour feedback of every round. Works for any language with five-letter
//! words; English and Hebrew profiles are built in.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_assist::core::{Feedback, Word};
//! use wordle_assist::language::{Dictionary, LanguageProfile};
//! use wordle_assist::solver::Session;
//!
//! let profile = LanguageProfile::english();
//! let dictionary: Dictionary = ["those", "drain", "lumpy"].into_iter().collect();
//! let mut session = Session::new(&profile, &dictionary);
//!
//! assert_eq!(session.select_guess().unwrap(), "those");
//!
//! let feedback = Feedback::calculate(&Word::new("those").unwrap(), &Word::new("lumpy").unwrap());
//! assert_eq!(feedback.to_string(), "rrrrr");
//! session.submit_feedback(feedback).unwrap();
//! ```

// Core domain types
pub mod core;

// Language profiles and dictionaries
pub mod language;

// Candidate generation and sessions
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
