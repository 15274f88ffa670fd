//! Solver error type

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors raised while loading a dictionary or updating a solving session
#[derive(Debug)]
pub enum SolverError {
    /// A guess, feedback string or opener search input was malformed.
    ///
    /// Recoverable: the constraint state is left untouched and the caller may re-prompt.
    InvalidInput(String),
    /// The dictionary file could not be read
    DictionaryLoad { path: PathBuf, source: io::Error },
    /// No dictionary word satisfies the accumulated constraints
    NoCandidates,
}

impl SolverError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(message) => write!(f, "Invalid input: {message}"),
            Self::DictionaryLoad { path, source } => {
                write!(f, "Failed to load dictionary {}: {source}", path.display())
            }
            Self::NoCandidates => write!(f, "No words found"),
        }
    }
}

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DictionaryLoad { source, .. } => Some(source),
            _ => None,
        }
    }
}
