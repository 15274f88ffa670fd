//! Dictionary loading and membership
//!
//! A dictionary is a plain set of words loaded once per session and only read
//! afterwards.

use crate::core::SolverError;
use rustc_hash::FxHashSet;
use std::fs;
use std::path::Path;
use tracing::info;

/// Set of valid words for one language
///
/// Membership is exact: case and script sensitive, no normalization.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: FxHashSet<String>,
}

impl Dictionary {
    /// Load a newline-separated word list
    ///
    /// Lines are trimmed and empty lines skipped. Word length is not
    /// validated: a line of the wrong length simply never matches a candidate.
    ///
    /// # Errors
    ///
    /// Returns `SolverError::DictionaryLoad` if the file cannot be read.
    ///
    /// # Examples
    /// ```no_run
    /// use wordle_assist::language::Dictionary;
    ///
    /// let dictionary = Dictionary::load("english.txt").unwrap();
    /// println!("Loaded {} words", dictionary.len());
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SolverError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| SolverError::DictionaryLoad {
            path: path.to_path_buf(),
            source,
        })?;

        let dictionary: Self = content.lines().collect();
        info!(
            path = %path.display(),
            words = dictionary.len(),
            "Loaded dictionary"
        );

        Ok(dictionary)
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the words in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// All words with exactly `length` letters, sorted
    #[must_use]
    pub fn words_of_length(&self, length: usize) -> Vec<&str> {
        let mut words: Vec<&str> = self
            .iter()
            .filter(|word| word.chars().count() == length)
            .collect();
        words.sort_unstable();
        words
    }
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let words = iter
            .into_iter()
            .filter_map(|line| {
                let trimmed = line.as_ref().trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            })
            .collect();

        Self { words }
    }
}
