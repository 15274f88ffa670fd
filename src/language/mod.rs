//! Language profiles and dictionaries
//!
//! A `LanguageProfile` bundles everything that differs between languages:
//! the alphabet, the two fixed opening guesses, the ten most frequent
//! letters used by the offline opener search, and the default dictionary
//! path.

mod dictionary;

pub use dictionary::Dictionary;

use std::path::{Path, PathBuf};

/// Names accepted by [`LanguageProfile::from_name`]
pub const LANGUAGE_NAMES: &[&str] = &["english", "hebrew"];

/// Per-language solver configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageProfile {
    name: String,
    alphabet: Vec<char>,
    openers: [String; 2],
    frequency_letters: Vec<char>,
    default_dictionary: PathBuf,
}

impl LanguageProfile {
    /// Create a custom profile
    ///
    /// The alphabet is deduplicated while keeping its first-seen order.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        alphabet: impl IntoIterator<Item = char>,
        openers: [&str; 2],
        frequency_letters: impl IntoIterator<Item = char>,
        default_dictionary: impl Into<PathBuf>,
    ) -> Self {
        let mut letters: Vec<char> = Vec::new();
        for letter in alphabet {
            if !letters.contains(&letter) {
                letters.push(letter);
            }
        }

        Self {
            name: name.into(),
            alphabet: letters,
            openers: openers.map(str::to_string),
            frequency_letters: frequency_letters.into_iter().collect(),
            default_dictionary: default_dictionary.into(),
        }
    }

    /// English: a-z, openers THOSE and DRAIN
    #[must_use]
    pub fn english() -> Self {
        Self::new(
            "english",
            'a'..='z',
            ["those", "drain"],
            "etaoinshrd".chars(),
            "english.txt",
        )
    }

    /// Hebrew: the 22 base letters followed by the five final forms
    #[must_use]
    pub fn hebrew() -> Self {
        Self::new(
            "hebrew",
            "אבגדהוזחטיכלמנסעפצקרשתךםןףץ".chars(),
            ["יובהר", "אשתלם"],
            "יוהלאתרבשמ".chars(),
            "hebrew.txt",
        )
    }

    /// Look up a built-in profile by name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "english" => Some(Self::english()),
            "hebrew" => Some(Self::hebrew()),
            _ => None,
        }
    }

    /// Replace the fixed opening guesses
    #[must_use]
    pub fn with_openers(mut self, openers: [&str; 2]) -> Self {
        self.openers = openers.map(str::to_string);
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    #[must_use]
    pub const fn openers(&self) -> &[String; 2] {
        &self.openers
    }

    #[must_use]
    pub fn frequency_letters(&self) -> &[char] {
        &self.frequency_letters
    }

    #[must_use]
    pub fn default_dictionary(&self) -> &Path {
        &self.default_dictionary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_profile() {
        let profile = LanguageProfile::english();
        assert_eq!(profile.alphabet().len(), 26);
        assert_eq!(profile.openers(), &["those".to_string(), "drain".to_string()]);
        assert_eq!(profile.frequency_letters().len(), 10);
    }

    #[test]
    fn hebrew_profile() {
        let profile = LanguageProfile::hebrew();
        assert_eq!(profile.alphabet().len(), 27);
        // The second opener ends in a final mem
        assert!(profile.alphabet().contains(&'ם'));
        assert_eq!(profile.frequency_letters().len(), 10);
        assert_eq!(profile.default_dictionary(), Path::new("hebrew.txt"));
    }

    #[test]
    fn english_openers_use_frequency_letters_once() {
        let profile = LanguageProfile::english();
        let mut opener_letters: Vec<char> =
            profile.openers().iter().flat_map(|w| w.chars()).collect();
        let mut frequency = profile.frequency_letters().to_vec();
        opener_letters.sort_unstable();
        frequency.sort_unstable();
        assert_eq!(opener_letters, frequency);
    }

    #[test]
    fn from_name_lookup() {
        for name in LANGUAGE_NAMES {
            assert_eq!(LanguageProfile::from_name(name).unwrap().name(), *name);
        }
        assert!(LanguageProfile::from_name("klingon").is_none());
    }

    #[test]
    fn custom_alphabet_is_deduplicated() {
        let profile = LanguageProfile::new("tiny", "abca".chars(), ["abcab", "cabca"], "".chars(), "tiny.txt");
        assert_eq!(profile.alphabet(), &['a', 'b', 'c']);
    }

    #[test]
    fn with_openers_replaces_pair() {
        let profile = LanguageProfile::english().with_openers(["crane", "sloth"]);
        assert_eq!(profile.openers()[0], "crane");
        assert_eq!(profile.openers()[1], "sloth");
    }
}
