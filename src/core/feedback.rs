//! Per-letter colour feedback
//!
//! The game answers every guess with one colour per position:
//! - `r` = Absent (letter not in word)
//! - `o` = Present elsewhere (letter in word, wrong position)
//! - `g` = Correct position

use super::{SolverError, WORD_LENGTH, Word};
use std::fmt;
use std::str::FromStr;

/// Feedback colour for a single position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Absent,
    PresentElsewhere,
    CorrectPosition,
}

impl Color {
    /// Map a feedback code (`g`, `o`, `r`) to a colour. Codes are case-sensitive.
    #[must_use]
    pub const fn from_code(code: char) -> Option<Self> {
        match code {
            'g' => Some(Self::CorrectPosition),
            'o' => Some(Self::PresentElsewhere),
            'r' => Some(Self::Absent),
            _ => None,
        }
    }

    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::CorrectPosition => 'g',
            Self::PresentElsewhere => 'o',
            Self::Absent => 'r',
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::CorrectPosition => '🟩',
            Self::PresentElsewhere => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Colour feedback for a whole guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Color; WORD_LENGTH]);

impl Feedback {
    /// All positions correct
    pub const SOLVED: Self = Self([Color::CorrectPosition; WORD_LENGTH]);

    #[must_use]
    pub const fn new(colors: [Color; WORD_LENGTH]) -> Self {
        Self(colors)
    }

    #[inline]
    #[must_use]
    pub const fn colors(&self) -> &[Color; WORD_LENGTH] {
        &self.0
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    /// Parse a feedback string such as `"gorrg"`
    ///
    /// Parsing is strict: the string must hold exactly five codes from
    /// `g`, `o` and `r`.
    ///
    /// # Errors
    /// Returns `SolverError::InvalidInput` on a wrong length or an unknown code.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::{Color, Feedback};
    ///
    /// let feedback = Feedback::parse("grrro").unwrap();
    /// assert_eq!(feedback.colors()[0], Color::CorrectPosition);
    /// assert_eq!(feedback.colors()[4], Color::PresentElsewhere);
    ///
    /// assert!(Feedback::parse("gyrro").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, SolverError> {
        let codes: Vec<char> = input.chars().collect();
        if codes.len() != WORD_LENGTH {
            return Err(SolverError::invalid(format!(
                "feedback '{input}' has {} codes, expected {WORD_LENGTH}",
                codes.len()
            )));
        }

        let mut colors = [Color::Absent; WORD_LENGTH];
        for (slot, &code) in colors.iter_mut().zip(&codes) {
            *slot = Color::from_code(code).ok_or_else(|| {
                SolverError::invalid(format!(
                    "unknown feedback code '{code}' (use g, o or r)"
                ))
            })?;
        }

        Ok(Self(colors))
    }

    /// Calculate the feedback the game gives when `guess` is played against `answer`
    ///
    /// Duplicate letters follow the game's rules: exact matches are marked
    /// first and consume the answer's letter pool, then misplaced letters are
    /// marked from whatever remains.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::{Feedback, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("slate").unwrap();
    ///
    /// assert_eq!(Feedback::calculate(&guess, &answer).to_string(), "rrgrg");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let mut result = [Color::Absent; WORD_LENGTH];
        let mut answer_available = answer.char_counts();

        // Allow: Index needed to compare guess[i] with answer[i] and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            let letter = guess.char_at(i);
            if letter == answer.char_at(i) {
                result[i] = Color::CorrectPosition;
                if let Some(count) = answer_available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Allow: Index needed to access guess[i] and check/set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if result[i] == Color::Absent
                && let Some(count) = answer_available.get_mut(&guess.char_at(i))
                && *count > 0
            {
                result[i] = Color::PresentElsewhere;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Render as coloured squares, e.g. "🟩⬜⬜🟨🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|c| c.emoji()).collect()
    }
}

impl FromStr for Feedback {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for color in &self.0 {
            write!(f, "{}", color.code())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feedback(guess: &str, answer: &str) -> Feedback {
        Feedback::calculate(&Word::new(guess).unwrap(), &Word::new(answer).unwrap())
    }

    #[test]
    fn color_codes() {
        assert_eq!(Color::from_code('g'), Some(Color::CorrectPosition));
        assert_eq!(Color::from_code('o'), Some(Color::PresentElsewhere));
        assert_eq!(Color::from_code('r'), Some(Color::Absent));
        assert_eq!(Color::from_code('G'), None);
        assert_eq!(Color::from_code('y'), None);
    }

    #[test]
    fn solved_constant() {
        assert!(Feedback::SOLVED.is_solved());
        assert_eq!(Feedback::SOLVED.to_string(), "ggggg");
    }

    #[test]
    fn parse_valid() {
        let parsed = Feedback::parse("gorrg").unwrap();
        assert_eq!(
            parsed.colors(),
            &[
                Color::CorrectPosition,
                Color::PresentElsewhere,
                Color::Absent,
                Color::Absent,
                Color::CorrectPosition,
            ]
        );
        assert_eq!("gorrg".parse::<Feedback>().unwrap(), parsed);
    }

    #[test]
    fn parse_rejects_unknown_codes() {
        assert!(matches!(
            Feedback::parse("gyrrg"),
            Err(SolverError::InvalidInput(_))
        ));
        // Codes are case-sensitive
        assert!(Feedback::parse("GORRG").is_err());
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert!(Feedback::parse("").is_err());
        assert!(Feedback::parse("gor").is_err());
        assert!(Feedback::parse("gorrgg").is_err());
    }

    #[test]
    fn calculate_all_absent() {
        let fb = feedback("abcde", "fghij");
        assert_eq!(fb.colors(), &[Color::Absent; 5]);
    }

    #[test]
    fn calculate_perfect() {
        assert!(feedback("crane", "crane").is_solved());
    }

    #[test]
    fn calculate_duplicate_letters_yellow_pool() {
        // SPEED vs ERASE: S present, P absent, both E present, D absent
        assert_eq!(feedback("speed", "erase").to_string(), "oroor");
    }

    #[test]
    fn calculate_duplicate_letters_green_takes_priority() {
        // ROBOT vs FLOOR: the second O is exact, the first is misplaced
        assert_eq!(feedback("robot", "floor").to_string(), "oorgr");
    }

    #[test]
    fn calculate_extra_duplicate_is_absent() {
        // Only one E in THOSE: the green consumes it
        assert_eq!(feedback("geese", "those").to_string(), "rrrgg");
    }

    #[test]
    fn emoji_rendering() {
        assert_eq!(Feedback::parse("gorrg").unwrap().to_emoji(), "🟩🟨⬜⬜🟩");
    }
}
