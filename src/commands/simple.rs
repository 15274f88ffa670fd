//! Simple interactive CLI mode
//!
//! Text-based session: the assistant proposes a word, the user plays it and
//! types back the colours.

use crate::core::SolverError;
use crate::language::{Dictionary, LanguageProfile};
use crate::output::{print_constraints, print_session_summary};
use crate::solver::{FeedbackSource, Session, SessionState};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Candidates listed by name before the rest are counted
const LISTED_CANDIDATES: usize = 10;

/// Reads feedback lines from a reader and prompts on a writer
pub struct PromptFeedback<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptFeedback<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> FeedbackSource for PromptFeedback<R, W> {
    fn request(&mut self, round: usize, guess: &str, candidates: &[String]) -> anyhow::Result<String> {
        writeln!(
            self.output,
            "\n{} {}",
            format!("Round {}", round + 1).bright_cyan().bold(),
            format!("({} possible words)", candidates.len()).bright_black()
        )?;

        if !candidates.is_empty() {
            let listed = candidates.len().min(LISTED_CANDIDATES);
            write!(
                self.output,
                "All possible words: {}",
                candidates[..listed].join(", ")
            )?;
            if candidates.len() > listed {
                write!(self.output, " ... and {} more", candidates.len() - listed)?;
            }
            writeln!(self.output)?;
        }

        writeln!(
            self.output,
            "Please enter the word '{}'",
            guess.to_uppercase().bright_yellow().bold()
        )?;
        write!(
            self.output,
            "Colors for '{guess}' (g=green, o=orange, r=gray, s=skip word, empty=stop): "
        )?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }

    fn rejected(&mut self, error: &SolverError) {
        let _ = writeln!(self.output, "{} {error}", "❌".red());
    }
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple(profile: &LanguageProfile, dictionary: &Dictionary) -> anyhow::Result<SessionState> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              Wordle Assistant - Interactive Mode             ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!(
        "\nLanguage: {} | Dictionary: {} words",
        profile.name().bright_white().bold(),
        dictionary.len()
    );

    let stdin = io::stdin();
    let mut source = PromptFeedback::new(stdin.lock(), io::stdout());
    let mut session = Session::new(profile, dictionary);

    let state = session.run(&mut source)?;

    print_constraints(session.constraints());
    print_session_summary(state, session.history());
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn prompt_reads_one_line_per_request() {
        colored::control::set_override(false);
        let input = Cursor::new("rrrrr\n\n");
        let mut output = Vec::new();
        let mut source = PromptFeedback::new(input, &mut output);

        let first = source.request(0, "those", &["those".to_string()]).unwrap();
        let second = source.request(1, "drain", &[]).unwrap();

        assert_eq!(first, "rrrrr");
        assert_eq!(second, "");

        let printed = String::from_utf8(output).unwrap();
        assert!(printed.contains("Please enter the word 'THOSE'"));
        assert!(printed.contains("Round 2"));
    }

    #[test]
    fn long_candidate_lists_are_truncated() {
        colored::control::set_override(false);
        let candidates: Vec<String> = (0..12).map(|i| format!("word{i}")).collect();
        let mut output = Vec::new();
        let mut source = PromptFeedback::new(Cursor::new("ggggg\n"), &mut output);

        source.request(2, "word0", &candidates).unwrap();

        let printed = String::from_utf8(output).unwrap();
        assert!(printed.contains("All possible words: word0, word1"));
        assert!(printed.contains("word9 ... and 2 more"));
        assert!(!printed.contains("word10"));
    }

    #[test]
    fn short_candidate_lists_are_complete() {
        colored::control::set_override(false);
        let mut output = Vec::new();
        let mut source = PromptFeedback::new(Cursor::new("\n"), &mut output);

        source.request(0, "those", &["those".to_string()]).unwrap();

        let printed = String::from_utf8(output).unwrap();
        assert!(printed.contains("All possible words: those\n"));
        assert!(!printed.contains("more"));
    }

    #[test]
    fn prompt_drives_a_session() {
        let profile = LanguageProfile::english();
        let dictionary: Dictionary = ["those", "drain", "lumpy", "mucky"].into_iter().collect();
        let input = Cursor::new("rrrrr\nrrrrr\nbad\nrgorg\nggggg\n");
        let mut output = Vec::new();
        let mut source = PromptFeedback::new(input, &mut output);
        let mut session = Session::new(&profile, &dictionary);

        let state = session.run(&mut source).unwrap();

        assert_eq!(state, SessionState::Solved);
        assert_eq!(session.history().len(), 4);
        let printed = String::from_utf8(output).unwrap();
        assert!(printed.contains("Invalid input"));
    }

    #[test]
    fn end_of_input_aborts() {
        let profile = LanguageProfile::english();
        let dictionary: Dictionary = ["those", "drain"].into_iter().collect();
        let mut source = PromptFeedback::new(Cursor::new(""), Vec::new());
        let mut session = Session::new(&profile, &dictionary);

        assert_eq!(session.run(&mut source).unwrap(), SessionState::Aborted);
        assert!(session.history().is_empty());
    }
}
