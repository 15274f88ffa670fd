//! Wordle Assistant - CLI
//!
//! Suggests Wordle guesses from colour feedback, with TUI and CLI modes.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wordle_assist::{
    commands::{SolveConfig, run_benchmark, run_openers, run_simple, sample_targets, solve_word},
    language::{Dictionary, LANGUAGE_NAMES, LanguageProfile},
    output::{print_benchmark_result, print_openers, print_solve_result},
};

#[derive(Parser)]
#[command(
    name = "wordle_assist",
    about = "Wordle assistant: play the suggested word, type back the colours",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Language profile
    #[arg(short, long, global = true, default_value = "english", value_parser = LANGUAGE_NAMES.to_vec())]
    language: String,

    /// Dictionary file, one word per line (default: <language>.txt)
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', global = true, action = ArgAction::Count)]
    log_level: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (interactive assistant without TUI)
    Simple,

    /// Self-play against a known target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show candidate counts per round
        #[arg(long)]
        verbose: bool,
    },

    /// Self-play on random dictionary words
    Benchmark {
        /// Number of random words to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },

    /// Search opener pairs covering the language's ten most frequent letters
    Openers,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level);

    let profile = LanguageProfile::from_name(&cli.language)
        .with_context(|| format!("unknown language '{}'", cli.language))?;

    let path = cli
        .dictionary
        .unwrap_or_else(|| profile.default_dictionary().to_path_buf());
    let dictionary = Dictionary::load(&path)?;
    info!(language = profile.name(), words = dictionary.len(), "Ready");

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&profile, &dictionary),
        Commands::Simple => run_simple(&profile, &dictionary).map(|_| ()),
        Commands::Solve { word, verbose } => run_solve_command(&word, verbose, &profile, &dictionary),
        Commands::Benchmark { count } => run_benchmark_command(count, &profile, &dictionary),
        Commands::Openers => {
            let pairs = run_openers(&profile, &dictionary)?;
            print_openers(profile.frequency_letters(), &pairs);
            Ok(())
        }
    }
}

fn run_solve_command(
    word: &str,
    verbose: bool,
    profile: &LanguageProfile,
    dictionary: &Dictionary,
) -> Result<()> {
    let config = SolveConfig::new(word.to_string());
    let result = solve_word(config, profile, dictionary)?;

    print_solve_result(&result, verbose);
    Ok(())
}

fn run_benchmark_command(
    count: usize,
    profile: &LanguageProfile,
    dictionary: &Dictionary,
) -> Result<()> {
    let targets = sample_targets(dictionary, count);
    println!("Running benchmark on {} random words...", targets.len());

    let progress = ProgressBar::new(targets.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
            .progress_chars("█▓▒░"),
    );

    let result = run_benchmark(profile, dictionary, &targets, &progress);
    print_benchmark_result(&result);
    Ok(())
}

fn run_play_command(profile: &LanguageProfile, dictionary: &Dictionary) -> Result<()> {
    use wordle_assist::interactive::{App, run_tui};

    let app = App::new(profile, dictionary);
    run_tui(app)
}
