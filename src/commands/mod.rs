//! Command implementations

pub mod benchmark;
pub mod openers;
pub mod simple;
pub mod solve;

pub use benchmark::{BenchmarkResult, run_benchmark, sample_targets};
pub use openers::run_openers;
pub use simple::{PromptFeedback, run_simple};
pub use solve::{SolveConfig, SolveResult, solve_word};
