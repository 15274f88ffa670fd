//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    describe_position, print_benchmark_result, print_constraints, print_openers,
    print_session_summary, print_solve_result,
};
