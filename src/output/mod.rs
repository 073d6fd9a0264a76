//! Terminal output formatting
//!
//! Display utilities for sessions, command results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_benchmark_result, print_session_stats, print_solve_result};
