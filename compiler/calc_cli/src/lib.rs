//! Command-line front end for the calculator engine.
//!
//! Split from `main.rs` so argument parsing and the REPL loop can be tested
//! against in-memory readers and writers.

pub mod options;
pub mod repl;
pub mod tracing_setup;

pub use options::{parse_args, Command, Options};
