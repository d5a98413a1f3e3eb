//! Subcommand implementations for the `dustc` CLI.

pub mod common;

pub mod parse;
pub mod tokenize;
pub mod transpile;

pub use parse::{run_parse, ParseArgs};
pub use tokenize::{run_tokenize, TokenizeArgs};
pub use transpile::{run_transpile, TranspileArgs};
