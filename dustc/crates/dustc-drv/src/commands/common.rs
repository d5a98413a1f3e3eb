//! Shared helpers for the `tokenize`/`parse`/`transpile` subcommands.

use std::path::Path;

use crate::error::{DustcError, Result};

/// Resolve the subcommand's positional argument into source text: read it
/// as a file when `--fp` is set, otherwise treat it as inline source.
pub fn resolve_source(input: &str, fp: bool) -> Result<String> {
    if fp {
        std::fs::read_to_string(Path::new(input))
            .map_err(|e| DustcError::FileOperation(format!("reading '{input}': {e}")))
    } else {
        Ok(input.to_string())
    }
}
