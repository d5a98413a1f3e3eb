//! dustc-drv - the Dust CLI dispatcher (`SPEC_FULL.md` §6).
//!
//! This crate is the front-end's "peripheral" layer: argument parsing,
//! logging, config loading, file I/O, and the platform probe — everything
//! `spec.md` scopes outside the lexer/parser core. It never changes
//! lexer/parser semantics; it only decides what source text to feed them
//! and how to present what comes back.

pub mod commands;
pub mod config;
pub mod error;
pub mod platform;
pub mod transpile;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    run_parse, run_tokenize, run_transpile, ParseArgs, TokenizeArgs, TranspileArgs,
};
use config::Config;
use error::{DustcError, Result};

#[derive(Parser, Debug)]
#[command(name = "dustc")]
#[command(author = "Dust Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "The Dust language front-end: lexer, parser, and AST tools", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Disable ANSI color in diagnostics and command output.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to a `dust.toml` configuration file.
    #[arg(long, global = true)]
    pub config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Lex the input and print its token stream.
    Tokenize(SourceArgs),

    /// Lex and parse the input and print the resulting AST.
    Parse(SourceArgs),

    /// Lex, parse, and emit the experimental C translation.
    Transpile(SourceArgs),

    /// Print platform and build information.
    Version,
}

#[derive(Parser, Debug)]
pub struct SourceArgs {
    /// Inline source text, or a file path when `--fp` is given.
    pub input: String,

    /// Treat `input` as a file path rather than inline source.
    #[arg(long)]
    pub fp: bool,
}

/// Entry point shared by `main.rs` and the integration tests.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging()?;

    let config = load_config(cli.config.as_deref())?;
    let no_color = cli.no_color || !config.color;

    match cli.command {
        Commands::Tokenize(args) => run_tokenize(TokenizeArgs {
            input: args.input,
            fp: args.fp || config.fp,
            no_color,
        }),
        Commands::Parse(args) => run_parse(ParseArgs {
            input: args.input,
            fp: args.fp || config.fp,
            no_color,
        }),
        Commands::Transpile(args) => run_transpile(TranspileArgs {
            input: args.input,
            fp: args.fp || config.fp,
            no_color,
        }),
        Commands::Version => {
            println!("{}", platform::Platform::probe());
            Ok(())
        }
    }
}

fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = fmt::layer().with_target(false).with_thread_ids(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| DustcError::Other(format!("failed to initialize logging: {e}")))?;

    Ok(())
}

fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tokenize_subcommand() {
        let cli = Cli::parse_from(["dustc", "tokenize", "int x = 1;"]);
        match cli.command {
            Commands::Tokenize(args) => {
                assert_eq!(args.input, "int x = 1;");
                assert!(!args.fp);
            }
            other => panic!("expected Tokenize, got {other:?}"),
        }
    }

    #[test]
    fn parses_fp_flag() {
        let cli = Cli::parse_from(["dustc", "parse", "--fp", "main.dust"]);
        match cli.command {
            Commands::Parse(args) => assert!(args.fp),
            other => panic!("expected Parse, got {other:?}"),
        }
    }

    #[test]
    fn parses_global_no_color_before_subcommand() {
        let cli = Cli::parse_from(["dustc", "--no-color", "version"]);
        assert!(cli.no_color);
        assert!(matches!(cli.command, Commands::Version));
    }
}
