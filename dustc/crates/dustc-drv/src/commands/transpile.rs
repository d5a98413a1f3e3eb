//! `dustc transpile` — lex, parse, and emit the naive C translation
//! (`SPEC_FULL.md` §6.3). Experimental: not held to the lexer/parser's
//! correctness bar.

use dustc_util::Handler;

use crate::commands::common::resolve_source;
use crate::error::Result;
use crate::transpile::transpile;

#[derive(Debug, Clone)]
pub struct TranspileArgs {
    pub input: String,
    pub fp: bool,
    pub no_color: bool,
}

pub fn run_transpile(args: TranspileArgs) -> Result<()> {
    let source = resolve_source(&args.input, args.fp)?;
    let handler = Handler::with_ansi(!args.no_color);
    let chars: Vec<char> = source.chars().collect();

    let source_name = if args.fp { args.input.as_str() } else { "<stdin>" };
    let ast = dustc_par::parse_source(&chars, source_name, &handler);

    print!("{}", transpile(&ast));
    Ok(())
}
