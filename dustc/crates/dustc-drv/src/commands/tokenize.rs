//! `dustc tokenize` — lex the input and print each token, one per line.

use dustc_util::Handler;

use crate::commands::common::resolve_source;
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct TokenizeArgs {
    pub input: String,
    pub fp: bool,
    pub no_color: bool,
}

pub fn run_tokenize(args: TokenizeArgs) -> Result<()> {
    let source = resolve_source(&args.input, args.fp)?;
    let handler = Handler::with_ansi(!args.no_color);
    let chars: Vec<char> = source.chars().collect();

    let source_name = if args.fp { args.input.as_str() } else { "<stdin>" };
    let tokens = dustc_lex::lex(&chars, source_name, &handler);

    for token in &tokens {
        println!("{:?} {:?} @{}", token.kind, token.data, token.pos);
    }

    Ok(())
}
