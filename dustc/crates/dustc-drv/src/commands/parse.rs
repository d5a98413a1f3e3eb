//! `dustc parse` — lex and parse the input, printing the resulting AST.

use dustc_par::printer::print_node;
use dustc_util::Handler;

use crate::commands::common::resolve_source;
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct ParseArgs {
    pub input: String,
    pub fp: bool,
    pub no_color: bool,
}

pub fn run_parse(args: ParseArgs) -> Result<()> {
    let source = resolve_source(&args.input, args.fp)?;
    let handler = Handler::with_ansi(!args.no_color);
    let chars: Vec<char> = source.chars().collect();

    let source_name = if args.fp { args.input.as_str() } else { "<stdin>" };
    let ast = dustc_par::parse_source(&chars, source_name, &handler);

    print!("{}", print_node(&ast));
    Ok(())
}
