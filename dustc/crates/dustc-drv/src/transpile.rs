//! Experimental C transpiler (`SPEC_FULL.md` §6.3).
//!
//! Grounded in `transpiler.c`, whose header carries its own warning that
//! this part of the front-end "is still experimental... and may change or
//! get removed in the future." The original only translates top-level
//! `Decl` statements, recursing into `Integer`/`Float`/`String`/`BinOp`/
//! `UnaryOp` expressions and falling through (no `default` arm) for
//! anything else; this port keeps exactly that scope rather than growing
//! it into a real code generator, and is not part of the grounding
//! ledger's correctness-checked core.

use dustc_par::ast::{Node, OpKind};

/// Translate a top-level `Body` into a standalone C source string. Only
/// `Decl` statements are emitted, matching the original's single `switch`
/// arm; every other top-level statement kind is silently skipped.
pub fn transpile(ast: &Node) -> String {
    let mut out = String::from("/* Transpiled from Dust */\n\n#include <stdint.h>\n\n\n");

    if let Node::Body { stmts, .. } = ast {
        for stmt in stmts {
            if let Node::Decl { name, init, .. } = stmt {
                out.push_str(&translate_decl(name, init));
                out.push('\n');
            }
        }
    }

    out
}

fn translate_decl(name: &str, init: &Node) -> String {
    format!("int32_t {name} = {};", translate_expr(init))
}

fn translate_expr(node: &Node) -> String {
    match node {
        Node::Integer(v) => v.to_string(),
        Node::Float(v) => v.to_string(),
        Node::String(s) => format!("\"{s}\""),
        Node::BinOp { op, left, right } => {
            format!(
                "({}{}{})",
                translate_expr(left),
                translate_op(*op),
                translate_expr(right)
            )
        }
        Node::UnaryOp { op, operand } => {
            format!("({}{})", translate_op(*op), translate_expr(operand))
        }
        // The original's switch has no default arm for any other node
        // kind here either; this port makes the gap explicit instead of
        // emitting garbage C.
        _ => "/* unsupported expression */".to_string(),
    }
}

fn translate_op(op: OpKind) -> &'static str {
    op.symbol()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dustc_util::Handler;

    #[test]
    fn transpiles_single_decl() {
        let handler = Handler::new();
        let src: Vec<char> = "int x = 1 + 2;".chars().collect();
        let ast = dustc_par::parse_source(&src, "<test>", &handler);
        let c = transpile(&ast);
        assert!(c.contains("int32_t x = (1+2);"));
    }

    #[test]
    fn skips_non_decl_top_level_statements() {
        let handler = Handler::new();
        let src: Vec<char> = "x = 1;".chars().collect();
        let ast = dustc_par::parse_source(&src, "<test>", &handler);
        let c = transpile(&ast);
        assert!(!c.contains("int32_t"));
    }
}
