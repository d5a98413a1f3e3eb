//! dustc-par - the Dust parser and AST (`spec.md` §3.4, §4.4).
//!
//! Consumes the token sequence produced by `dustc-lex` and yields a single
//! `Body` node. There is no error recovery: the first malformed
//! construct raises through the shared `Handler` and the process exits
//! (`spec.md` §4.4.3).

pub mod ast;
pub mod expr;
pub mod printer;
pub mod stmt;
pub mod types;

use ast::Node;
use dustc_lex::{Token, TokenKind};
use dustc_util::diagnostic::ErrorKind;
use dustc_util::Handler;

/// Parser state that would otherwise live as file-scope globals in the
/// source implementation (Design Note §9: "a clean port passes these in
/// a parser context record"). `index` is the single shared cursor — there
/// is no token-array slicing, so `Body`/`GenType` nodes compute their own
/// `tokens_consumed` from the index delta around their own parse instead
/// of receiving it back from a sub-parser's return channel.
pub struct ParserCtx {
    pub index: usize,
    pub last_expr_token_count: usize,
    pub body_depth: usize,
}

impl ParserCtx {
    fn new() -> Self {
        Self {
            index: 0,
            last_expr_token_count: 0,
            body_depth: 0,
        }
    }
}

pub struct Parser<'a> {
    tokens: &'a [Token],
    ctx: ParserCtx,
    handler: &'a Handler,
    source_name: &'a str,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Token], source_name: &'a str, handler: &'a Handler) -> Self {
        Self {
            tokens,
            ctx: ParserCtx::new(),
            handler,
            source_name,
        }
    }

    /// The token under the cursor. The lexer always terminates with
    /// `EndOfInput`, so reading past the last index yields that token
    /// repeatedly rather than panicking.
    fn current(&self) -> &Token {
        self.tokens
            .get(self.ctx.index)
            .unwrap_or_else(|| self.tokens.last().expect("token stream is never empty"))
    }

    fn peek(&self, offset: usize) -> &Token {
        self.tokens
            .get(self.ctx.index + offset)
            .unwrap_or_else(|| self.tokens.last().expect("token stream is never empty"))
    }

    /// Consume and return the current token.
    fn advance(&mut self) -> &Token {
        let tok = self.tokens.get(self.ctx.index).unwrap_or_else(|| {
            self.tokens.last().expect("token stream is never empty")
        });
        if self.ctx.index < self.tokens.len() {
            self.ctx.index += 1;
        }
        tok
    }

    fn current_operator(&self) -> Option<&str> {
        let tok = self.current();
        if tok.kind == TokenKind::Operator {
            Some(tok.data.as_str())
        } else {
            None
        }
    }

    /// Consume the current token if it is an identifier equal to `keyword`.
    fn eat_keyword(&mut self, keyword: &str) -> bool {
        if self.current().kind == TokenKind::Identifier && self.current().data == keyword {
            self.advance();
            true
        } else {
            false
        }
    }

    fn is_keyword(&self, keyword: &str) -> bool {
        self.current().kind == TokenKind::Identifier && self.current().data == keyword
    }

    fn expect(&mut self, kind: TokenKind, message: &str) -> &Token {
        if self.current().kind != kind {
            self.raise(message);
        }
        self.advance()
    }

    fn raise(&self, message: &str) -> ! {
        let pos = self.current().pos;
        self.handler
            .raise(ErrorKind::Syntax, message, self.source_name, pos)
    }

    /// Top-level entry point: parse every statement up to `EndOfInput` and
    /// return the enclosing `Body` (`spec.md` §4.4 "Output").
    pub fn parse(tokens: &'a [Token], source_name: &'a str, handler: &'a Handler) -> Node {
        let mut parser = Parser::new(tokens, source_name, handler);
        let start = parser.ctx.index;
        let stmts = parser.parse_stmt_list(false);
        if parser.ctx.body_depth != 0 {
            parser.raise("Unexpected }");
        }
        Node::Body {
            stmts,
            tokens_consumed: parser.ctx.index - start,
        }
    }

    /// Parse statements until `}` (nested body) or `EndOfInput` (top
    /// level). `nested` selects which terminator is expected; reaching
    /// the wrong one raises (`spec.md` §4.4.1).
    fn parse_stmt_list(&mut self, nested: bool) -> Vec<Node> {
        let mut stmts = Vec::new();
        let mut just_saw_sep = false;

        loop {
            match self.current().kind {
                TokenKind::RCurly => {
                    if nested {
                        return stmts;
                    }
                    self.raise("Unexpected }");
                }
                TokenKind::EndOfInput => {
                    if nested {
                        self.raise("Expected }");
                    }
                    return stmts;
                }
                TokenKind::StmtSep => {
                    if just_saw_sep {
                        self.raise("Statement expected before ;");
                    }
                    just_saw_sep = true;
                    self.advance();
                }
                TokenKind::LCurly => {
                    just_saw_sep = false;
                    stmts.push(self.parse_nested_body());
                }
                _ => {
                    just_saw_sep = false;
                    stmts.push(self.parse_statement());
                }
            }
        }
    }

    /// `{ ... }` appearing as a statement in its own right (§4.4.1: `{ … }`
    /// → `Body`, recursive, appended as a child node).
    fn parse_nested_body(&mut self) -> Node {
        let start = self.ctx.index;
        self.expect(TokenKind::LCurly, "Expected {");
        self.ctx.body_depth += 1;
        let stmts = self.parse_stmt_list(true);
        self.expect(TokenKind::RCurly, "Expected }");
        self.ctx.body_depth -= 1;
        Node::Body {
            stmts,
            tokens_consumed: self.ctx.index - start,
        }
    }
}

/// Lex and parse `source` in one step, for callers (the CLI, tests) that
/// don't need the token stream separately.
pub fn parse_source(source: &[char], source_name: &str, handler: &Handler) -> Node {
    let tokens = dustc_lex::lex(source, source_name, handler);
    Parser::parse(&tokens, source_name, handler)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ast::OpKind;

    fn parse(src: &str) -> Node {
        let handler = Handler::new();
        let chars: Vec<char> = src.chars().collect();
        parse_source(&chars, "<test>", &handler)
    }

    fn body_stmts(node: &Node) -> &[Node] {
        match node {
            Node::Body { stmts, .. } => stmts,
            other => panic!("expected Body, got {other:?}"),
        }
    }

    #[test]
    fn decl_with_operator_precedence() {
        let ast = parse("int x = 1 + 2 * 3;");
        let stmts = body_stmts(&ast);
        assert_eq!(stmts.len(), 1);
        match &stmts[0] {
            Node::Decl { ty, name, init } => {
                assert!(matches!(ty.as_ref(), Node::Primitive(t) if t == "int"));
                assert_eq!(name, "x");
                match init.as_ref() {
                    Node::BinOp {
                        op: OpKind::Add,
                        left,
                        right,
                    } => {
                        assert!(matches!(left.as_ref(), Node::Integer(1)));
                        match right.as_ref() {
                            Node::BinOp {
                                op: OpKind::Mul,
                                left,
                                right,
                            } => {
                                assert!(matches!(left.as_ref(), Node::Integer(2)));
                                assert!(matches!(right.as_ref(), Node::Integer(3)));
                            }
                            other => panic!("expected nested Mul, got {other:?}"),
                        }
                    }
                    other => panic!("expected Add at the top, got {other:?}"),
                }
            }
            other => panic!("expected Decl, got {other:?}"),
        }
    }

    #[test]
    fn unicode_string_assign() {
        let ast = parse("s = \"héllo 🔥\";");
        let stmts = body_stmts(&ast);
        match &stmts[0] {
            Node::Assign { name, op, expr } => {
                assert_eq!(name, "s");
                assert_eq!(op, "=");
                assert!(matches!(expr.as_ref(), Node::String(s) if s == "héllo 🔥"));
            }
            other => panic!("expected Assign, got {other:?}"),
        }
    }

    #[test]
    fn if_else_are_siblings_not_a_chain() {
        let ast = parse("if a == b { x = 1; } else { x = 2; }");
        let stmts = body_stmts(&ast);
        assert_eq!(stmts.len(), 2);
        assert!(matches!(stmts[0], Node::If { .. }));
        assert!(matches!(stmts[1], Node::Else { .. }));
    }

    #[test]
    fn for_range_records_bare_identifier_lhs() {
        let ast = parse("for i in 0..10 { arr[i] = i^2; }");
        let stmts = body_stmts(&ast);
        match &stmts[0] {
            Node::For { var, iter, body } => {
                assert!(matches!(var.as_ref(), Node::Var(v) if v == "i"));
                assert!(matches!(
                    iter.as_ref(),
                    Node::BinOp {
                        op: OpKind::Range,
                        ..
                    }
                ));
                let inner = body_stmts(body);
                match &inner[0] {
                    Node::Assign { name, .. } => assert_eq!(name, "arr"),
                    other => panic!("expected Assign, got {other:?}"),
                }
            }
            other => panic!("expected For, got {other:?}"),
        }
    }

    #[test]
    fn generic_declaration_without_init() {
        let ast = parse("list<int32, string> xs;");
        let stmts = body_stmts(&ast);
        match &stmts[0] {
            Node::DeclNoInit { ty, name } => {
                assert_eq!(name, "xs");
                match ty.as_ref() {
                    Node::GenType { args, .. } => {
                        assert_eq!(args.len(), 2);
                        assert!(matches!(&args[0], Node::Primitive(t) if t == "int32"));
                        assert!(matches!(&args[1], Node::Primitive(t) if t == "string"));
                    }
                    other => panic!("expected GenType, got {other:?}"),
                }
            }
            other => panic!("expected DeclNoInit, got {other:?}"),
        }
    }

    #[test]
    fn postfix_call_chain() {
        let ast = parse("foo()(1, 2).bar[0];");
        let stmts = body_stmts(&ast);
        match &stmts[0] {
            Node::Subscript { base, index } => {
                assert!(matches!(index.as_ref(), Node::Integer(0)));
                match base.as_ref() {
                    Node::Child { parent, child } => {
                        assert!(matches!(child.as_ref(), Node::Var(v) if v == "bar"));
                        match parent.as_ref() {
                            Node::Call { callee, args } => {
                                assert!(args.is_some());
                                match callee.as_ref() {
                                    Node::Call {
                                        callee: inner,
                                        args: inner_args,
                                    } => {
                                        assert!(inner_args.is_none());
                                        assert!(matches!(inner.as_ref(), Node::FuncBase(f) if f == "foo"));
                                    }
                                    other => panic!("expected inner Call, got {other:?}"),
                                }
                            }
                            other => panic!("expected outer Call, got {other:?}"),
                        }
                    }
                    other => panic!("expected Child, got {other:?}"),
                }
            }
            other => panic!("expected Subscript, got {other:?}"),
        }
    }

    #[test]
    fn empty_source_yields_empty_body() {
        let ast = parse("");
        assert_eq!(body_stmts(&ast).len(), 0);
    }

    #[test]
    fn body_tokens_consumed_matches_index_delta() {
        let ast = parse("if a { x = 1; }");
        let stmts = body_stmts(&ast);
        match &stmts[0] {
            Node::If { body, .. } => match body.as_ref() {
                Node::Body { tokens_consumed, .. } => assert!(*tokens_consumed > 0),
                other => panic!("expected Body, got {other:?}"),
            },
            other => panic!("expected If, got {other:?}"),
        }
    }
}
