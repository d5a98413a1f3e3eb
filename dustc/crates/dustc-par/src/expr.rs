//! Expression grammar: precedence climbing over four levels (`spec.md`
//! §4.4.2).
//!
//! ```text
//! EXPR   = TERM  { ("+"|"-"|".."|"and"|"or"|"xor"|"in") TERM }
//! TERM   = POW   { ("*"|"/"|"=="|"!="|"<"|"<="|">"|">=") POW }
//! POW    = FACTOR { ("^"|"%") FACTOR }
//! FACTOR = ("+"|"-"|"not") FACTOR
//!        | StringLit    postfix
//!        | Numeric      [ "." Numeric ]        // fuses into Float
//!        | Identifier   postfix                // Var, or Call if "(" follows
//!        | "(" EXPR ")" postfix
//!        | "[" EXPR { "," EXPR } "]" postfix    // array literal
//! postfix = { "." FACTOR | "[" EXPR "]" | "(" [ EXPR { "," EXPR } ] ")" }
//! ```

use crate::ast::{Node, OpKind};
use crate::Parser;
use dustc_lex::TokenKind;
use dustc_util::ustring;

const EXPR_OPS: &[&str] = &["+", "-", "..", "and", "or", "xor", "in"];
const TERM_OPS: &[&str] = &["*", "/", "==", "!=", "<", "<=", ">", ">="];
const POW_OPS: &[&str] = &["^", "%"];
const UNARY_OPS: &[&str] = &["+", "-", "not"];

/// Tokens an expression is allowed to stop on, wherever it is embedded
/// (statement, condition, array element, call argument, parenthesized
/// sub-expression) — `spec.md` §4.4.2: "the parser requires the current
/// token to be one of `; EOF ) { } , ]`".
pub(crate) fn is_expr_terminator(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::StmtSep
            | TokenKind::EndOfInput
            | TokenKind::RParen
            | TokenKind::LCurly
            | TokenKind::RCurly
            | TokenKind::Comma
            | TokenKind::RSquare
    )
}

impl<'a> Parser<'a> {
    /// Parse one full expression and validate (without consuming) that it
    /// is followed by a valid terminator. Callers decide what to do with
    /// that terminator — a statement requires it to specifically be `;`,
    /// an `if` condition requires `{`, and so on.
    pub(crate) fn parse_expression(&mut self) -> Node {
        let node = self.parse_expr_level();
        if !is_expr_terminator(self.current().kind) {
            self.raise("Expected ;");
        }
        node
    }

    pub(crate) fn parse_expr_level(&mut self) -> Node {
        let mut left = self.parse_term();
        loop {
            let op = match self.current_operator() {
                Some(s) if EXPR_OPS.contains(&s) => s.to_string(),
                _ => break,
            };
            self.advance();
            let right = self.parse_term();
            left = Node::BinOp {
                op: OpKind::from_symbol(&op),
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        left
    }

    fn parse_term(&mut self) -> Node {
        let mut left = self.parse_pow();
        loop {
            let op = match self.current_operator() {
                Some(s) if TERM_OPS.contains(&s) => s.to_string(),
                _ => break,
            };
            self.advance();
            let right = self.parse_pow();
            left = Node::BinOp {
                op: OpKind::from_symbol(&op),
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        left
    }

    /// `^` and `%` deliberately share the tightest binary tier and are
    /// parsed left-to-right within it (Design Note §9: preserved, not a
    /// bug — `a % b * c` parses as `(a % b) * c`).
    fn parse_pow(&mut self) -> Node {
        let mut left = self.parse_factor();
        loop {
            let op = match self.current_operator() {
                Some(s) if POW_OPS.contains(&s) => s.to_string(),
                _ => break,
            };
            self.advance();
            let right = self.parse_factor();
            left = Node::BinOp {
                op: OpKind::from_symbol(&op),
                left: Box::new(left),
                right: Box::new(right),
            };
        }
        left
    }

    fn parse_factor(&mut self) -> Node {
        if let Some(op) = self.current_operator() {
            if UNARY_OPS.contains(&op) {
                let op = op.to_string();
                self.advance();
                let operand = self.parse_factor();
                return Node::UnaryOp {
                    op: OpKind::from_symbol(&op),
                    operand: Box::new(operand),
                };
            }
        }

        match self.current().kind {
            TokenKind::String => {
                let text = self.current().data.clone();
                self.advance();
                let base = Node::String(text);
                self.parse_postfix(base)
            }
            TokenKind::Numeric => self.parse_numeric_factor(),
            TokenKind::Identifier => {
                let name = self.current().data.clone();
                self.advance();
                let base = if self.current().kind == TokenKind::LParen {
                    Node::FuncBase(name)
                } else {
                    Node::Var(name)
                };
                self.parse_postfix(base)
            }
            TokenKind::LParen => {
                self.advance();
                if self.current().kind == TokenKind::RParen {
                    self.raise("Expression expected between parantheses");
                }
                let inner = self.parse_expression();
                self.expect(TokenKind::RParen, "Expected )");
                self.parse_postfix(inner)
            }
            TokenKind::LSquare => {
                self.advance();
                let mut elements = Vec::new();
                if self.current().kind != TokenKind::RSquare {
                    loop {
                        elements.push(self.parse_expression());
                        if self.current().kind == TokenKind::Comma {
                            self.advance();
                            continue;
                        }
                        break;
                    }
                }
                self.expect(TokenKind::RSquare, "Expected ]");
                let empty = elements.is_empty();
                self.parse_postfix(Node::Array { elements, empty })
            }
            _ => self.raise("Expression expected"),
        }
    }

    /// `Numeric [ "." Numeric ]` — fuses into a `Float`; any other token
    /// after the `.` is "Can't subscript integer literal" since bare
    /// numeric literals have no `postfix` production (`spec.md` §4.4.2).
    fn parse_numeric_factor(&mut self) -> Node {
        let text = self.current().data.clone();
        self.advance();

        if self.current().kind == TokenKind::Period {
            self.advance();
            if self.current().kind != TokenKind::Numeric {
                self.raise("Can't subscript integer literal");
            }
            let frac = self.current().data.clone();
            self.advance();
            let combined: Vec<char> = format!("{text}.{frac}").chars().collect();
            return Node::Float(ustring::parse_float(&combined));
        }

        Node::Integer(parse_integer_literal(&text))
    }

    /// `postfix = { "." FACTOR | "[" EXPR "]" | "(" [ EXPR { "," EXPR } ] ")" }`
    ///
    /// Left-associative: each `.`/`[]`/`()` attaches to the `base` built so
    /// far rather than to the remainder of the chain, so
    /// `foo()(1, 2).bar[0]` folds as
    /// `Subscript(Child(Call(Call(foo)), bar), 0)` (`spec.md` §4.4.2).
    fn parse_postfix(&mut self, mut base: Node) -> Node {
        let mut last_was_call = false;
        loop {
            match self.current().kind {
                TokenKind::Period => {
                    self.advance();
                    let child = self.parse_postfix_atom();
                    base = Node::Child {
                        parent: Box::new(base),
                        child: Box::new(child),
                    };
                    last_was_call = false;
                }
                TokenKind::LSquare => {
                    self.advance();
                    if self.current().kind == TokenKind::RSquare {
                        self.raise("Subscripting with nothing");
                    }
                    let index = self.parse_expression();
                    self.expect(TokenKind::RSquare, "Expected ]");
                    base = Node::Subscript {
                        base: Box::new(base),
                        index: Box::new(index),
                    };
                    last_was_call = false;
                }
                TokenKind::LParen => {
                    self.advance();
                    let args = if self.current().kind == TokenKind::RParen {
                        None
                    } else {
                        let mut args = Vec::new();
                        loop {
                            args.push(self.parse_expression());
                            if self.current().kind == TokenKind::Comma {
                                self.advance();
                                continue;
                            }
                            break;
                        }
                        Some(args)
                    };
                    self.expect(TokenKind::RParen, "Expected )");
                    base = Node::Call {
                        callee: Box::new(base),
                        args,
                    };
                    last_was_call = true;
                }
                _ => break,
            }
        }

        // The original front-end special-cases the token directly
        // following an instant-close call; we generalize it to any call
        // whose postfix chain just ended, not just the degenerate
        // `foo()` case, and fold it into the shared terminator check
        // rather than a narrow allow-list (Design Note §9).
        if last_was_call && !is_expr_terminator(self.current().kind) && !matches!(
            self.current().kind,
            TokenKind::Period | TokenKind::LSquare | TokenKind::LParen
        ) {
            let tok = self.current().data.clone();
            self.raise(&format!("Unexpected symbol '{tok}' after function call"));
        }

        base
    }

    /// A single atom on the right of a `.` — an identifier, literal, or
    /// parenthesized expression, but not a further postfix chain of its
    /// own: the enclosing `parse_postfix` loop is what chains `.`/`[]`/`()`
    /// onto `base`, so this must not recurse into `parse_postfix` itself.
    fn parse_postfix_atom(&mut self) -> Node {
        match self.current().kind {
            TokenKind::String => {
                let text = self.current().data.clone();
                self.advance();
                Node::String(text)
            }
            TokenKind::Numeric => self.parse_numeric_factor(),
            TokenKind::Identifier => {
                let name = self.current().data.clone();
                self.advance();
                if self.current().kind == TokenKind::LParen {
                    Node::FuncBase(name)
                } else {
                    Node::Var(name)
                }
            }
            TokenKind::LParen => {
                self.advance();
                if self.current().kind == TokenKind::RParen {
                    self.raise("Expression expected between parantheses");
                }
                let inner = self.parse_expression();
                self.expect(TokenKind::RParen, "Expected )");
                inner
            }
            _ => self.raise("Expression expected"),
        }
    }
}

/// Parse an integer literal the lexer already validated as decimal,
/// `0x`-hex, or `0b`-binary (`spec.md` §4.2: "Numeric parsing does not
/// normalize case for hex/binary prefixes").
fn parse_integer_literal(text: &str) -> i64 {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() > 2 && chars[0] == '0' && chars[1] == 'x' {
        ustring::parse_int(&chars[2..], 16)
    } else if chars.len() > 2 && chars[0] == '0' && chars[1] == 'b' {
        ustring::parse_int(&chars[2..], 2)
    } else {
        ustring::parse_int(&chars, 10)
    }
}
