//! Type-position parsing: generic type argument lists and the `enum`
//! body sub-grammar (`spec.md` §4.4.1, §6 grammar summary).

use crate::ast::Node;
use crate::Parser;
use dustc_lex::TokenKind;

impl<'a> Parser<'a> {
    /// `"<" typeList ">"` where each type argument is currently just a
    /// bare identifier (`Primitive`) — the grammar summary does not
    /// nest generics recursively, matching the original front-end's flat
    /// `list<int32, string>` surface.
    pub(crate) fn parse_gentype(&mut self) -> Node {
        let start = self.ctx.index;
        self.expect(TokenKind::Operator, "Expected type or >"); // the "<"
        let mut args = Vec::new();
        loop {
            if self.current().kind != TokenKind::Identifier {
                self.raise("Expected type or >");
            }
            let name = self.current().data.clone();
            self.advance();
            args.push(Node::Primitive(name));

            if self.current().kind == TokenKind::Comma {
                self.advance();
                continue;
            }
            break;
        }

        if self.current_operator() != Some(">") {
            self.raise("Expected type or >");
        }
        self.advance();

        Node::GenType {
            args,
            tokens_consumed: self.ctx.index - start,
        }
    }

    /// The `enum` body: bare identifiers (`Var`) or `IDENT = expr`
    /// (`Assign`), comma-separated, terminated by `}`. A leading comma, a
    /// double comma, or a `;` inside the body all raise (`spec.md`
    /// §4.4.1).
    pub(crate) fn parse_enum_body(&mut self) -> Node {
        let start = self.ctx.index;
        self.expect(TokenKind::LCurly, "Expected {");

        let mut items = Vec::new();
        let mut expect_item = true;

        loop {
            match self.current().kind {
                TokenKind::RCurly => {
                    if expect_item {
                        self.raise("Statement expected before }");
                    }
                    self.advance();
                    break;
                }
                TokenKind::StmtSep => self.raise("Statement expected before ;"),
                TokenKind::Comma => self.raise("Statement expected before ,"),
                TokenKind::Identifier => {
                    if !expect_item {
                        self.raise("Statement expected before ,");
                    }
                    let name = self.current().data.clone();
                    self.advance();

                    if self.current_operator() == Some("=") {
                        self.advance();
                        let value = self.parse_expression();
                        items.push(Node::Assign {
                            name,
                            op: "=".to_string(),
                            expr: Box::new(value),
                        });
                    } else {
                        items.push(Node::Var(name));
                    }

                    if self.current().kind == TokenKind::Comma {
                        self.advance();
                        expect_item = true;
                    } else {
                        expect_item = false;
                    }
                }
                _ => self.raise("Identifier expected after enum"),
            }
        }

        Node::Body {
            stmts: items,
            tokens_consumed: self.ctx.index - start,
        }
    }
}
