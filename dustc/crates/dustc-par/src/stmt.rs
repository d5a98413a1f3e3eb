//! Statement dispatch (`spec.md` §4.4.1).

use crate::ast::Node;
use crate::Parser;
use dustc_lex::TokenKind;

const ASSIGN_OPS: &[&str] = &["=", "+=", "-=", "*=", "/=", "^=", "%="];

impl<'a> Parser<'a> {
    /// Classify and parse one statement. Bodies (`{ ... }`) and the
    /// separator-skipping logic live in `parse_stmt_list`; this handles
    /// every other leading-token-sequence row of the dispatch table.
    pub(crate) fn parse_statement(&mut self) -> Node {
        if self.is_keyword("import") {
            return self.parse_import();
        }
        if self.is_keyword("enum") {
            return self.parse_enum();
        }
        if self.is_keyword("if") {
            return self.parse_if();
        }
        if self.is_keyword("elif") {
            return self.parse_elif();
        }
        if self.is_keyword("else") {
            return self.parse_else();
        }
        if self.is_keyword("repeat") {
            return self.parse_repeat();
        }
        if self.is_keyword("while") {
            return self.parse_while();
        }
        if self.is_keyword("for") {
            return self.parse_for();
        }

        if self.current().kind == TokenKind::Identifier {
            if self.peek(1).kind == TokenKind::Identifier {
                return self.parse_simple_decl();
            }
            if self.peek(1).kind == TokenKind::Operator && self.peek(1).data == "<" {
                return self.parse_generic_decl();
            }
            if self.peek(1).kind == TokenKind::Operator
                && ASSIGN_OPS.contains(&self.peek(1).data.as_str())
            {
                return self.parse_assign();
            }
        }

        self.parse_expr_stmt_or_assign()
    }

    /// Fallback for statements that don't match any of the dispatch
    /// table's fixed leading-token shapes: an expression, or — the
    /// grammar's documented LHS limitation (Design Note §9 "Assignment
    /// LHS") — a subscript/member expression immediately followed by an
    /// assignment operator. In the latter case only the leading
    /// identifier is retained as the `Assign` target; the subscript or
    /// member chain in between is parsed (so the cursor advances
    /// correctly) and then discarded, exactly as `spec.md` §8's
    /// `for`/range scenario requires (`arr[i] = i^2;` records the LHS as
    /// plain `"arr"`).
    fn parse_expr_stmt_or_assign(&mut self) -> Node {
        let leading_name = if self.current().kind == TokenKind::Identifier {
            Some(self.current().data.clone())
        } else {
            None
        };

        let expr = self.parse_expr_level();

        if let Some(name) = leading_name {
            if let Some(op) = self.current_operator() {
                if ASSIGN_OPS.contains(&op) {
                    let op = op.to_string();
                    self.advance();
                    let rhs = self.parse_expression();
                    self.expect(TokenKind::StmtSep, "Expected ;");
                    return Node::Assign {
                        name,
                        op,
                        expr: Box::new(rhs),
                    };
                }
            }
        }

        self.expect(TokenKind::StmtSep, "Expected ;");
        expr
    }

    fn parse_import(&mut self) -> Node {
        self.eat_keyword("import");
        if self.current().kind != TokenKind::Identifier {
            self.raise("Invalid import scheme");
        }
        let module = self.current().data.clone();
        self.advance();

        if self.eat_keyword("from") {
            if self.current().kind != TokenKind::Identifier {
                self.raise("Invalid import scheme");
            }
            let member = self.current().data.clone();
            self.advance();
            self.expect(TokenKind::StmtSep, "Expected ;");
            return Node::ImportFrom { module, member };
        }

        self.expect(TokenKind::StmtSep, "Expected ;");
        Node::Import { module }
    }

    /// `IDENT IDENT ;` or `IDENT IDENT = expr ;` — the leading identifier
    /// is a bare `Primitive` type name.
    fn parse_simple_decl(&mut self) -> Node {
        let ty_name = self.current().data.clone();
        self.advance();
        let ty = Node::Primitive(ty_name);

        let name = self.current().data.clone();
        self.advance();

        if self.current().kind == TokenKind::StmtSep {
            self.advance();
            return Node::DeclNoInit {
                ty: Box::new(ty),
                name,
            };
        }
        if self.current_operator() == Some("=") {
            self.advance();
            let init = self.parse_expression();
            self.expect(TokenKind::StmtSep, "Expected ;");
            return Node::Decl {
                ty: Box::new(ty),
                name,
                init: Box::new(init),
            };
        }
        self.raise("Expected ;")
    }

    /// `IDENT "<" typeList ">" IDENT [ "=" expr ] ";"` — the outer
    /// container identifier (e.g. `list`) is consumed but not retained:
    /// `spec.md` §8's concrete scenario shows the declaration's type is
    /// exactly the parsed `GenType`, with no reference back to it.
    fn parse_generic_decl(&mut self) -> Node {
        self.advance(); // the container identifier
        let ty = self.parse_gentype();

        if self.current().kind != TokenKind::Identifier {
            self.raise("Expected ;");
        }
        let name = self.current().data.clone();
        self.advance();

        if self.current().kind == TokenKind::StmtSep {
            self.advance();
            return Node::DeclNoInit {
                ty: Box::new(ty),
                name,
            };
        }
        if self.current_operator() == Some("=") {
            self.advance();
            let init = self.parse_expression();
            self.expect(TokenKind::StmtSep, "Expected ;");
            return Node::Decl {
                ty: Box::new(ty),
                name,
                init: Box::new(init),
            };
        }
        self.raise("Expected ;")
    }

    fn parse_assign(&mut self) -> Node {
        let name = self.current().data.clone();
        self.advance();
        let op = self.current().data.clone();
        self.advance();
        let expr = self.parse_expression();
        self.expect(TokenKind::StmtSep, "Expected ;");
        Node::Assign {
            name,
            op,
            expr: Box::new(expr),
        }
    }

    fn parse_enum(&mut self) -> Node {
        self.eat_keyword("enum");
        if self.current().kind != TokenKind::Identifier {
            self.raise("Identifier expected after enum");
        }
        let name = self.current().data.clone();
        self.advance();
        let body = self.parse_enum_body();
        Node::Enum {
            name,
            body: Box::new(body),
        }
    }

    fn parse_if(&mut self) -> Node {
        self.eat_keyword("if");
        let cond = self.parse_expression();
        let body = self.parse_nested_body();
        Node::If {
            cond: Box::new(cond),
            body: Box::new(body),
        }
    }

    fn parse_elif(&mut self) -> Node {
        self.eat_keyword("elif");
        let cond = self.parse_expression();
        let body = self.parse_nested_body();
        Node::Elif {
            cond: Box::new(cond),
            body: Box::new(body),
        }
    }

    fn parse_else(&mut self) -> Node {
        self.eat_keyword("else");
        let body = self.parse_nested_body();
        Node::Else {
            body: Box::new(body),
        }
    }

    fn parse_repeat(&mut self) -> Node {
        self.eat_keyword("repeat");
        let count = self.parse_expression();
        let body = self.parse_nested_body();
        Node::Repeat {
            count: Box::new(count),
            body: Box::new(body),
        }
    }

    fn parse_while(&mut self) -> Node {
        self.eat_keyword("while");
        let cond = self.parse_expression();
        let body = self.parse_nested_body();
        Node::While {
            cond: Box::new(cond),
            body: Box::new(body),
        }
    }

    fn parse_for(&mut self) -> Node {
        self.eat_keyword("for");
        if self.current().kind != TokenKind::Identifier {
            self.raise("Non-identifier after for");
        }
        let var = self.current().data.clone();
        self.advance();

        if !self.eat_keyword("in") {
            self.raise("Missing in keyword");
        }

        let iter = self.parse_expression();
        let body = self.parse_nested_body();
        Node::For {
            var: Box::new(Node::Var(var)),
            iter: Box::new(iter),
            body: Box::new(body),
        }
    }
}
