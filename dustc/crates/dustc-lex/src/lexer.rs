//! The Dust lexer (`spec.md` §4.3).
//!
//! Consumes a code-point sequence and yields a positioned [`Token`]
//! sequence terminated by [`TokenKind::EndOfInput`]. There is no token
//! pull/iterator protocol — like the original front-end's `tokenize()`,
//! [`lex`] runs the scanner to completion and returns the whole array,
//! since the parser needs random access (slicing) over the token stream
//! anyway.

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind, WORD_OPERATORS};
use dustc_util::diagnostic::ErrorKind;
use dustc_util::{ustring, Handler, Position};

const TWO_CHAR_OPERATORS: &[(&str, &str)] = &[
    ("=", "="),
    ("+", "="),
    ("-", "="),
    ("*", "="),
    ("/", "="),
    ("^", "="),
    ("%", "="),
    ("<", "="),
    (">", "="),
    ("!", "="),
];

struct Lexer<'a> {
    cursor: Cursor<'a>,
    source_name: &'a str,
    handler: &'a Handler,
    tokens: Vec<Token>,
    pending: String,
    pending_start: Position,
}

impl<'a> Lexer<'a> {
    fn new(chars: &'a [char], source_name: &'a str, handler: &'a Handler) -> Self {
        Self {
            cursor: Cursor::new(chars),
            source_name,
            handler,
            tokens: Vec::new(),
            pending: String::new(),
            pending_start: Position::START,
        }
    }

    fn raise(&self, message: impl Into<String>, pos: Position) -> ! {
        self.handler
            .raise(ErrorKind::Syntax, &message.into(), self.source_name, pos)
    }

    fn emit(&mut self, kind: TokenKind, data: impl Into<String>, pos: Position) {
        self.tokens.push(Token::new(kind, data, pos));
    }

    fn append_pending(&mut self, c: char) {
        if self.pending.is_empty() {
            self.pending_start = self.cursor.position();
        }
        self.pending.push(c);
    }

    /// The finalize routine: commit an accumulated identifier-or-number-
    /// or-keyword lexeme, if any.
    fn flush_pending(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let raw = std::mem::take(&mut self.pending);
        let chars: Vec<char> = raw.chars().collect();
        let trimmed = ustring::trim(&chars);
        if trimmed.is_empty() {
            return;
        }
        let text: String = trimmed.iter().collect();
        let pos = self.pending_start;

        if ustring::is_numeric_literal(trimmed) {
            self.emit(TokenKind::Numeric, text, pos);
        } else if WORD_OPERATORS.contains(&text.as_str()) {
            self.emit(TokenKind::Operator, text, pos);
        } else {
            self.emit(TokenKind::Identifier, text, pos);
        }
    }

    fn lex_string(&mut self) {
        let delimiter = self.cursor.current();
        let start = self.cursor.position();
        self.cursor.advance();

        let mut content = String::new();
        loop {
            if self.cursor.is_at_end() {
                self.raise("String not closed", start);
            }
            let c = self.cursor.current();
            if c == delimiter {
                self.cursor.advance();
                break;
            }
            content.push(c);
            self.cursor.advance();
        }

        self.emit(TokenKind::String, content, start);
    }

    fn lex_line_comment(&mut self) {
        while !self.cursor.is_at_end() && self.cursor.current() != '\n' {
            self.cursor.advance();
        }
    }

    fn lex_block_comment(&mut self) {
        let start = self.cursor.position();
        self.cursor.advance(); // '/'
        self.cursor.advance(); // '*'
        loop {
            if self.cursor.is_at_end() {
                self.raise("Block comment not closed", start);
            }
            if self.cursor.current() == '*' && self.cursor.peek(1) == '/' {
                self.cursor.advance();
                self.cursor.advance();
                break;
            }
            self.cursor.advance();
        }
    }

    fn lex_operator(&mut self) {
        self.flush_pending();
        let pos = self.cursor.position();
        let first = self.cursor.advance();

        for (a, b) in TWO_CHAR_OPERATORS {
            if a.chars().next() == Some(first) && self.cursor.current() == b.chars().next().unwrap() {
                self.cursor.advance();
                let mut data = String::new();
                data.push(first);
                data.push_str(b);
                self.emit(TokenKind::Operator, data, pos);
                return;
            }
        }

        self.emit(TokenKind::Operator, first.to_string(), pos);
    }

    fn lex_bracket(&mut self, kind: TokenKind) {
        self.flush_pending();
        let pos = self.cursor.position();
        let c = self.cursor.advance();
        self.emit(kind, c.to_string(), pos);
    }

    fn lex_comma(&mut self) {
        self.flush_pending();
        let pos = self.cursor.position();
        let c = self.cursor.advance();
        self.emit(TokenKind::Comma, c.to_string(), pos);
    }

    fn lex_period(&mut self) {
        self.flush_pending();
        let pos = self.cursor.position();
        self.cursor.advance();
        if self.cursor.current() == '.' {
            self.cursor.advance();
            self.emit(TokenKind::Operator, "..", pos);
        } else {
            self.emit(TokenKind::Period, ".", pos);
        }
    }

    fn lex_stmt_sep(&mut self) {
        self.flush_pending();
        let pos = self.cursor.position();
        self.cursor.advance();
        self.emit(TokenKind::StmtSep, "", pos);
    }

    fn run(&mut self) {
        while !self.cursor.is_at_end() {
            let c = self.cursor.current();

            match c {
                '"' | '\'' => self.lex_string(),
                '\n' => {
                    self.cursor.advance();
                }
                ' ' | '\t' | '\r' => {
                    self.flush_pending();
                    self.cursor.advance();
                }
                '/' if self.cursor.peek(1) == '/' => self.lex_line_comment(),
                '/' if self.cursor.peek(1) == '*' => self.lex_block_comment(),
                '+' | '-' | '*' | '/' | '^' | '=' | '>' | '<' | '!' | '%' => self.lex_operator(),
                '(' => self.lex_bracket(TokenKind::LParen),
                ')' => self.lex_bracket(TokenKind::RParen),
                '{' => self.lex_bracket(TokenKind::LCurly),
                '}' => self.lex_bracket(TokenKind::RCurly),
                '[' => self.lex_bracket(TokenKind::LSquare),
                ']' => self.lex_bracket(TokenKind::RSquare),
                ',' => self.lex_comma(),
                '.' => self.lex_period(),
                ';' => self.lex_stmt_sep(),
                _ => {
                    self.append_pending(c);
                    self.cursor.advance();
                }
            }
        }

        self.flush_pending();
        self.apply_terminal_fixups();
    }

    /// `spec.md` §4.3 "Terminal fix-ups", applied after the main loop.
    fn apply_terminal_fixups(&mut self) {
        let end_pos = self.cursor.position();

        match self.tokens.last().map(|t| t.kind) {
            Some(TokenKind::StmtSep) => {
                let last = self.tokens.last_mut().unwrap();
                last.kind = TokenKind::EndOfInput;
            }
            Some(TokenKind::RCurly) => {
                self.emit(TokenKind::EndOfInput, "", end_pos);
            }
            Some(_) => {
                let pos = self.tokens.last().unwrap().pos;
                self.raise("Expected ;", pos);
            }
            None => {
                // Empty source: `spec.md` §8 boundary behavior says this
                // yields an empty Body, handled by the parser on an empty
                // token stream. We still terminate with EndOfInput so the
                // invariant "final token is EndOfInput" holds uniformly.
                self.emit(TokenKind::EndOfInput, "", end_pos);
            }
        }
    }
}

/// Lex `source` (already decoded to code points) and return its token
/// stream. `source_name` is used only for diagnostics.
pub fn lex(source: &[char], source_name: &str, handler: &Handler) -> Vec<Token> {
    let mut lexer = Lexer::new(source, source_name, handler);
    lexer.run();
    lexer.tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use dustc_util::Handler;

    fn lex_str(s: &str) -> Vec<Token> {
        let handler = Handler::new();
        let chars: Vec<char> = s.chars().collect();
        lex(&chars, "<test>", &handler)
    }

    #[test]
    fn trailing_semicolon_becomes_eof() {
        let tokens = lex_str("x = 1;");
        assert_eq!(tokens.last().unwrap().kind, TokenKind::EndOfInput);
        assert_eq!(tokens[tokens.len() - 2].kind, TokenKind::Numeric);
    }

    #[test]
    fn trailing_rcurly_gets_appended_eof() {
        let tokens = lex_str("if a { x = 1; }");
        assert_eq!(tokens.last().unwrap().kind, TokenKind::EndOfInput);
        assert_eq!(tokens[tokens.len() - 2].kind, TokenKind::RCurly);
    }

    #[test]
    fn word_operators_lex_as_operator_not_identifier() {
        for kw in ["and", "or", "xor", "not", "in"] {
            let tokens = lex_str(&format!("{kw};"));
            assert_eq!(tokens[0].kind, TokenKind::Operator, "{kw}");
            assert_eq!(tokens[0].data, kw);
        }
    }

    #[test]
    fn two_char_operators_disambiguate() {
        let tokens = lex_str("a == b;");
        assert_eq!(tokens[1].kind, TokenKind::Operator);
        assert_eq!(tokens[1].data, "==");
    }

    #[test]
    fn single_char_operator_when_no_match() {
        let tokens = lex_str("a = b;");
        assert_eq!(tokens[1].kind, TokenKind::Operator);
        assert_eq!(tokens[1].data, "=");
    }

    #[test]
    fn string_literal_strips_quotes_and_keeps_unicode() {
        let tokens = lex_str("s = \"héllo 🔥\";");
        let string_tok = tokens.iter().find(|t| t.kind == TokenKind::String).unwrap();
        assert_eq!(string_tok.data, "héllo 🔥");
    }

    #[test]
    fn hex_and_binary_numerics() {
        let tokens = lex_str("0x2A;");
        assert_eq!(tokens[0].kind, TokenKind::Numeric);
        assert_eq!(tokens[0].data, "0x2A");

        let tokens = lex_str("0b1010;");
        assert_eq!(tokens[0].kind, TokenKind::Numeric);
        assert_eq!(tokens[0].data, "0b1010");
    }

    #[test]
    fn line_and_block_comments_are_dropped() {
        let tokens = lex_str("x = 1; // trailing\n/* block */ y = 2;");
        assert!(tokens.iter().all(|t| !t.data.contains("trailing")));
        assert!(tokens.iter().all(|t| !t.data.contains("block")));
    }

    #[test]
    fn column_and_line_track_newlines() {
        let tokens = lex_str("a;\nb;");
        let b_tok = tokens.iter().find(|t| t.data == "b").unwrap();
        assert_eq!(b_tok.pos.line, 1);
        assert_eq!(b_tok.pos.column, 0);
    }

    #[test]
    fn unary_minus_before_numeric_lexes_as_two_tokens() {
        let tokens = lex_str("-5;");
        assert_eq!(tokens[0].kind, TokenKind::Operator);
        assert_eq!(tokens[0].data, "-");
        assert_eq!(tokens[1].kind, TokenKind::Numeric);
        assert_eq!(tokens[1].data, "5");
    }
}
