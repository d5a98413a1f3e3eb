//! Token definitions (`spec.md` §3.3).

use dustc_util::Position;

/// The closed set of token kinds the lexer emits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Identifier,
    String,
    Operator,
    Numeric,
    Comma,
    Period,
    LParen,
    RParen,
    LCurly,
    RCurly,
    LSquare,
    RSquare,
    /// `;`
    StmtSep,
    EndOfInput,
}

/// A positioned lexical unit.
///
/// `data` is the exact code-point sequence that produced the token: the
/// decoded content for strings (quotes excluded), the literal as scanned
/// for numerics, the punctuation character(s) for delimiters, and empty
/// for `EndOfInput`/`StmtSep` (`spec.md` §3.3).
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub data: String,
    pub pos: Position,
}

impl Token {
    pub fn new(kind: TokenKind, data: impl Into<String>, pos: Position) -> Self {
        Self {
            kind,
            data: data.into(),
            pos,
        }
    }

    /// An `EndOfInput` token at the given position.
    pub fn eof(pos: Position) -> Self {
        Self::new(TokenKind::EndOfInput, "", pos)
    }
}

/// The word operators the finalize routine recognizes (`spec.md` §4.3):
/// lexed as `Operator`, never `Identifier`, so the expression grammar can
/// treat them uniformly with symbolic operators.
pub const WORD_OPERATORS: &[&str] = &["and", "or", "xor", "not", "in"];
