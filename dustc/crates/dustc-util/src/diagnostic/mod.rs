//! Diagnostic module - the front-end's single error-reporting channel.
//!
//! `spec.md` §4.1 specifies exactly one operation: `raise(kind, message,
//! source, column, line)`, which formats a message and terminates the
//! process. There is no accumulation, no warnings, no recovery — the first
//! syntax error is fatal. This module keeps that contract but avoids true
//! global state: the ANSI flag lives on a [`Handler`] that the CLI
//! constructs once and threads through the lexer/parser, so tests can
//! observe diagnostics without touching process-wide mutable state.

mod ansi;

pub use ansi::Ansi;

use crate::span::Position;
use std::fmt;

/// The closed taxonomy of diagnostic kinds.
///
/// `spec.md` §4.1: "a closed enumeration currently containing only
/// `Syntax`". Kept as an enum (rather than a bare string) so a future kind
/// can be added without touching every call site.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Syntax,
}

impl ErrorKind {
    fn label(self) -> &'static str {
        match self {
            ErrorKind::Syntax => "SyntaxError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Process-wide reporting state: just the ANSI toggle (`spec.md` §5).
///
/// # Examples
///
/// ```
/// use dustc_util::diagnostic::Handler;
///
/// let handler = Handler::new();
/// assert!(handler.ansi_enabled());
///
/// let plain = Handler::with_ansi(false);
/// assert!(!plain.ansi_enabled());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Handler {
    ansi: bool,
}

impl Handler {
    /// A handler with ANSI coloring on, the default per `spec.md` §4.1.
    pub fn new() -> Self {
        Self { ansi: true }
    }

    /// A handler with an explicit ANSI setting.
    pub fn with_ansi(ansi: bool) -> Self {
        Self { ansi }
    }

    pub fn ansi_enabled(&self) -> bool {
        self.ansi
    }

    pub fn set_ansi(&mut self, ansi: bool) {
        self.ansi = ansi;
    }

    /// Format (but do not print or exit for) a diagnostic. Exposed so
    /// callers that want to capture the rendered string (tests, `--fp`
    /// dry runs before `raise` terminates the process) can do so without
    /// duplicating the layout logic.
    pub fn render(&self, kind: ErrorKind, message: &str, source: &str, pos: Position) -> String {
        let line = pos.line + 1;
        let column = pos.column;

        if self.ansi {
            format!(
                "\n{source} {y}{column}{end}:{y}{line}{end}\n{r}{kind}{g}:{end} {message}\n{g}...\n#{line} {g}line{end}\n",
                source = source,
                y = Ansi::FG_YELLOW,
                line = line,
                column = column,
                end = Ansi::END,
                r = Ansi::FG_LIGHTRED,
                kind = kind,
                g = Ansi::FG_DARKGRAY,
                message = message,
            )
        } else {
            format!("\n{source} {column}:{line}\n{kind}: {message}\n...\n#{line} line\n")
        }
    }

    fn render_internal(&self, message: &str) -> String {
        if self.ansi {
            format!(
                "{r}InternalError{g}:{end} {message}",
                r = Ansi::FG_LIGHTRED,
                g = Ansi::FG_DARKGRAY,
                end = Ansi::END,
            )
        } else {
            format!("InternalError: {message}")
        }
    }

    /// Print a diagnostic and terminate the process with exit code 1.
    ///
    /// This function never returns — its return type is `!` so call sites
    /// (e.g. inside an expression position in the lexer/parser) can use it
    /// without an explicit early return.
    pub fn raise(&self, kind: ErrorKind, message: &str, source: &str, pos: Position) -> ! {
        print!("{}", self.render(kind, message, source, pos));
        std::process::exit(1)
    }

    /// Report a bug in the front-end itself (`spec.md` §4.1's
    /// `raise_internal`) and terminate.
    pub fn raise_internal(&self, message: &str) -> ! {
        print!("{}", self.render_internal(message));
        std::process::exit(1)
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}
