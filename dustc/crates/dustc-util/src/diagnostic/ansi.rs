//! ANSI escape codes used by the diagnostic reporter.
//!
//! Mirrors the original front-end's `dust/ansi.h` table; only the handful
//! of codes the reporter actually uses are kept (label, kind name, and line
//! marker — `spec.md` §7: "payloads are plain so they remain
//! copy-pasteable").

pub struct Ansi;

impl Ansi {
    pub const END: &'static str = "\x1b[0m";
    pub const FG_YELLOW: &'static str = "\x1b[0;93m";
    pub const FG_LIGHTRED: &'static str = "\x1b[0;91m";
    pub const FG_DARKGRAY: &'static str = "\x1b[0;90m";
}
