//! Error handling for the `dustc` CLI.
//!
//! This is ambient plumbing layered on top of the front-end's single
//! user-facing `Syntax` diagnostic (`dustc_util::diagnostic`): config
//! loading, file I/O, and other CLI-boundary failures get their own
//! `thiserror` taxonomy so `main` can report them without inventing a
//! second diagnostic kind the lexer/parser would need to know about.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DustcError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("file operation failed: {0}")]
    FileOperation(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, DustcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = DustcError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "configuration error: missing field");
    }

    #[test]
    fn io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "not found");
        let err: DustcError = io_err.into();
        assert!(matches!(err, DustcError::Io(_)));
    }
}
