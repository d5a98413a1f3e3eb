//! Internal error types for dustc-util.
//!
//! These are never shown to a user of the `dust` CLI directly — they are
//! caught at the `dustc-drv` boundary and re-reported through
//! [`crate::diagnostic::raise_internal`], which is the only
//! internal-failure channel `spec.md` exposes.

use thiserror::Error;

/// Failures reading or transcoding source text (`spec.md` §4.2's
/// "Transcoding / I/O" group).
#[derive(Debug, Error)]
pub enum UstringError {
    #[error("failed to read source file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("source file {path} is not valid UTF-8")]
    InvalidUtf8 { path: String },
}

/// Result alias for ustring I/O operations.
pub type UstringResult<T> = std::result::Result<T, UstringError>;
