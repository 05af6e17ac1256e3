//! Error types for resbind-rswift.

use std::path::PathBuf;

/// Errors produced by generator detection and invocation construction.
#[derive(Debug, thiserror::Error)]
pub enum RswiftError {
    /// rswift binary was not found on the system.
    #[error("rswift not found — install R.swift and add it to PATH, or set RSWIFT_PATH")]
    NotFound,

    /// rswift was found but is not executable.
    #[error("rswift found at {path} but is not executable — check file permissions")]
    NotExecutable { path: PathBuf },

    /// Failed to execute rswift.
    #[error("cannot execute rswift: {source}")]
    Exec { source: std::io::Error },

    /// rswift --version returned an unexpected format.
    #[error("cannot parse rswift version from output: {output}")]
    VersionParse { output: String },

    /// The detected generator version does not match the configured pin.
    #[error("expected rswift {expected} but found {actual}")]
    VersionMismatch { expected: String, actual: String },

    /// Cannot compute fingerprint of the rswift binary.
    #[error("cannot fingerprint rswift binary at {path}: {source}")]
    Fingerprint {
        path: PathBuf,
        source: resbind_util::error::UtilError,
    },

    /// No output path specified for the invocation.
    #[error("no output path specified — set the generated bindings file path")]
    NoOutput,

    /// An error propagated from resbind-util.
    #[error("{0}")]
    Util(#[from] resbind_util::error::UtilError),
}
