//! Error types for resbind-engine.

/// Errors produced by build-command synthesis.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// A filesystem operation failed (output directory creation).
    #[error("{0}")]
    Util(#[from] resbind_util::error::UtilError),

    /// Generator detection or invocation construction failed.
    #[error("{0}")]
    Generator(#[from] resbind_rswift::error::RswiftError),

    /// A target descriptor file cannot be read.
    #[error("cannot read target descriptor {path}: {source}")]
    DescriptorRead {
        path: String,
        source: std::io::Error,
    },

    /// A target descriptor file contains invalid JSON.
    #[error("invalid target descriptor at {path}: {source}")]
    DescriptorParse {
        path: String,
        source: serde_json::Error,
    },
}
