//! Error types for the proto-naming crate.

use std::path::PathBuf;

/// Errors that can occur while running a plugin.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request payload is not a valid `CodeGeneratorRequest`.
    #[error("failed to decode CodeGeneratorRequest: {0}")]
    Decode(#[from] prost::DecodeError),

    /// The response could not be serialized.
    #[error("failed to encode CodeGeneratorResponse: {0}")]
    Encode(#[from] prost::EncodeError),

    /// A file listed in `file_to_generate` has no descriptor in the request.
    #[error("file '{name}' is listed for generation but missing from proto_file")]
    FileNotFound { name: String },

    /// Failed to read the request from disk.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write the response to disk.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to read stdin or write stdout.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
