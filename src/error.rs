//! Error types for the conversion pipeline

use thiserror::Error;

/// Result type alias for conversion operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while converting an asset
///
/// All three kinds are terminal for the run: the pipeline reports the kind
/// and a human-readable cause and stops. No artifact is written on failure.
#[derive(Error, Debug)]
pub enum Error {
    /// The input path does not exist (checked before any decode attempt)
    #[error("Input file '{0}' not found")]
    SourceNotFound(String),

    /// The rasterizer could not parse or render the source
    #[error("Failed to decode image: {0}")]
    DecodeError(String),

    /// The destination could not be created or written
    #[error("Failed to write output: {0}")]
    WriteError(String),
}
