use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by shape construction, entity lookup, prime indexing and
/// configuration loading. None of them are transient.
#[derive(Debug, Error)]
pub enum SynthError {
    /// Control-point x and y sequences differ in length.
    #[error("control point length mismatch: {x_len} x values, {y_len} y values")]
    ControlPointLengthMismatch { x_len: usize, y_len: usize },

    #[error("a shape function needs at least one control point")]
    EmptyControlPoints,

    #[error("unknown well: {0}")]
    UnknownWell(String),

    #[error("unknown block: {0}")]
    UnknownBlock(String),

    /// Prime indices are octave numbers and must be non-negative.
    #[error("prime index must be a non-negative integer: {0}")]
    InvalidPrimeIndex(i64),

    #[error("invalid simulator configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, SynthError>;
