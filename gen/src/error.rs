//! Error types for map generation.

use thiserror::Error;

/// Result type alias for generator operations.
pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Errors that can occur while generating the metadata map.
///
/// The taxonomy is deliberately coarse: a failed invocation is fatal to
/// that invocation only, with no retries and no partial-write recovery.
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// The composed glob pattern is invalid.
    #[error("invalid descriptor pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// Directory enumeration failed mid-walk.
    #[error("descriptor discovery failed: {0}")]
    Discovery(#[from] glob::GlobError),

    /// Reading or writing the generated module failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
