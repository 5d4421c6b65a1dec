//! Error types for salient-morph

use thiserror::Error;

/// Errors that can occur during structuring element construction
#[derive(Debug, Error)]
pub enum MorphError {
    /// A computed kernel side is non-positive
    #[error("invalid structuring element size: {width}x{height}")]
    InvalidSize { width: i64, height: i64 },
}

/// Result type for morphology operations
pub type MorphResult<T> = Result<T, MorphError>;
