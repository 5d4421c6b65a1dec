//! Error types for salient-region

use thiserror::Error;

/// Errors that can occur during region processing operations
#[derive(Debug, Error)]
pub enum RegionError {
    /// Connectivity value other than 4 or 8
    #[error("invalid connectivity: {0} (must be 4 or 8)")]
    InvalidConnectivity(u32),
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
