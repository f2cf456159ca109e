//! Error types for the session store.

use nutriflow_types::ValidationError;
use thiserror::Error;

/// Errors surfaced by store operations.
///
/// Every error leaves the store exactly as it was before the call.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Input rejected at the boundary.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Snapshot written by an incompatible format.
    #[error("unsupported snapshot format version: expected {expected}, found {found}")]
    UnsupportedSnapshotVersion { expected: u32, found: u32 },

    /// Snapshot could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;
