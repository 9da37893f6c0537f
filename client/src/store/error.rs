//! Storage error taxonomy.

/// Failure of a Local Store operation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The database could not be opened (storage disabled, quota, blocked).
    #[error("favorites storage unavailable: {0}")]
    StorageUnavailable(String),
    /// A read transaction failed.
    #[error("favorites read failed: {0}")]
    Read(String),
    /// A write transaction failed.
    #[error("favorites write failed: {0}")]
    Write(String),
}
