use thiserror::Error;

/// Result alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Failures surfaced by link store backends.
///
/// A missing key is not a failure: lookups report absence as `Ok(None)`.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The backing store could not be opened, created, or is locked by
    /// another process. Fatal at startup.
    #[error("store unavailable: {0}")]
    Unavailable(String),
    /// A write transaction failed to commit.
    #[error("store write failed: {0}")]
    Write(String),
    /// A read-side backend failure. Never used for a missing key.
    #[error("store read failed: {0}")]
    Read(String),
}
