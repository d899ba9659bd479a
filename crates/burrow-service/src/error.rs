use burrow_core::StoreError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum RegisterError {
    #[error("link key must not be empty")]
    EmptyKey,
    #[error("link destination must not be empty")]
    EmptyDestination,
    #[error(transparent)]
    Store(#[from] StoreError),
}
