//! Credential storage error types.

use thiserror::Error;

/// Credential storage error variants.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access credential storage: {0}")]
    AccessFailed(String),

    #[error("failed to read credential: {0}")]
    RetrievalFailed(String),

    #[error("failed to store credential: {0}")]
    StorageFailed(String),

    #[error("failed to delete credential: {0}")]
    DeletionFailed(String),

    #[error("credential storage not available: {0}")]
    NotAvailable(String),
}
