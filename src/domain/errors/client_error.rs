//! Use-case level error types.

use thiserror::Error;

use super::{ApiError, StoreError};

/// Errors surfaced to the user by client operations.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ClientError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("{reason}")]
    InvalidInput { reason: String },

    #[error("no spots remaining for this activity")]
    FullyBooked,

    #[error("reservation cannot be cancelled")]
    NotCancellable,

    #[error("access denied")]
    Forbidden,

    #[error("not signed in")]
    Unauthenticated,
}

impl ClientError {
    /// Creates invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Returns whether the failure was decided locally, without the API.
    #[must_use]
    pub const fn is_local(&self) -> bool {
        match self {
            Self::Api(ApiError::MissingCredential)
            | Self::InvalidInput { .. }
            | Self::FullyBooked
            | Self::NotCancellable
            | Self::Forbidden
            | Self::Unauthenticated => true,
            Self::Api(_) | Self::Store(_) => false,
        }
    }
}
