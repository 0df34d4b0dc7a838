//! Domain error types.

mod api_error;
mod client_error;
mod store_error;

pub use api_error::{
    ApiError, ApiResult, CONNECTION_ERROR_MESSAGE, FALLBACK_REJECTION_MESSAGE,
    MISSING_CREDENTIAL_MESSAGE,
};
pub use client_error::ClientError;
pub use store_error::StoreError;
