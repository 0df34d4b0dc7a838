//! Authentication port definition.

use async_trait::async_trait;

use crate::domain::entities::{AuthGrant, User};
use crate::domain::errors::ApiResult;

/// Port for account authentication against the booking API.
#[async_trait]
pub trait AuthPort: Send + Sync {
    /// Exchanges email and password for a credential.
    async fn login(&self, email: &str, password: &str) -> ApiResult<AuthGrant>;

    /// Creates an account and returns its credential.
    async fn register(&self, email: &str, password: &str) -> ApiResult<AuthGrant>;

    /// Resolves the identity behind the stored credential.
    async fn current_user(&self) -> ApiResult<User>;
}
