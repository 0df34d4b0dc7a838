//! Credential storage port definition.

use async_trait::async_trait;

use crate::domain::entities::Credential;
use crate::domain::errors::StoreError;

/// Port for the single persisted credential entry.
///
/// Login is the only writer. Logout and the session guard are the only
/// callers of `clear`.
#[async_trait]
pub trait CredentialStorePort: Send + Sync {
    /// Retrieves the stored credential.
    async fn get(&self) -> Result<Option<Credential>, StoreError>;

    /// Replaces the stored credential.
    async fn set(&self, credential: &Credential) -> Result<(), StoreError>;

    /// Erases the stored credential. Succeeds when nothing is stored.
    async fn clear(&self) -> Result<(), StoreError>;

    /// Checks if a credential exists.
    async fn has_credential(&self) -> Result<bool, StoreError> {
        Ok(self.get().await?.is_some())
    }
}
