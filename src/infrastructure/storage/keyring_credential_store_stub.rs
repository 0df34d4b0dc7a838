//! Stub keyring storage for builds without keyring support.

use async_trait::async_trait;
use tracing::debug;

use crate::domain::entities::Credential;
use crate::domain::errors::StoreError;
use crate::domain::ports::CredentialStorePort;

const UNAVAILABLE: &str = "built without the keyring feature";

/// Keyring backend placeholder. Every operation reports the backend as unavailable.
pub struct KeyringCredentialStore;

impl KeyringCredentialStore {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for KeyringCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialStorePort for KeyringCredentialStore {
    async fn get(&self) -> Result<Option<Credential>, StoreError> {
        debug!("Keyring feature disabled - no credential storage available");
        Err(StoreError::NotAvailable(UNAVAILABLE.to_string()))
    }

    async fn set(&self, _credential: &Credential) -> Result<(), StoreError> {
        Err(StoreError::NotAvailable(UNAVAILABLE.to_string()))
    }

    async fn clear(&self) -> Result<(), StoreError> {
        Err(StoreError::NotAvailable(UNAVAILABLE.to_string()))
    }
}
