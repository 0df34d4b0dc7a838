//! Keyring-based credential storage.

use async_trait::async_trait;
use keyring::Entry;
use tracing::{debug, warn};

use crate::domain::entities::Credential;
use crate::domain::errors::StoreError;
use crate::domain::ports::CredentialStorePort;

const KEYRING_SERVICE: &str = crate::NAME;
const KEYRING_USER: &str = "credential";

/// System keyring credential storage adapter.
pub struct KeyringCredentialStore {
    service: String,
    user: String,
}

impl KeyringCredentialStore {
    /// Creates new storage with default names.
    #[must_use]
    pub fn new() -> Self {
        Self::with_names(KEYRING_SERVICE, KEYRING_USER)
    }

    /// Creates storage with custom names.
    #[must_use]
    pub fn with_names(service: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            user: user.into(),
        }
    }

    fn entry(&self) -> Result<Entry, StoreError> {
        Entry::new(&self.service, &self.user)
            .map_err(|e| StoreError::AccessFailed(format!("failed to access keyring: {e}")))
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
        debug!(service = %self.service, "Retrieving credential from keyring");

        match self.entry()?.get_password() {
            Ok(password) => Ok(Credential::new(password)),
            Err(keyring::Error::NoEntry) => {
                debug!("No credential stored in keyring");
                Ok(None)
            }
            Err(e) => {
                warn!(error = %e, "Failed to retrieve credential from keyring");
                Err(StoreError::RetrievalFailed(e.to_string()))
            }
        }
    }

    async fn set(&self, credential: &Credential) -> Result<(), StoreError> {
        debug!(service = %self.service, "Storing credential in keyring");

        self.entry()?
            .set_password(credential.as_str())
            .map_err(|e| {
                warn!(error = %e, "Failed to store credential in keyring");
                StoreError::StorageFailed(e.to_string())
            })
    }

    async fn clear(&self) -> Result<(), StoreError> {
        debug!(service = %self.service, "Deleting credential from keyring");

        match self.entry()?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => {
                warn!(error = %e, "Failed to delete credential from keyring");
                Err(StoreError::DeletionFailed(e.to_string()))
            }
        }
    }
}
