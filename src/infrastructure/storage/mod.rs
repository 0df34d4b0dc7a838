//! Credential storage adapters.

mod file_credential_store;
#[cfg(feature = "keyring")]
mod keyring_credential_store;
#[cfg(not(feature = "keyring"))]
mod keyring_credential_store_stub;

pub use file_credential_store::FileCredentialStore;
#[cfg(feature = "keyring")]
pub use keyring_credential_store::KeyringCredentialStore;
#[cfg(not(feature = "keyring"))]
pub use keyring_credential_store_stub::KeyringCredentialStore;
