//! File-based credential storage.

use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::entities::Credential;
use crate::domain::errors::StoreError;
use crate::domain::ports::CredentialStorePort;

/// Name of the credential file inside the data directory.
pub const CREDENTIAL_FILE_NAME: &str = "credential";

/// Keeps the credential in a single owner-only file.
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the default file name inside `dir`.
    #[must_use]
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(CREDENTIAL_FILE_NAME))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Replaces the file contents atomically. Temp files are created 0600 on unix.
fn write_atomic(path: &Path, content: &str) -> std::io::Result<()> {
    let parent = path
        .parent()
        .ok_or_else(|| std::io::Error::other("credential path has no parent directory"))?;
    std::fs::create_dir_all(parent)?;

    let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
    temp_file.write_all(content.as_bytes())?;
    temp_file.persist(path).map_err(|e| e.error)?;

    Ok(())
}

#[async_trait]
impl CredentialStorePort for FileCredentialStore {
    async fn get(&self) -> Result<Option<Credential>, StoreError> {
        debug!(path = %self.path.display(), "Reading stored credential");

        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => Ok(Credential::new(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No credential stored");
                Ok(None)
            }
            Err(e) => {
                warn!(error = %e, "Failed to read credential file");
                Err(StoreError::RetrievalFailed(e.to_string()))
            }
        }
    }

    async fn set(&self, credential: &Credential) -> Result<(), StoreError> {
        debug!(path = %self.path.display(), "Storing credential");

        let path = self.path.clone();
        let content = credential.as_str().to_string();

        tokio::task::spawn_blocking(move || write_atomic(&path, &content))
            .await
            .map_err(|e| StoreError::StorageFailed(e.to_string()))?
            .map_err(|e| {
                warn!(error = %e, "Failed to write credential file");
                StoreError::StorageFailed(e.to_string())
            })
    }

    async fn clear(&self) -> Result<(), StoreError> {
        debug!(path = %self.path.display(), "Clearing stored credential");

        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No credential to clear");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Failed to delete credential file");
                Err(StoreError::DeletionFailed(e.to_string()))
            }
        }
    }
}
