use super::app_config::{APP_NAME, APP_ORGANIZATION, APP_QUALIFIER, AppConfig};
use directories::ProjectDirs;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no home directory to place configuration in")]
    ConfigDirNotFound,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode configuration: {0}")]
    Encode(#[from] toml::ser::Error),
}

/// Locates and loads on-disk configuration.
pub struct StorageManager {
    config_dir: PathBuf,
    data_dir: PathBuf,
}

impl StorageManager {
    /// Resolves the platform configuration and data directories.
    ///
    /// # Errors
    ///
    /// Returns `ConfigDirNotFound` when the platform exposes no home directory.
    pub fn new() -> Result<Self, ConfigError> {
        let dirs = ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .ok_or(ConfigError::ConfigDirNotFound)?;

        Ok(Self {
            config_dir: dirs.config_dir().to_path_buf(),
            data_dir: dirs.data_dir().to_path_buf(),
        })
    }

    /// Roots both directories under `root`.
    #[must_use]
    pub fn with_dir(root: PathBuf) -> Self {
        Self {
            data_dir: root.join("data"),
            config_dir: root,
        }
    }

    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Directory holding the credential file.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    #[must_use]
    pub fn default_config_path(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE_NAME)
    }

    /// Reads `config.toml`, or `path_override` when given.
    ///
    /// A missing file is written out with defaults. A malformed one is kept as
    /// is and defaults are returned.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` on filesystem failures.
    pub fn load_config(&self, path_override: Option<&Path>) -> Result<AppConfig, ConfigError> {
        let path = path_override.map_or_else(|| self.default_config_path(), Path::to_path_buf);

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(path = %path.display(), "Writing default configuration");
                let config = AppConfig::default();
                write_toml(&path, &config)?;
                return Ok(config);
            }
            Err(e) => return Err(e.into()),
        };

        Ok(toml::from_str(&content).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "Ignoring malformed configuration");
            AppConfig::default()
        }))
    }
}

/// Writes through a sibling temp file so readers never see a partial file.
fn write_toml<T: serde::Serialize>(path: &Path, value: &T) -> Result<(), ConfigError> {
    let parent = path
        .parent()
        .ok_or_else(|| std::io::Error::other("configuration path has no parent"))?;
    fs::create_dir_all(parent)?;

    let mut staged = tempfile::NamedTempFile::new_in(parent)?;
    staged.write_all(toml::to_string_pretty(value)?.as_bytes())?;
    staged.persist(path).map_err(|e| e.error)?;

    debug!(path = %path.display(), "Configuration written");
    Ok(())
}
