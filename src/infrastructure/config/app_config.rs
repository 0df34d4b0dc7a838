//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use super::args::CliArgs;

pub(crate) const APP_QUALIFIER: &str = "com";
pub(crate) const APP_ORGANIZATION: &str = "aquarhone";
pub(crate) const APP_NAME: &str = crate::NAME;

/// Default booking API address.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Verbosity of the log file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Directive understood by `EnvFilter`.
    #[must_use]
    pub const fn as_directive(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_directive())
    }
}

/// Where the credential is persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CredentialBackend {
    /// Owner-only file in the data directory.
    #[default]
    File,
    /// System keyring entry.
    Keyring,
}

/// Booking API connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base address every API path is appended to.
    #[serde(default = "default_api_url")]
    pub base_url: String,

    /// Per-request timeout. Requests wait indefinitely when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

impl ApiConfig {
    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_url(),
            request_timeout_secs: None,
        }
    }
}

/// Credential storage settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: CredentialBackend,

    /// Overrides the credential file location of the file backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_path: Option<PathBuf>,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

/// Application configuration from file and CLI.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Booking API settings.
    #[serde(default)]
    pub api: ApiConfig,

    /// Credential storage settings.
    #[serde(default)]
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: &CliArgs) {
        if let Some(config_path) = &args.config {
            self.config = Some(config_path.clone());
        }
        if let Some(log_path) = &args.log_path {
            self.log_path = Some(log_path.clone());
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(api_url) = &args.api_url {
            self.api.base_url.clone_from(api_url);
        }
    }

    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
    }

    /// Returns default config directory.
    #[must_use]
    pub fn default_config_dir() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns default data directory.
    #[must_use]
    pub fn default_data_dir() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        Self::default_data_dir().map(|dir| dir.join("aquarhone.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert!(config.api.request_timeout().is_none());
        assert_eq!(config.storage.backend, CredentialBackend::File);
    }

    #[test]
    fn test_parse_partial_config() {
        let toml_content = r#"
            log_level = "debug"

            [api]
            base_url = "https://booking.example.org"
            request_timeout_secs = 15

            [storage]
            backend = "keyring"
        "#;

        let config: AppConfig = toml::from_str(toml_content).unwrap();

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.api.base_url, "https://booking.example.org");
        assert_eq!(config.api.request_timeout(), Some(Duration::from_secs(15)));
        assert_eq!(config.storage.backend, CredentialBackend::Keyring);
        assert!(config.storage.credential_path.is_none());
    }

    #[test]
    fn test_empty_sections_use_defaults() {
        let config: AppConfig = toml::from_str("[api]\n").unwrap();
        assert_eq!(config.api.base_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_cli_overrides_file_values() {
        let mut config: AppConfig =
            toml::from_str("[api]\nbase_url = \"http://from-file\"").unwrap();
        let args = CliArgs::parse_from([
            "aquarhone",
            "--api-url",
            "http://from-cli",
            "--log-level",
            "warn",
            "whoami",
        ]);

        config.merge_with_args(&args);

        assert_eq!(config.api.base_url, "http://from-cli");
        assert_eq!(config.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_absent_cli_values_keep_file_values() {
        let mut config: AppConfig =
            toml::from_str("log_level = \"error\"\n[api]\nbase_url = \"http://from-file\"")
                .unwrap();
        let args = CliArgs::parse_from(["aquarhone", "whoami"]);

        config.merge_with_args(&args);

        assert_eq!(config.api.base_url, "http://from-file");
        assert_eq!(config.log_level, LogLevel::Error);
    }
}
