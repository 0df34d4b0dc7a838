//! Application configuration.

pub mod app_config;
pub mod args;
pub mod storage;

pub use app_config::{ApiConfig, AppConfig, CredentialBackend, LogLevel, StorageConfig};
pub use args::{ActivityArgs, AdminCommand, CliArgs, Command, CredentialsArgs};
pub use storage::{ConfigError, StorageManager};
