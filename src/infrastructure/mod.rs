//! Infrastructure layer with external service adapters.

/// Booking API client and request gateway.
pub mod api;
/// Application configuration.
pub mod config;
/// HTTP transport.
pub mod http;
/// Credential storage adapters.
pub mod storage;

pub use api::{ApiRequest, BookingClient, RequestGateway};
pub use config::{AppConfig, CliArgs, Command, CredentialBackend, LogLevel, StorageManager};
pub use http::ReqwestTransport;
pub use storage::{FileCredentialStore, KeyringCredentialStore};
