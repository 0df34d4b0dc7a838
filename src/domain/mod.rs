//! Domain layer with booking entities, error types and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;
/// Navigable views.
pub mod route;

pub use entities::{Activity, Credential, Reservation, Role, Roles, Session, User};
pub use errors::{ApiError, ApiResult, ClientError, StoreError};
pub use ports::{AuthPort, BookingPort, CredentialStorePort, HttpTransportPort, NavigatorPort};
pub use route::Route;
