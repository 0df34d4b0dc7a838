mod auth_port;
mod booking_port;
mod credential_store_port;
mod http_transport_port;
mod navigator_port;

pub use auth_port::AuthPort;
pub use booking_port::BookingPort;
pub use credential_store_port::CredentialStorePort;
pub use http_transport_port::{HttpMethod, HttpRequest, HttpResponse, HttpTransportPort, TransportError};
pub use navigator_port::NavigatorPort;

#[cfg(test)]
pub mod mocks {
    pub use super::auth_port::mock::MockAuthPort;
    pub use super::credential_store_port::mock::MockCredentialStore;
    pub use super::http_transport_port::mock::MockTransport;
    pub use super::navigator_port::mock::MockNavigator;
}
