//! Booking API access.

mod client;
mod dto;
mod gateway;

pub use client::BookingClient;
pub use gateway::{ApiRequest, RequestGateway};

#[cfg(test)]
pub(crate) use client::test_support;
