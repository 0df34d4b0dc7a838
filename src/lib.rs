//! Aquarhone - A terminal client for a water-activity booking service.
//!
//! This crate browses kayak, paddle, canoe and cruise outings, books and
//! cancels slots, and administers the catalog and accounts. Every API call
//! goes through one request gateway, and every protected command sits behind
//! a session guard that resolves the stored credential first.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing use cases and DTOs.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;
/// Presentation layer containing command dispatch and views.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "aquarhone";
