//! Presentation layer: command dispatch and plain-text views.

/// Command dispatcher.
pub mod app;
/// Terminal navigation.
pub mod navigator;
/// Plain-text renderers.
pub mod views;

pub use app::App;
pub use navigator::TerminalNavigator;
