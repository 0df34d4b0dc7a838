//! Terminal navigation.

use parking_lot::Mutex;
use tracing::debug;

use crate::domain::ports::NavigatorPort;
use crate::domain::route::Route;

/// Remembers the last requested view so the command output can point to it.
#[derive(Debug, Default)]
pub struct TerminalNavigator {
    pending: Mutex<Option<Route>>,
}

impl TerminalNavigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes the pending navigation, if any.
    pub fn take(&self) -> Option<Route> {
        self.pending.lock().take()
    }
}

impl NavigatorPort for TerminalNavigator {
    fn navigate(&self, route: Route) {
        debug!(%route, "Navigating");
        *self.pending.lock() = Some(route);
    }
}
