//! Navigation port definition.

use crate::domain::route::Route;

/// Port for switching views.
pub trait NavigatorPort: Send + Sync {
    /// Requests a switch to another view.
    fn navigate(&self, route: Route);
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    /// Records every navigation.
    #[derive(Default)]
    pub struct MockNavigator {
        visited: Mutex<Vec<Route>>,
    }

    impl MockNavigator {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn visited(&self) -> Vec<Route> {
            self.visited.lock().unwrap().clone()
        }
    }

    impl NavigatorPort for MockNavigator {
        fn navigate(&self, route: Route) {
            self.visited.lock().unwrap().push(route);
        }
    }
}
