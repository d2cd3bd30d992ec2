//! NavigationState - Selected Sidebar Entry

use tracing::{debug, warn};

use crate::app::navigation::Route;

/// The single selected menu entry; it also decides which page is shown
#[derive(Debug, Clone, Default)]
pub struct NavigationState {
    route: Route,
}

impl NavigationState {
    pub fn route(&self) -> Route {
        self.route
    }

    pub fn selected_key(&self) -> &'static str {
        self.route.key()
    }

    pub fn navigate(&mut self, route: Route) {
        debug!(route = route.path(), "navigate");
        self.route = route;
    }

    /// Select a sidebar key; keys outside the menu table leave the route unchanged
    pub fn select_key(&mut self, key: &str) -> Option<Route> {
        let Some(route) = Route::from_key(key) else {
            warn!(key, "unknown menu key ignored");
            return None;
        };
        self.navigate(route);
        Some(route)
    }

    /// Follow an in-app path such as `/tenant-plans`
    pub fn navigate_path(&mut self, path: &str) -> Option<Route> {
        let Some(route) = Route::from_path(path) else {
            warn!(path, "unknown path ignored");
            return None;
        };
        self.navigate(route);
        Some(route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_dashboard() {
        let state = NavigationState::default();
        assert_eq!(state.route(), Route::Dashboard);
        assert_eq!(state.selected_key(), "dashboard");
    }

    #[test]
    fn test_select_key_routes() {
        let mut state = NavigationState::default();
        assert_eq!(state.select_key("plans"), Some(Route::Plans));
        assert_eq!(state.route().path(), "/plans");

        assert_eq!(state.select_key("billing"), None);
        assert_eq!(state.route(), Route::Plans);

        assert_eq!(state.navigate_path("/tenant-plans"), Some(Route::TenantPlans));
        assert_eq!(state.selected_key(), "tenant-plans");
    }
}
