//! Router-backed navigation for the sidebar flows

use dioxus::prelude::*;
use dioxus::router::Navigator;

use crate::app::routes::Route;
use crate::shared::logging;
use crate::shared::services::contracts::Navigation;

/// Token that server-derived route data (session, plan) is keyed on.
///
/// Bumping it makes the layout re-resolve the session.
#[derive(Clone, Copy, PartialEq)]
pub struct RouteData {
    token: Signal<u64>,
}

impl RouteData {
    pub fn new(token: Signal<u64>) -> Self {
        Self { token }
    }

    /// Current token; reading it subscribes the caller
    pub fn token(&self) -> u64 {
        (self.token)()
    }

    pub fn refresh(&mut self) {
        let next = *self.token.peek() + 1;
        self.token.set(next);
    }
}

pub fn use_route_data() -> RouteData {
    use_context::<RouteData>()
}

/// Navigation handle shared with the sidebar's children through context
#[derive(Clone, Copy)]
pub struct DioxusNavigation {
    navigator: Navigator,
    current: Signal<Route>,
    route_data: RouteData,
}

impl DioxusNavigation {
    /// `current` must be kept in sync with the active route by the owner
    pub fn new(navigator: Navigator, current: Signal<Route>, route_data: RouteData) -> Self {
        Self {
            navigator,
            current,
            route_data,
        }
    }
}

impl Navigation for DioxusNavigation {
    fn current_route(&self) -> Route {
        self.current.peek().clone()
    }

    fn push(&mut self, route: Route) {
        logging::log_navigation(&route.to_string());
        if self.navigator.push(route).is_some() {
            tracing::warn!("Navigation was rejected by the router");
        }
    }

    fn refresh(&mut self) {
        self.route_data.refresh();
    }
}
