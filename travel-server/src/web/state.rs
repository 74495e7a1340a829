//! Application state for the web layer.

use std::sync::Arc;
use std::time::Duration;

use crate::registry::TravelerRegistry;
use crate::routing::RouteProvider;

use super::sessions::SessionStore;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Traveler catalog
    pub registry: Arc<TravelerRegistry>,

    /// Routing service, usually cached
    pub routing: Arc<dyn RouteProvider>,

    /// Live route sessions
    pub sessions: SessionStore,
}

impl AppState {
    /// Create a new app state.
    ///
    /// Sessions are dropped after `session_idle` without a request.
    pub fn new(
        registry: TravelerRegistry,
        routing: Arc<dyn RouteProvider>,
        session_idle: Duration,
    ) -> Self {
        let registry = Arc::new(registry);
        Self {
            sessions: SessionStore::new(Arc::clone(&registry), session_idle),
            registry,
            routing,
        }
    }
}
