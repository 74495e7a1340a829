//! Mock routing provider for testing without API access.
//!
//! Serves distances from an in-memory table, optionally loaded from a JSON
//! file, as if they were live directions responses.

use std::collections::HashMap;
use std::path::Path;

use futures::future::BoxFuture;
use serde::Deserialize;

use crate::estimate::format_distance;

use super::error::RoutingError;
use super::provider::{RouteLeg, RouteProvider, RouteRequest, normalize_place};

/// One entry of a mock routes file.
#[derive(Debug, Deserialize)]
struct MockRoute {
    origin: String,
    destination: String,
    distance_meters: f64,
}

/// Mock routing provider backed by a fixed distance table.
///
/// Routes are symmetric and matched on trimmed, case-insensitive text.
/// Unknown pairs fail with [`RoutingError::NoRoute`].
#[derive(Debug, Clone, Default)]
pub struct MockRoutingClient {
    distances: HashMap<(String, String), f64>,
}

impl MockRoutingClient {
    /// Create an empty mock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a route in both directions.
    pub fn add(&mut self, origin: &str, destination: &str, distance_meters: f64) {
        let from = normalize_place(origin);
        let to = normalize_place(destination);
        self.distances
            .insert((from.clone(), to.clone()), distance_meters);
        self.distances.insert((to, from), distance_meters);
    }

    /// Builder-style [`add`](Self::add).
    pub fn with_route(mut self, origin: &str, destination: &str, distance_meters: f64) -> Self {
        self.add(origin, destination, distance_meters);
        self
    }

    /// Load routes from JSON:
    /// `[{"origin": "...", "destination": "...", "distance_meters": 1200}]`.
    pub fn from_json(json: &str) -> Result<Self, RoutingError> {
        let routes: Vec<MockRoute> = serde_json::from_str(json).map_err(|e| RoutingError::Json {
            message: e.to_string(),
            body: None,
        })?;

        let mut mock = Self::new();
        for route in routes {
            // Reject bad distances at load time rather than per lookup
            RouteLeg::new(route.distance_meters, String::new())?;
            mock.add(&route.origin, &route.destination, route.distance_meters);
        }

        if mock.is_empty() {
            return Err(RoutingError::NotConfigured(
                "mock routes file contains no routes".to_string(),
            ));
        }

        Ok(mock)
    }

    /// Load routes from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, RoutingError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            RoutingError::NotConfigured(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_json(&json)
    }

    /// Number of distinct place pairs (A→B and B→A count once).
    pub fn len(&self) -> usize {
        self.distances.keys().filter(|(from, to)| from <= to).count()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Look up a route.
    pub fn lookup(&self, request: &RouteRequest) -> Result<RouteLeg, RoutingError> {
        let key = request.normalized();
        let meters = self
            .distances
            .get(&(key.origin, key.destination))
            .copied()
            .ok_or_else(|| RoutingError::NoRoute {
                origin: request.origin.clone(),
                destination: request.destination.clone(),
            })?;

        RouteLeg::new(meters, format_distance(meters))
    }
}

impl RouteProvider for MockRoutingClient {
    fn first_leg<'a>(
        &'a self,
        request: &'a RouteRequest,
    ) -> BoxFuture<'a, Result<RouteLeg, RoutingError>> {
        Box::pin(async move { self.lookup(request) })
    }
}
