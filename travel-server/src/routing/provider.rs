//! The seam between the estimator and whatever computes routes.

use std::sync::Arc;

use futures::future::BoxFuture;
use serde::Serialize;

use super::error::RoutingError;

/// How the route should be travelled.
///
/// Travelers are estimated over the walking route, which is the closest
/// thing to "the ground distance" a directions service offers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    #[default]
    Walking,
}

impl TravelMode {
    /// Value of the `mode` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelMode::Walking => "walking",
        }
    }
}

/// A request for a route between two free-text places.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteRequest {
    pub origin: String,
    pub destination: String,
    pub mode: TravelMode,
}

impl RouteRequest {
    /// Create a walking route request.
    pub fn walking(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            mode: TravelMode::Walking,
        }
    }

    /// Trimmed, lowercased copy used for cache and mock lookups.
    pub fn normalized(&self) -> Self {
        Self {
            origin: normalize_place(&self.origin),
            destination: normalize_place(&self.destination),
            mode: self.mode,
        }
    }
}

/// Normalize a free-text place for matching.
pub(crate) fn normalize_place(place: &str) -> String {
    place.trim().to_lowercase()
}

/// The first leg of the first route: all the estimator needs.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteLeg {
    /// Leg length in meters.
    pub distance_meters: f64,

    /// Display text as supplied by the routing service (e.g. `"1.2 km"`).
    pub distance_text: String,
}

impl RouteLeg {
    /// Build a leg, rejecting negative or non-finite distances.
    pub fn new(distance_meters: f64, distance_text: impl Into<String>) -> Result<Self, RoutingError> {
        if !(distance_meters.is_finite() && distance_meters >= 0.0) {
            return Err(RoutingError::Malformed(format!(
                "leg distance {distance_meters} is not a usable number of meters"
            )));
        }

        Ok(Self {
            distance_meters,
            distance_text: distance_text.into(),
        })
    }
}

/// Something that can look up a route.
///
/// Implemented by the HTTP client, the mock, and the caching wrapper.
/// Returns a boxed future so providers can be swapped behind `dyn`.
pub trait RouteProvider: Send + Sync {
    /// Fetch the first leg of the first route for `request`.
    fn first_leg<'a>(
        &'a self,
        request: &'a RouteRequest,
    ) -> BoxFuture<'a, Result<RouteLeg, RoutingError>>;
}

impl<P: RouteProvider + ?Sized> RouteProvider for Arc<P> {
    fn first_leg<'a>(
        &'a self,
        request: &'a RouteRequest,
    ) -> BoxFuture<'a, Result<RouteLeg, RoutingError>> {
        (**self).first_leg(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walking_request() {
        let req = RouteRequest::walking("Times Square", "Central Park");
        assert_eq!(req.origin, "Times Square");
        assert_eq!(req.destination, "Central Park");
        assert_eq!(req.mode, TravelMode::Walking);
        assert_eq!(req.mode.as_str(), "walking");
    }

    #[test]
    fn normalized_ignores_case_and_padding() {
        let a = RouteRequest::walking("  Times Square ", "CENTRAL PARK");
        let b = RouteRequest::walking("times square", "central park");
        assert_eq!(a.normalized(), b.normalized());
        assert_ne!(a, b);
    }

    #[test]
    fn leg_rejects_bad_distance() {
        assert!(RouteLeg::new(-1.0, "-1 m").is_err());
        assert!(RouteLeg::new(f64::NAN, "?").is_err());
        assert!(RouteLeg::new(0.0, "0 m").is_ok());
    }
}
