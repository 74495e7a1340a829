//! Wire types for the directions API response.
//!
//! Only the fields the estimator reads are modelled; everything else in the
//! payload (polylines, steps, bounds) is ignored by serde.

use serde::Deserialize;

/// Top-level directions response.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsResponse {
    /// `"OK"`, `"ZERO_RESULTS"`, `"REQUEST_DENIED"`, ...
    pub status: String,

    #[serde(default)]
    pub error_message: Option<String>,

    #[serde(default)]
    pub routes: Vec<DirectionsRoute>,
}

/// One candidate route.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsRoute {
    #[serde(default)]
    pub summary: Option<String>,

    #[serde(default)]
    pub legs: Vec<DirectionsLeg>,
}

/// A leg between two waypoints.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsLeg {
    pub distance: TextValue,

    /// The service's own walking estimate; not used for travelers.
    #[serde(default)]
    pub duration: Option<TextValue>,

    #[serde(default)]
    pub start_address: Option<String>,

    #[serde(default)]
    pub end_address: Option<String>,
}

/// A numeric value paired with its display text, e.g. `1234` / `"1.2 km"`.
#[derive(Debug, Clone, Deserialize)]
pub struct TextValue {
    pub text: String,
    pub value: f64,
}
