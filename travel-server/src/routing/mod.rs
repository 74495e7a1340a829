//! Route lookup.
//!
//! The estimator never computes routes itself; it asks a [`RouteProvider`]
//! for the walking route between two free-text places and reads a single
//! number from the answer: the length of the first leg of the first route.
//!
//! Providers:
//! - [`RoutingClient`] - HTTP client for a Google-Directions-compatible API
//! - [`MockRoutingClient`] - fixed distance table for tests and offline runs
//! - [`crate::cache::CachedRouteProvider`] - caching wrapper around either

mod client;
mod convert;
mod error;
mod mock;
mod provider;
mod types;

pub use client::{RoutingClient, RoutingConfig};
pub use convert::first_leg;
pub use error::RoutingError;
pub use mock::MockRoutingClient;
pub use provider::{RouteLeg, RouteProvider, RouteRequest, TravelMode};
pub use types::{DirectionsLeg, DirectionsResponse, DirectionsRoute, TextValue};
