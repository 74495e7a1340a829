//! Conversion from directions responses to [`RouteLeg`].

use super::error::RoutingError;
use super::provider::{RouteLeg, RouteRequest};
use super::types::DirectionsResponse;

/// Extract `routes[0].legs[0]` from a directions response.
///
/// Non-`OK` statuses map onto [`RoutingError`] variants; an `OK` response
/// without any route or leg is treated the same as `ZERO_RESULTS`.
pub fn first_leg(
    response: DirectionsResponse,
    request: &RouteRequest,
) -> Result<RouteLeg, RoutingError> {
    let no_route = || RoutingError::NoRoute {
        origin: request.origin.clone(),
        destination: request.destination.clone(),
    };

    match response.status.as_str() {
        "OK" => {}
        "ZERO_RESULTS" | "NOT_FOUND" => return Err(no_route()),
        "REQUEST_DENIED" => return Err(RoutingError::Unauthorized),
        "OVER_QUERY_LIMIT" | "OVER_DAILY_LIMIT" => return Err(RoutingError::RateLimited),
        _ => {
            return Err(RoutingError::Api {
                status: response.status.clone(),
                message: response.error_message.unwrap_or_default(),
            });
        }
    }

    let leg = response
        .routes
        .into_iter()
        .next()
        .and_then(|route| route.legs.into_iter().next())
        .ok_or_else(no_route)?;

    RouteLeg::new(leg.distance.value, leg.distance.text)
}
