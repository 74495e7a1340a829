//! Travel time arithmetic.

use crate::domain::DomainError;

/// Seconds needed to cover `distance_meters` at a constant `top_speed` (m/s).
///
/// No rounding happens here; presentation is left to
/// [`format_duration`](super::format_duration).
///
/// # Errors
///
/// [`DomainError::InvalidSpeed`] when `top_speed` is not a positive finite
/// number, [`DomainError::InvalidDistance`] when the distance is negative
/// or not finite.
///
/// # Examples
///
/// ```
/// use travel_server::estimate::estimate_seconds;
///
/// assert_eq!(estimate_seconds(1000.0, 2.0), Ok(500.0));
/// assert!(estimate_seconds(1000.0, 0.0).is_err());
/// ```
pub fn estimate_seconds(distance_meters: f64, top_speed: f64) -> Result<f64, DomainError> {
    if !(top_speed.is_finite() && top_speed > 0.0) {
        return Err(DomainError::InvalidSpeed(top_speed));
    }
    if !(distance_meters.is_finite() && distance_meters >= 0.0) {
        return Err(DomainError::InvalidDistance(distance_meters));
    }

    Ok(distance_meters / top_speed)
}
