//! Traveler and speed types.

use std::fmt;

use serde::Serialize;

use super::DomainError;
use crate::estimate::estimate_seconds;

/// A top speed in meters per second.
///
/// Always finite and strictly positive, so dividing a distance by it
/// never yields `inf` or `NaN`.
///
/// # Examples
///
/// ```
/// use travel_server::domain::TopSpeed;
///
/// let walking = TopSpeed::new(1.4).unwrap();
/// assert_eq!(walking.meters_per_second(), 1.4);
///
/// assert!(TopSpeed::new(0.0).is_err());
/// assert!(TopSpeed::new(-3.0).is_err());
/// assert!(TopSpeed::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct TopSpeed(f64);

impl TopSpeed {
    /// Validate a speed given in meters per second.
    pub fn new(meters_per_second: f64) -> Result<Self, DomainError> {
        if meters_per_second.is_finite() && meters_per_second > 0.0 {
            Ok(Self(meters_per_second))
        } else {
            Err(DomainError::InvalidSpeed(meters_per_second))
        }
    }

    /// Returns the speed in meters per second.
    pub fn meters_per_second(self) -> f64 {
        self.0
    }
}

impl fmt::Display for TopSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} m/s", self.0)
    }
}

/// A named animal, vehicle or object with a fixed top speed.
///
/// Travelers are immutable once built. The registry hands them out
/// behind `Arc` so sessions can hold one without owning the catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Traveler {
    name: String,
    top_speed: TopSpeed,
}

impl Traveler {
    /// Create a traveler, rejecting blank names and non-positive speeds.
    pub fn new(name: impl Into<String>, top_speed: f64) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::EmptyName);
        }

        let top_speed = TopSpeed::new(top_speed).map_err(|_| DomainError::InvalidTravelerSpeed {
            name: name.clone(),
            speed: top_speed,
        })?;

        Ok(Self { name, top_speed })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn top_speed(&self) -> TopSpeed {
        self.top_speed
    }

    /// Seconds needed to cover `distance_meters` at constant top speed.
    pub fn seconds_to_cover(&self, distance_meters: f64) -> Result<f64, DomainError> {
        estimate_seconds(distance_meters, self.top_speed.meters_per_second())
    }
}

impl fmt::Display for Traveler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.top_speed)
    }
}
