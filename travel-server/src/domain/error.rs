//! Domain error types.
//!
//! These errors represent validation failures in the traveler catalog and
//! in the estimate arithmetic. They are distinct from routing/IO errors.

/// Domain-level validation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// Speed is zero, negative or not finite
    #[error("top speed must be a positive, finite number of m/s (got {0})")]
    InvalidSpeed(f64),

    /// A catalog entry carries an unusable speed
    #[error("traveler {name:?} has invalid top speed {speed}")]
    InvalidTravelerSpeed { name: String, speed: f64 },

    /// Distance is negative or not finite
    #[error("distance must be a non-negative, finite number of meters (got {0})")]
    InvalidDistance(f64),

    /// Traveler name is blank
    #[error("traveler name must not be empty")]
    EmptyName,

    /// Two catalog entries share a name
    #[error("duplicate traveler name: {0:?}")]
    DuplicateTraveler(String),
}
