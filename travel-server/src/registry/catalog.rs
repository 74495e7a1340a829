//! Built-in traveler catalog.

use crate::domain::DomainError;

use super::TravelerRegistry;

/// The default set of travelers.
///
/// Speeds are commonly quoted top speeds converted to meters per second.
/// They are for illustration, not for planning a trip.
pub fn default_travelers() -> Result<TravelerRegistry, DomainError> {
    TravelerRegistry::builder()
        .add("Garden Snail", 0.013) // ~0.05 km/h
        .add("Three-toed Sloth", 0.07)
        .add("Giant Tortoise", 0.075)
        .add("Human (walking)", 1.4)
        .add("Human (running)", 4.5)
        .add("Usain Bolt", 12.42) // 44.72 km/h peak
        .add("House Cat", 13.4)
        .add("Race Horse", 19.4)
        .add("Greyhound", 20.1)
        .add("Cheetah", 33.5)
        .add("Bullet Train", 89.0) // 320 km/h
        .add("Formula 1 Car", 104.0)
        .add("Peregrine Falcon (dive)", 108.0)
        .add("Commercial Jet", 250.0)
        .add("Speed of Sound", 343.0)
        .add("Light", 299_792_458.0)
        .build()
}
