//! Domain types for the travel time estimator.
//!
//! All types enforce their invariants at construction time, so code that
//! receives a `Traveler` can divide by its speed without further checks.

mod error;
mod traveler;

pub use error::DomainError;
pub use traveler::{TopSpeed, Traveler};
