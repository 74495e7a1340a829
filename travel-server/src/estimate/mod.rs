//! Travel time estimation.
//!
//! Turns a route distance and a traveler's top speed into elapsed seconds,
//! and elapsed seconds into display text. The estimate is illustrative:
//! it assumes the traveler holds top speed for the whole route.

mod calculator;
mod format;

pub use calculator::estimate_seconds;
pub use format::{LESS_THAN_THRESHOLD, format_distance, format_duration};
