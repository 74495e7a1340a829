//! Human-readable durations and distances.

/// Shown for durations too short to be worth rounding.
pub const LESS_THAN_THRESHOLD: &str = "Less than 0.01 seconds";

/// Durations below this many seconds collapse to [`LESS_THAN_THRESHOLD`].
const THRESHOLD_SECS: f64 = 0.01;

/// Format a duration in seconds for display.
///
/// Durations are rounded to whole minutes and split into hours and
/// minutes, e.g. `"1 hour, 1 minute"`. When that rounds to zero minutes
/// the raw, unrounded seconds are shown instead (`"5 seconds"`).
///
/// # Examples
///
/// ```
/// use travel_server::estimate::format_duration;
///
/// assert_eq!(format_duration(3661.0), "1 hour, 1 minute");
/// assert_eq!(format_duration(7200.0), "2 hours");
/// assert_eq!(format_duration(5.0), "5 seconds");
/// assert_eq!(format_duration(0.001), "Less than 0.01 seconds");
/// ```
pub fn format_duration(seconds: f64) -> String {
    if seconds < THRESHOLD_SECS {
        return LESS_THAN_THRESHOLD.to_string();
    }

    let total_minutes = (seconds / 60.0).round() as u64;
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    let mut parts = Vec::with_capacity(2);
    if hours > 0 {
        parts.push(counted(hours, "hour"));
    }
    if minutes > 0 {
        parts.push(counted(minutes, "minute"));
    }

    if parts.is_empty() {
        // Under half a minute: show the raw value exactly as computed.
        let suffix = if seconds != 1.0 { "s" } else { "" };
        return format!("{seconds} second{suffix}");
    }

    parts.join(", ")
}

/// Pluralized only for counts above one.
fn counted(n: u64, unit: &str) -> String {
    let suffix = if n > 1 { "s" } else { "" };
    format!("{n} {unit}{suffix}")
}

/// Format a distance in meters the way directions services display it.
///
/// Below a kilometre the distance is shown in whole meters, above it in
/// kilometres with one decimal place.
pub fn format_distance(meters: f64) -> String {
    if meters < 1000.0 {
        format!("{} m", meters.round() as u64)
    } else {
        format!("{:.1} km", meters / 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn below_threshold() {
        assert_eq!(format_duration(0.0), LESS_THAN_THRESHOLD);
        assert_eq!(format_duration(0.009), LESS_THAN_THRESHOLD);
        assert_eq!(format_duration(-5.0), LESS_THAN_THRESHOLD);
    }

    #[test]
    fn hours_and_minutes() {
        assert_eq!(format_duration(3661.0), "1 hour, 1 minute");
        assert_eq!(format_duration(7200.0), "2 hours");
        assert_eq!(format_duration(3600.0), "1 hour");
        assert_eq!(format_duration(60.0), "1 minute");
        assert_eq!(format_duration(9000.0), "2 hours, 30 minutes");
    }

    #[test]
    fn rounds_to_nearest_minute() {
        // 90s is 1.5 minutes, which rounds up
        assert_eq!(format_duration(90.0), "2 minutes");
        assert_eq!(format_duration(89.0), "1 minute");
        // 30s is exactly half a minute
        assert_eq!(format_duration(30.0), "1 minute");
        // 59m 40s rounds into the next hour
        assert_eq!(format_duration(3580.0), "1 hour");
    }

    #[test]
    fn seconds_fallback_uses_raw_value() {
        assert_eq!(format_duration(5.0), "5 seconds");
        assert_eq!(format_duration(1.0), "1 second");
        assert_eq!(format_duration(0.5), "0.5 seconds");
        assert_eq!(format_duration(0.01), "0.01 seconds");
        assert_eq!(format_duration(29.9), "29.9 seconds");
    }

    #[test]
    fn very_long_durations() {
        // A snail crossing 1000 km
        let secs = 1_000_000.0 / 0.013;
        let text = format_duration(secs);
        assert!(text.contains("hours"));
        assert!(!text.contains("second"));
    }

    #[test]
    fn distance_display() {
        assert_eq!(format_distance(0.0), "0 m");
        assert_eq!(format_distance(850.4), "850 m");
        assert_eq!(format_distance(1000.0), "1.0 km");
        assert_eq!(format_distance(1234.0), "1.2 km");
        assert_eq!(format_distance(878_000.0), "878.0 km");
    }
}
