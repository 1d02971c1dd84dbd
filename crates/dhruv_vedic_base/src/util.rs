//! Shared utility functions for vedic calculations.

use chrono::{DateTime, NaiveDateTime};

/// Julian Day of the Unix epoch (1970-01-01T00:00:00 UT).
pub const JD_UNIX_EPOCH: f64 = 2_440_587.5;

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    let r = if r < 0.0 { r + 360.0 } else { r };
    // -1e-18 % 360 + 360 rounds to exactly 360.0
    if r >= 360.0 { 0.0 } else { r }
}

/// Shortest angular distance between two longitudes, in [0, 180].
pub fn angular_distance(a: f64, b: f64) -> f64 {
    let diff = (normalize_360(a) - normalize_360(b)).abs();
    if diff > 180.0 { 360.0 - diff } else { diff }
}

/// Convert a Julian Day (UT) to a naive UTC datetime.
///
/// Returns `None` for values chrono cannot represent.
pub fn jd_to_datetime(jd: f64) -> Option<NaiveDateTime> {
    if !jd.is_finite() {
        return None;
    }
    let millis = ((jd - JD_UNIX_EPOCH) * 86_400_000.0).round();
    if millis.abs() > i64::MAX as f64 {
        return None;
    }
    DateTime::from_timestamp_millis(millis as i64).map(|dt| dt.naive_utc())
}

/// Convert a naive UTC datetime to a Julian Day (UT).
pub fn datetime_to_jd(dt: NaiveDateTime) -> f64 {
    dt.and_utc().timestamp_millis() as f64 / 86_400_000.0 + JD_UNIX_EPOCH
}

/// Round to `places` decimal places.
pub fn round_to(value: f64, places: i32) -> f64 {
    let f = 10f64.powi(places);
    (value * f).round() / f
}
