//! Julian Date in the UTC scale.
//!
//! Dasha boundaries are stored as JD UTC so that year arithmetic is plain
//! day arithmetic. Leap seconds are ignored, matching `DateTime<Utc>`.

use chrono::{DateTime, Utc};

use crate::error::TimeError;

/// JD of 1970-01-01T00:00:00Z.
pub const JD_UNIX_EPOCH: f64 = 2_440_587.5;

pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Convert a UTC instant to Julian Date.
pub fn utc_to_jd(dt: &DateTime<Utc>) -> f64 {
    let secs = dt.timestamp() as f64 + dt.timestamp_subsec_nanos() as f64 * 1e-9;
    JD_UNIX_EPOCH + secs / SECONDS_PER_DAY
}

/// Convert a Julian Date to a UTC instant, rounded to the microsecond.
pub fn jd_to_utc(jd: f64) -> Result<DateTime<Utc>, TimeError> {
    if !jd.is_finite() {
        return Err(TimeError::OutOfRange(jd));
    }
    let micros = ((jd - JD_UNIX_EPOCH) * SECONDS_PER_DAY * 1e6).round();
    if micros.abs() >= i64::MAX as f64 {
        return Err(TimeError::OutOfRange(jd));
    }
    DateTime::from_timestamp_micros(micros as i64).ok_or(TimeError::OutOfRange(jd))
}
