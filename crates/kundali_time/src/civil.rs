//! Civil date/time handling at the input and output boundary.

use chrono::{
    DateTime, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, TimeDelta, TimeZone,
    Utc,
};
use chrono_tz::Tz;

use crate::error::TimeError;
use crate::julian::jd_to_utc;

/// Resolve an IANA zone name such as `Asia/Kathmandu`.
pub fn parse_timezone(name: &str) -> Result<Tz, TimeError> {
    name.parse::<Tz>()
        .map_err(|_| TimeError::UnknownTimeZone(name.to_string()))
}

/// Convert a local wall-clock time in `tz` to UTC.
///
/// Times inside a DST gap or fold are rejected rather than guessed.
pub fn local_to_utc(local: NaiveDateTime, tz: Tz) -> Result<DateTime<Utc>, TimeError> {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(_, _) => Err(TimeError::AmbiguousLocalTime {
            local: local.to_string(),
            zone: tz.name().to_string(),
        }),
        LocalResult::None => Err(TimeError::NonexistentLocalTime {
            local: local.to_string(),
            zone: tz.name().to_string(),
        }),
    }
}

/// Parse `YYYY-MM-DD`, `HH:MM[:SS]` and a zone name into a UTC instant.
pub fn parse_local(date: &str, time: &str, zone: &str) -> Result<DateTime<Utc>, TimeError> {
    let d = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| TimeError::Parse {
        what: "date",
        input: date.to_string(),
    })?;
    let t = NaiveTime::parse_from_str(time, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M"))
        .map_err(|_| TimeError::Parse {
            what: "time",
            input: time.to_string(),
        })?;
    local_to_utc(d.and_time(t), parse_timezone(zone)?)
}

/// Parse an RFC 3339 instant (`2000-01-01T12:00:00Z`, offsets allowed).
pub fn parse_utc(s: &str) -> Result<DateTime<Utc>, TimeError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| TimeError::Parse {
            what: "UTC instant",
            input: s.to_string(),
        })
}

/// ISO-8601 with a `Z` suffix, rounded to whole seconds.
pub fn format_iso(dt: &DateTime<Utc>) -> String {
    dt.checked_add_signed(TimeDelta::milliseconds(500))
        .unwrap_or(*dt)
        .to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Format a JD UTC as ISO-8601.
pub fn jd_to_iso(jd: f64) -> Result<String, TimeError> {
    jd_to_utc(jd).map(|dt| format_iso(&dt))
}
