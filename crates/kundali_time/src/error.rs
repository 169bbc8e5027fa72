//! Error types for time conversions.

use thiserror::Error;

/// Errors from instant parsing and conversion.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Not an IANA time zone name.
    #[error("unknown time zone: {0}")]
    UnknownTimeZone(String),
    /// Local time falls in a DST gap.
    #[error("local time {local} does not exist in {zone}")]
    NonexistentLocalTime { local: String, zone: String },
    /// Local time occurs twice (DST fold).
    #[error("local time {local} is ambiguous in {zone}")]
    AmbiguousLocalTime { local: String, zone: String },
    /// Malformed date or time string.
    #[error("cannot parse {what}: {input:?}")]
    Parse { what: &'static str, input: String },
    /// Julian Date outside what a calendar instant can hold.
    #[error("julian date {0} is outside the representable range")]
    OutOfRange(f64),
}
