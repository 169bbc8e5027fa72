//! Instants for the kundali engine.
//!
//! This crate provides:
//! - Julian Date (UTC) <-> `DateTime<Utc>` conversion
//! - Local civil date/time + IANA time zone -> UTC
//! - ISO-8601 parsing and formatting at the boundary

pub mod civil;
pub mod error;
pub mod julian;

pub use civil::{format_iso, jd_to_iso, local_to_utc, parse_local, parse_timezone, parse_utc};
pub use error::TimeError;
pub use julian::{JD_UNIX_EPOCH, SECONDS_PER_DAY, jd_to_utc, utc_to_jd};
