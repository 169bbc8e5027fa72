//! Error types for chart assembly.

use std::path::PathBuf;

use kundali_base::VedicError;
use kundali_time::TimeError;
use thiserror::Error;

/// Errors from building or serializing a kundali.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChartError {
    /// Without the ascendant no chart can be built.
    #[error("ascendant longitude missing from ephemeris data")]
    MissingAscendant,
    /// Latitude/longitude outside the valid range.
    #[error("invalid location: {0}")]
    InvalidLocation(&'static str),
    /// The ephemeris provider failed.
    #[error("ephemeris error: {0}")]
    Ephemeris(String),
    #[error(transparent)]
    Vedic(#[from] VedicError),
    #[error(transparent)]
    Time(#[from] TimeError),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
