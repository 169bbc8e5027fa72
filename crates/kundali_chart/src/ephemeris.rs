//! Seam to the ephemeris collaborator.
//!
//! The chart layer needs, for one instant and place, the longitudes of the
//! seven classical grahas, the mean lunar node and the ascendant. Values
//! may be sidereal already, or tropical together with one ayanamsa value.

use std::path::Path;

use chrono::{DateTime, Utc};
use kundali_base::{Graha, ketu_from_rahu, normalize_360};
use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// Geographic location of the birth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Degrees, north positive.
    pub latitude_deg: f64,
    /// Degrees, east positive.
    pub longitude_deg: f64,
}

impl GeoLocation {
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Result<Self, ChartError> {
        let loc = Self {
            latitude_deg,
            longitude_deg,
        };
        loc.validate()?;
        Ok(loc)
    }

    pub fn validate(&self) -> Result<(), ChartError> {
        if !(-90.0..=90.0).contains(&self.latitude_deg) {
            return Err(ChartError::InvalidLocation("latitude must be within [-90, 90]"));
        }
        if !(-180.0..=180.0).contains(&self.longitude_deg) {
            return Err(ChartError::InvalidLocation(
                "longitude must be within [-180, 180]",
            ));
        }
        Ok(())
    }
}

/// Zodiac the snapshot's longitudes are expressed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ZodiacFrame {
    #[default]
    Sidereal,
    /// Tropical longitudes; `ayanamsa_deg` is subtracted from each.
    Tropical { ayanamsa_deg: f64 },
}

/// Raw longitudes for one instant, in degrees. Any field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EphemerisSnapshot {
    #[serde(default)]
    pub frame: ZodiacFrame,
    #[serde(default)]
    pub ascendant: Option<f64>,
    #[serde(default)]
    pub sun: Option<f64>,
    #[serde(default)]
    pub moon: Option<f64>,
    #[serde(default)]
    pub mars: Option<f64>,
    #[serde(default)]
    pub mercury: Option<f64>,
    #[serde(default)]
    pub jupiter: Option<f64>,
    #[serde(default)]
    pub venus: Option<f64>,
    #[serde(default)]
    pub saturn: Option<f64>,
    /// Mean ascending node (Rahu).
    #[serde(default)]
    pub mean_node: Option<f64>,
}

impl EphemerisSnapshot {
    pub fn from_json_str(s: &str) -> Result<Self, ChartError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ChartError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ChartError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    fn to_sidereal(&self, raw_deg: f64) -> f64 {
        match self.frame {
            ZodiacFrame::Sidereal => normalize_360(raw_deg),
            ZodiacFrame::Tropical { ayanamsa_deg } => normalize_360(raw_deg - ayanamsa_deg),
        }
    }

    /// Sidereal ascendant, if supplied.
    pub fn ascendant_sidereal(&self) -> Option<f64> {
        self.ascendant.map(|a| self.to_sidereal(a))
    }

    /// Sidereal longitude of a graha. Ketu is derived from the node.
    pub fn sidereal_longitude(&self, graha: Graha) -> Option<f64> {
        let raw = match graha {
            Graha::Surya => self.sun,
            Graha::Chandra => self.moon,
            Graha::Mangal => self.mars,
            Graha::Buddh => self.mercury,
            Graha::Guru => self.jupiter,
            Graha::Shukra => self.venus,
            Graha::Shani => self.saturn,
            Graha::Rahu => self.mean_node,
            Graha::Ketu => return self.mean_node.map(|n| ketu_from_rahu(self.to_sidereal(n))),
        };
        raw.map(|r| self.to_sidereal(r))
    }
}

/// Source of longitudes for a birth instant and place.
pub trait EphemerisProvider {
    fn snapshot(
        &self,
        utc: &DateTime<Utc>,
        location: &GeoLocation,
    ) -> Result<EphemerisSnapshot, ChartError>;
}

/// Provider returning one fixed snapshot for every query, for precomputed
/// longitudes and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticEphemeris {
    snapshot: EphemerisSnapshot,
}

impl StaticEphemeris {
    pub fn new(snapshot: EphemerisSnapshot) -> Self {
        Self { snapshot }
    }
}

impl EphemerisProvider for StaticEphemeris {
    fn snapshot(
        &self,
        _utc: &DateTime<Utc>,
        _location: &GeoLocation,
    ) -> Result<EphemerisSnapshot, ChartError> {
        Ok(self.snapshot.clone())
    }
}
