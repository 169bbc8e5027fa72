//! Zodiacal placement of a single point: the combined output of the
//! rashi, nakshatra and navamsa derivations.

use crate::graha::Graha;
use crate::nakshatra::{Nakshatra, nakshatra_from_longitude};
use crate::navamsa::navamsa_rashi_index;
use crate::rashi::{Rashi, rashi_from_longitude};
use crate::util::normalize_360;

/// Every index derivable from one sidereal longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZodiacPosition {
    /// Sidereal longitude in [0, 360).
    pub longitude: f64,
    /// Degrees within the rashi.
    pub longitude_in_rashi: f64,
    pub rashi: Rashi,
    /// 0-11.
    pub rashi_index: u8,
    pub nakshatra: Nakshatra,
    /// 0-26.
    pub nakshatra_index: u8,
    /// 1-4.
    pub pada: u8,
    /// 0-11.
    pub navamsa_index: u8,
}

impl ZodiacPosition {
    pub fn from_longitude(sidereal_lon_deg: f64) -> Self {
        let longitude = normalize_360(sidereal_lon_deg);
        let r = rashi_from_longitude(longitude);
        let n = nakshatra_from_longitude(longitude);
        Self {
            longitude,
            longitude_in_rashi: r.degrees_in_rashi,
            rashi: r.rashi,
            rashi_index: r.rashi_index,
            nakshatra: n.nakshatra,
            nakshatra_index: n.nakshatra_index,
            pada: n.pada,
            navamsa_index: navamsa_rashi_index(longitude),
        }
    }
}

/// A graha together with its placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetPosition {
    pub graha: Graha,
    pub position: ZodiacPosition,
}

impl PlanetPosition {
    pub fn new(graha: Graha, sidereal_lon_deg: f64) -> Self {
        Self {
            graha,
            position: ZodiacPosition::from_longitude(sidereal_lon_deg),
        }
    }
}
