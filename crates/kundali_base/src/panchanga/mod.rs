//! Panchanga: the five limbs of the lunar calendar at one instant, plus the
//! nakshatra- and rashi-keyed attributes read off the Moon's placement.
//!
//! Inputs are sidereal longitudes of the Sun and Moon together with the
//! Moon's rashi/nakshatra/pada indices. All table lookups are validated;
//! any failure yields an error and no partial record.

pub mod akshar;
pub mod attributes;
pub mod karana;
pub mod tithi;
pub mod yoga;

use log::debug;

use crate::error::VedicError;
use crate::nakshatra::nakshatra_from_longitude;
use crate::rashi::rashi_index;
use crate::util::normalize_360;

use akshar::BirthSyllable;
use attributes::{Gana, Nadi, Varna, Yoni, nakshatra_attributes, varna_for_rashi};
use karana::{Karana, karana_at, karana_from_elongation};
use tithi::{Paksha, tithi_from_elongation};
use yoga::yoga_from_sum;

/// Moon-derived indices the attribute lookups are keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoonIndices {
    /// 0-11.
    pub rashi_index: u8,
    /// 0-26.
    pub nakshatra_index: u8,
    /// 1-4.
    pub pada: u8,
}

impl MoonIndices {
    pub fn from_longitude(moon_sidereal_lon: f64) -> Self {
        let n = nakshatra_from_longitude(moon_sidereal_lon);
        Self {
            rashi_index: rashi_index(moon_sidereal_lon),
            nakshatra_index: n.nakshatra_index,
            pada: n.pada,
        }
    }
}

/// Complete Panchanga record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanchangaRecord {
    /// Full tithi index, 0-29.
    pub tithi_index: u8,
    /// Lunar day within the fortnight, 0-14.
    pub tithi_in_paksha: u8,
    pub paksha: Paksha,
    /// 0-26.
    pub yoga_index: u8,
    /// Slot in the 60-karana cycle, 0-59.
    pub karana_index: u8,
    pub karana: Karana,
    pub gana: Gana,
    pub yoni: Yoni,
    pub nadi: Nadi,
    pub varna: Varna,
    pub akshar: BirthSyllable,
    /// Moon indices the record was keyed by.
    pub moon: MoonIndices,
}

/// Compute the Panchanga record.
pub fn compute_panchanga(
    moon_sidereal_lon: f64,
    sun_sidereal_lon: f64,
    moon: MoonIndices,
) -> Result<PanchangaRecord, VedicError> {
    let elongation = normalize_360(moon_sidereal_lon - sun_sidereal_lon);
    let tithi = tithi_from_elongation(elongation);
    let yoga = yoga_from_sum(sun_sidereal_lon + moon_sidereal_lon);

    let karana_index = karana_from_elongation(elongation).karana_index;
    let karana = karana_at(karana_index)?;

    let attrs = nakshatra_attributes(moon.nakshatra_index)?;
    let varna = varna_for_rashi(moon.rashi_index)?;
    let akshar = BirthSyllable::new(moon.nakshatra_index, moon.pada)?;

    debug!(
        "panchanga: elongation={elongation:.6} tithi={} yoga={} karana={karana_index}",
        tithi.tithi_index, yoga.yoga_index
    );

    Ok(PanchangaRecord {
        tithi_index: tithi.tithi_index,
        tithi_in_paksha: tithi.tithi_in_paksha,
        paksha: tithi.paksha,
        yoga_index: yoga.yoga_index,
        karana_index,
        karana,
        gana: attrs.gana,
        yoni: attrs.yoni,
        nadi: attrs.nadi,
        varna,
        akshar,
        moon,
    })
}

/// Convenience: derive the Moon indices from its longitude first.
pub fn panchanga_from_longitudes(
    moon_sidereal_lon: f64,
    sun_sidereal_lon: f64,
) -> Result<PanchangaRecord, VedicError> {
    let moon = MoonIndices::from_longitude(moon_sidereal_lon);
    compute_panchanga(moon_sidereal_lon, sun_sidereal_lon, moon)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moon_15_sun_0() {
        let p = panchanga_from_longitudes(15.0, 0.0).unwrap();
        assert_eq!(p.tithi_index, 1);
        assert_eq!(p.tithi_in_paksha, 1);
        assert_eq!(p.paksha, Paksha::Shukla);
        assert_eq!(p.karana_index, 2);
        assert_eq!(p.karana, Karana::Balava);
        // 15 deg is past Ashwini's 13.33 deg
        assert_eq!(p.moon.nakshatra_index, 1);
        assert_eq!(p.gana, Gana::Manushya);
        assert_eq!(p.varna, Varna::Kshatriya);
    }

    #[test]
    fn waning_fortnight() {
        let p = panchanga_from_longitudes(200.0, 0.0).unwrap();
        assert_eq!(p.tithi_index, 16);
        assert_eq!(p.paksha, Paksha::Krishna);
        assert_eq!(p.tithi_in_paksha, 1);
    }

    #[test]
    fn elongation_wraps() {
        // Moon behind Sun by 1 deg: last tithi, last karana
        let p = panchanga_from_longitudes(10.0, 11.0).unwrap();
        assert_eq!(p.tithi_index, 29);
        assert_eq!(p.karana_index, 59);
        assert_eq!(p.karana, Karana::Naga);
    }

    #[test]
    fn conjunction_edge_matches_karana_lookup() {
        // Sun a hair ahead of the Moon: elongation reduces to 0 deg
        let (moon, sun) = (10.0, 10.0 + 1e-14);
        let p = panchanga_from_longitudes(moon, sun).unwrap();
        let k = karana_from_elongation(moon - sun);
        assert_eq!(p.karana_index, k.karana_index);
        assert_eq!(p.karana, k.karana);
        assert_eq!(p.tithi_index, 0);
        assert_eq!(p.karana, Karana::Kimstughna);
    }

    #[test]
    fn bad_pada_is_lookup_error() {
        let moon = MoonIndices {
            rashi_index: 0,
            nakshatra_index: 0,
            pada: 7,
        };
        let err = compute_panchanga(1.0, 0.0, moon).unwrap_err();
        assert!(matches!(err, VedicError::Lookup { .. }));
    }

    #[test]
    fn bad_rashi_is_lookup_error() {
        let moon = MoonIndices {
            rashi_index: 12,
            nakshatra_index: 0,
            pada: 1,
        };
        assert!(compute_panchanga(1.0, 0.0, moon).is_err());
    }
}
