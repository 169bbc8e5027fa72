//! Assembly of the complete birth chart.
//!
//! The ascendant is the only required input. Missing grahas are left out of
//! the planet list, the Panchanga is absent without both luminaries, and the
//! dasha list is empty without the Moon.

use chrono::{DateTime, Utc};
use kundali_base::dasha::{Mahadasha, vimshottari};
use kundali_base::{
    ALL_GRAHAS, Graha, MoonIndices, PanchangaRecord, PlanetPosition, Rashi, VedicError,
    ZodiacPosition, compute_panchanga, navamsa_rashi,
};
use kundali_time::utc_to_jd;
use log::{debug, warn};

use crate::ephemeris::{EphemerisProvider, EphemerisSnapshot, GeoLocation};
use crate::error::ChartError;

/// Birth instant and place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirthData {
    pub utc: DateTime<Utc>,
    pub location: GeoLocation,
}

/// Immutable result of one kundali computation.
#[derive(Debug, Clone, PartialEq)]
pub struct KundaliResult {
    pub birth_utc: DateTime<Utc>,
    /// Birth instant as JD UTC, the dasha time base.
    pub birth_jd: f64,
    pub lagna: ZodiacPosition,
    pub navamsa_lagna: Rashi,
    /// In `ALL_GRAHAS` order; grahas without a longitude are omitted.
    pub planets: Vec<PlanetPosition>,
    pub panchanga: Option<PanchangaRecord>,
    pub dashas: Vec<Mahadasha>,
}

impl KundaliResult {
    pub fn planet(&self, graha: Graha) -> Option<&PlanetPosition> {
        self.planets.iter().find(|p| p.graha == graha)
    }
}

/// Fetch longitudes from `provider` and build the chart.
pub fn compute_kundali<P: EphemerisProvider + ?Sized>(
    provider: &P,
    birth: &BirthData,
) -> Result<KundaliResult, ChartError> {
    birth.location.validate()?;
    let snapshot = provider.snapshot(&birth.utc, &birth.location)?;
    kundali_from_snapshot(&snapshot, birth.utc)
}

/// Build the chart from longitudes already in hand.
pub fn kundali_from_snapshot(
    snapshot: &EphemerisSnapshot,
    birth_utc: DateTime<Utc>,
) -> Result<KundaliResult, ChartError> {
    let ascendant = snapshot
        .ascendant_sidereal()
        .ok_or(ChartError::MissingAscendant)?;
    let birth_jd = utc_to_jd(&birth_utc);

    let planets: Vec<PlanetPosition> = ALL_GRAHAS
        .iter()
        .filter_map(|&g| match snapshot.sidereal_longitude(g) {
            Some(lon) => Some(PlanetPosition::new(g, lon)),
            None => {
                warn!("no longitude for {}, omitting it", g.english_name());
                None
            }
        })
        .collect();

    let sun = snapshot.sidereal_longitude(Graha::Surya);
    let moon = snapshot.sidereal_longitude(Graha::Chandra);

    let panchanga = match panchanga_for(sun, moon) {
        Ok(p) => Some(p),
        Err(e) => {
            warn!("panchanga unavailable: {e}");
            None
        }
    };

    let dashas = match moon {
        Some(m) => vimshottari(birth_jd, m),
        None => {
            warn!("dasha unavailable: {}", VedicError::MissingLongitude(Graha::Chandra));
            Vec::new()
        }
    };

    debug!(
        "kundali at jd {birth_jd:.6}: {} planets, {} mahadashas",
        planets.len(),
        dashas.len()
    );

    Ok(KundaliResult {
        birth_utc,
        birth_jd,
        lagna: ZodiacPosition::from_longitude(ascendant),
        navamsa_lagna: navamsa_rashi(ascendant),
        planets,
        panchanga,
        dashas,
    })
}

fn panchanga_for(sun: Option<f64>, moon: Option<f64>) -> Result<PanchangaRecord, VedicError> {
    let sun = sun.ok_or(VedicError::MissingLongitude(Graha::Surya))?;
    let moon = moon.ok_or(VedicError::MissingLongitude(Graha::Chandra))?;
    compute_panchanga(moon, sun, MoonIndices::from_longitude(moon))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ephemeris::StaticEphemeris;
    use chrono::TimeZone;

    fn birth() -> BirthData {
        BirthData {
            utc: Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap(),
            location: GeoLocation::new(27.7, 85.3).unwrap(),
        }
    }

    fn full_snapshot() -> EphemerisSnapshot {
        EphemerisSnapshot {
            ascendant: Some(95.0),
            sun: Some(256.0),
            moon: Some(20.0),
            mars: Some(300.0),
            mercury: Some(250.0),
            jupiter: Some(1.0),
            venus: Some(217.0),
            saturn: Some(16.0),
            mean_node: Some(100.0),
            ..Default::default()
        }
    }

    #[test]
    fn complete_chart() {
        let eph = StaticEphemeris::new(full_snapshot());
        let k = compute_kundali(&eph, &birth()).unwrap();
        assert_eq!(k.planets.len(), 9);
        assert_eq!(k.lagna.rashi, Rashi::Karka);
        assert_eq!(k.navamsa_lagna, Rashi::Simha);
        assert!(k.panchanga.is_some());
        assert_eq!(k.dashas[0].period.graha, Graha::Shukra);
        let ketu = k.planet(Graha::Ketu).unwrap();
        assert!((ketu.position.longitude - 280.0).abs() < 1e-12);
        assert!((k.birth_jd - 2_451_545.0).abs() < 1e-9);
    }

    #[test]
    fn missing_ascendant_is_fatal() {
        let snap = EphemerisSnapshot {
            ascendant: None,
            ..full_snapshot()
        };
        let err = kundali_from_snapshot(&snap, birth().utc).unwrap_err();
        assert!(matches!(err, ChartError::MissingAscendant));
    }

    #[test]
    fn missing_moon_degrades() {
        let snap = EphemerisSnapshot {
            moon: None,
            ..full_snapshot()
        };
        let k = kundali_from_snapshot(&snap, birth().utc).unwrap();
        assert_eq!(k.planets.len(), 8);
        assert!(k.panchanga.is_none());
        assert!(k.dashas.is_empty());
    }

    #[test]
    fn missing_sun_keeps_dashas() {
        let snap = EphemerisSnapshot {
            sun: None,
            ..full_snapshot()
        };
        let k = kundali_from_snapshot(&snap, birth().utc).unwrap();
        assert!(k.panchanga.is_none());
        assert!(!k.dashas.is_empty());
    }

    #[test]
    fn bad_location_rejected_before_lookup() {
        let eph = StaticEphemeris::new(full_snapshot());
        let b = BirthData {
            location: GeoLocation {
                latitude_deg: 120.0,
                longitude_deg: 0.0,
            },
            ..birth()
        };
        assert!(matches!(
            compute_kundali(&eph, &b),
            Err(ChartError::InvalidLocation(_))
        ));
    }
}
