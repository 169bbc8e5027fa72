//! Golden checks for index derivation across the zodiac.

use kundali_base::{
    Nakshatra, PADA_SPAN, Rashi, ZodiacPosition, nakshatra_from_longitude, navamsa_rashi_index,
    rashi_from_longitude,
};

/// Each 30-degree band maps to its rashi.
#[test]
fn every_rashi_midpoint() {
    for (i, r) in Rashi::all().iter().enumerate() {
        let lon = i as f64 * 30.0 + 15.0;
        let info = rashi_from_longitude(lon);
        assert_eq!(info.rashi, *r, "lon {lon}");
        assert!((info.degrees_in_rashi - 15.0).abs() < 1e-10);
    }
}

/// Moon at 190 deg sits in Swati.
#[test]
fn moon_at_190_is_swati() {
    let info = nakshatra_from_longitude(190.0);
    assert_eq!(info.nakshatra, Nakshatra::Swati);
    assert_eq!(info.nakshatra_index, 14);
    let expected_pada = ((190.0 % (360.0 / 27.0)) / PADA_SPAN).floor() as u8 + 1;
    assert_eq!(info.pada, expected_pada);
}

/// Padas advance every 3 deg 20'.
#[test]
fn padas_within_rohini() {
    let start = Nakshatra::Rohini.start_deg();
    for p in 0..4u8 {
        let lon = start + p as f64 * PADA_SPAN + 1.0;
        assert_eq!(nakshatra_from_longitude(lon).pada, p + 1);
    }
}

/// Navamsa of 0 deg is Mesha; the navamsa of a movable sign's last
/// degree stays in the sequence started by the sign itself.
#[test]
fn navamsa_anchors() {
    assert_eq!(navamsa_rashi_index(0.0), 0);
    assert_eq!(navamsa_rashi_index(29.999_999), 8);
    assert_eq!(navamsa_rashi_index(180.0 + 29.999_999), (6 + 8) % 12);
}

/// Combined placement agrees with the individual derivations.
#[test]
fn zodiac_position_agrees() {
    for lon in [0.5, 77.7, 145.25, 211.0, 300.3, 359.5] {
        let p = ZodiacPosition::from_longitude(lon);
        assert_eq!(p.rashi_index, rashi_from_longitude(lon).rashi_index);
        assert_eq!(p.nakshatra_index, nakshatra_from_longitude(lon).nakshatra_index);
        assert_eq!(p.navamsa_index, navamsa_rashi_index(lon));
    }
}
