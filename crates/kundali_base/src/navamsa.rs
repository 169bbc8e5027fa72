//! Navamsa (D9) sign derivation.
//!
//! Each rashi is split into nine parts of 3 deg 20'. The sequence of
//! navamsa signs starts from the rashi itself for movable signs, the 9th
//! sign from it for fixed signs, and the 5th sign from it for dual signs.

use crate::rashi::{ALL_RASHIS, RASHI_SPAN, Rashi, SignType, sign_type};
use crate::util::{floor_index, normalize_360};

/// Span of one navamsa: 30/9 = 3.3333... degrees.
pub const NAVAMSA_SPAN: f64 = RASHI_SPAN / 9.0;

/// First navamsa sign for a rashi, by its modality.
pub fn navamsa_start(rashi_index: u8) -> u8 {
    let s = rashi_index % 12;
    match sign_type(s) {
        SignType::Chara => s,
        SignType::Sthira => (s + 8) % 12,
        SignType::Dvisvabhava => (s + 4) % 12,
    }
}

/// 0-based navamsa sign index of a sidereal longitude.
pub fn navamsa_rashi_index(sidereal_lon_deg: f64) -> u8 {
    let lon = normalize_360(sidereal_lon_deg);
    let s = floor_index(lon, RASHI_SPAN, 11);
    let within = lon - s as f64 * RASHI_SPAN;
    let part = floor_index(within, NAVAMSA_SPAN, 8);
    (navamsa_start(s) + part) % 12
}

/// Navamsa sign of a sidereal longitude.
pub fn navamsa_rashi(sidereal_lon_deg: f64) -> Rashi {
    ALL_RASHIS[navamsa_rashi_index(sidereal_lon_deg) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_mesha() {
        assert_eq!(navamsa_rashi_index(0.0), 0);
    }

    #[test]
    fn movable_sign_stays_in_own_family() {
        // Mesha spans Mesha..Dhanu in D9
        assert_eq!(navamsa_rashi_index(29.9999), 8);
        // Karka starts at Karka
        assert_eq!(navamsa_rashi_index(90.0), 3);
    }

    #[test]
    fn fixed_sign_starts_ninth_from() {
        // Vrishabha -> Makara
        assert_eq!(navamsa_rashi_index(30.0), 9);
        // Simha -> Mesha
        assert_eq!(navamsa_rashi_index(121.0), 0);
    }

    #[test]
    fn dual_sign_starts_fifth_from() {
        // Mithuna -> Tula
        assert_eq!(navamsa_rashi_index(61.0), 6);
        // Meena last part -> Meena
        assert_eq!(navamsa_rashi_index(359.9), 11);
    }

    #[test]
    fn navamsa_rashi_matches_index() {
        // Vrishabha 5 deg -> second part from Makara
        assert_eq!(navamsa_rashi(35.0), Rashi::Kumbha);
    }
}
