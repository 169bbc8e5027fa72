//! Birth balance: how much of the first Mahadasha remains at birth,
//! computed from the Moon's position within its nakshatra.

use crate::error::VedicError;
use crate::graha::Graha;
use crate::nakshatra::{NAKSHATRA_SPAN_27, nakshatra_index};
use crate::util::normalize_360;

use super::vimshottari_data::{dasha_years, nakshatra_lord};

/// Moon-derived starting point of the dasha sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirthBalance {
    /// 0-based nakshatra of the Moon.
    pub nakshatra_index: u8,
    /// Ruler of that nakshatra and of the first Mahadasha.
    pub lord: Graha,
    /// Full Mahadasha length of the lord.
    pub lord_years: f64,
    /// Fraction of the nakshatra already traversed, [0, 1).
    pub elapsed_fraction: f64,
    pub elapsed_years: f64,
    /// Never negative.
    pub remaining_years: f64,
}

/// Compute the Vimshottari birth balance.
pub fn vimshottari_birth_balance(moon_sidereal_lon: f64) -> Result<BirthBalance, VedicError> {
    if !moon_sidereal_lon.is_finite() {
        return Err(VedicError::InvalidInput("moon longitude is not finite"));
    }
    let lon = normalize_360(moon_sidereal_lon);
    let nak_idx = nakshatra_index(lon);
    let lord = nakshatra_lord(nak_idx)?;
    let lord_years = dasha_years(lord);

    let position_in_nak =
        (lon - nak_idx as f64 * NAKSHATRA_SPAN_27).clamp(0.0, NAKSHATRA_SPAN_27);
    let elapsed_fraction = position_in_nak / NAKSHATRA_SPAN_27;
    let elapsed_years = lord_years * elapsed_fraction;
    let remaining_years = (lord_years * (1.0 - elapsed_fraction)).max(0.0);

    Ok(BirthBalance {
        nakshatra_index: nak_idx,
        lord,
        lord_years,
        elapsed_fraction,
        elapsed_years,
        remaining_years,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balance_at_start_of_nakshatra() {
        let b = vimshottari_birth_balance(0.0).unwrap();
        assert_eq!(b.nakshatra_index, 0);
        assert_eq!(b.lord, Graha::Ketu);
        assert!((b.remaining_years - 7.0).abs() < 1e-12);
        assert!(b.elapsed_years.abs() < 1e-12);
    }

    #[test]
    fn balance_at_midpoint_of_bharani() {
        let b = vimshottari_birth_balance(20.0).unwrap();
        assert_eq!(b.nakshatra_index, 1);
        assert_eq!(b.lord, Graha::Shukra);
        assert!((b.elapsed_fraction - 0.5).abs() < 1e-12);
        assert!((b.remaining_years - 10.0).abs() < 1e-10);
        assert!((b.elapsed_years + b.remaining_years - 20.0).abs() < 1e-10);
    }

    #[test]
    fn balance_near_end_is_small() {
        let b = vimshottari_birth_balance(NAKSHATRA_SPAN_27 - 0.001).unwrap();
        assert_eq!(b.lord, Graha::Ketu);
        assert!(b.remaining_years < 0.001);
        assert!(b.remaining_years >= 0.0);
    }

    #[test]
    fn rohini_start_has_full_balance() {
        let b = vimshottari_birth_balance(40.0).unwrap();
        assert_eq!(b.nakshatra_index, 3);
        assert_eq!(b.lord, Graha::Chandra);
        assert!((b.remaining_years - 10.0).abs() < 1e-9);
    }

    #[test]
    fn tiny_negative_moon_is_start_of_ashwini() {
        let b = vimshottari_birth_balance(-1e-18).unwrap();
        assert_eq!(b.lord, Graha::Ketu);
        assert_eq!(b.elapsed_fraction, 0.0);
        assert!((b.remaining_years - 7.0).abs() < 1e-12);
    }

    #[test]
    fn rejects_non_finite() {
        assert!(vimshottari_birth_balance(f64::NAN).is_err());
        assert!(vimshottari_birth_balance(f64::INFINITY).is_err());
    }
}
