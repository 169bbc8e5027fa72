//! Tithi (lunar day) from Moon-Sun elongation.
//!
//! One tithi is 12 degrees of elongation, giving 30 per synodic month:
//! indices 0-14 fall in the waxing fortnight, 15-29 in the waning one.

use serde::{Deserialize, Serialize};

use crate::error::VedicError;
use crate::util::{floor_index, normalize_360};

/// Elongation covered by one tithi.
pub const TITHI_SEGMENT_DEG: f64 = 12.0;

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Paksha {
    /// Waxing.
    Shukla,
    /// Waning.
    Krishna,
}

impl Paksha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }
}

/// Names of the 30 tithis, indexed by the full 0-29 tithi index.
pub const TITHI_NAMES: [&str; 30] = [
    "Pratipada",
    "Dwitiya",
    "Tritiya",
    "Chaturthi",
    "Panchami",
    "Shashthi",
    "Saptami",
    "Ashtami",
    "Navami",
    "Dashami",
    "Ekadashi",
    "Dwadashi",
    "Trayodashi",
    "Chaturdashi",
    "Purnima",
    "Pratipada",
    "Dwitiya",
    "Tritiya",
    "Chaturthi",
    "Panchami",
    "Shashthi",
    "Saptami",
    "Ashtami",
    "Navami",
    "Dashami",
    "Ekadashi",
    "Dwadashi",
    "Trayodashi",
    "Chaturdashi",
    "Amavasya",
];

/// Tithi derived from one elongation value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TithiInfo {
    /// Full index 0-29.
    pub tithi_index: u8,
    pub paksha: Paksha,
    /// Lunar day within the fortnight, 0-14.
    pub tithi_in_paksha: u8,
    /// Degrees already elapsed within this tithi.
    pub degrees_in_tithi: f64,
}

/// Tithi from Moon-Sun elongation in degrees (any real, reduced mod 360).
pub fn tithi_from_elongation(elongation_deg: f64) -> TithiInfo {
    let e = normalize_360(elongation_deg);
    let tithi_index = floor_index(e, TITHI_SEGMENT_DEG, 29);
    let paksha = if tithi_index >= 15 {
        Paksha::Krishna
    } else {
        Paksha::Shukla
    };
    TithiInfo {
        tithi_index,
        paksha,
        tithi_in_paksha: tithi_index % 15,
        degrees_in_tithi: e - tithi_index as f64 * TITHI_SEGMENT_DEG,
    }
}

/// Name of a tithi by its full 0-29 index.
pub fn tithi_name(tithi_index: u8) -> Result<&'static str, VedicError> {
    TITHI_NAMES
        .get(tithi_index as usize)
        .copied()
        .ok_or(VedicError::Lookup {
            table: "tithi",
            index: tithi_index as usize,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifteen_degrees_is_dwitiya_shukla() {
        let t = tithi_from_elongation(15.0);
        assert_eq!(t.tithi_index, 1);
        assert_eq!(t.paksha, Paksha::Shukla);
        assert_eq!(t.tithi_in_paksha, 1);
        assert!((t.degrees_in_tithi - 3.0).abs() < 1e-12);
    }

    #[test]
    fn waning_starts_at_180() {
        let t = tithi_from_elongation(180.0);
        assert_eq!(t.tithi_index, 15);
        assert_eq!(t.paksha, Paksha::Krishna);
        assert_eq!(t.tithi_in_paksha, 0);
    }

    #[test]
    fn negative_elongation_wraps() {
        let t = tithi_from_elongation(-1.0);
        assert_eq!(t.tithi_index, 29);
        assert_eq!(tithi_name(t.tithi_index), Ok("Amavasya"));
    }

    #[test]
    fn tithi_name_rejects_out_of_range() {
        assert!(tithi_name(30).is_err());
        assert_eq!(tithi_name(14), Ok("Purnima"));
    }
}
