//! Yoga from the sum of Sun and Moon longitudes.

use crate::error::VedicError;
use crate::nakshatra::NAKSHATRA_SPAN_27;
use crate::util::{floor_index, normalize_360};

/// The 27 yogas in order.
pub const YOGA_NAMES: [&str; 27] = [
    "Vishkambha",
    "Priti",
    "Ayushman",
    "Saubhagya",
    "Shobhana",
    "Atiganda",
    "Sukarman",
    "Dhriti",
    "Shula",
    "Ganda",
    "Vriddhi",
    "Dhruva",
    "Vyaghata",
    "Harshana",
    "Vajra",
    "Siddhi",
    "Vyatipata",
    "Variyana",
    "Parigha",
    "Shiva",
    "Siddha",
    "Sadhya",
    "Shubha",
    "Shukla",
    "Brahma",
    "Indra",
    "Vaidhriti",
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YogaInfo {
    /// 0-26.
    pub yoga_index: u8,
    pub degrees_in_yoga: f64,
}

/// Yoga from `sun + moon` in degrees (reduced mod 360 first).
pub fn yoga_from_sum(sum_deg: f64) -> YogaInfo {
    let s = normalize_360(sum_deg);
    let yoga_index = floor_index(s, NAKSHATRA_SPAN_27, 26);
    YogaInfo {
        yoga_index,
        degrees_in_yoga: s - yoga_index as f64 * NAKSHATRA_SPAN_27,
    }
}

pub fn yoga_name(yoga_index: u8) -> Result<&'static str, VedicError> {
    YOGA_NAMES
        .get(yoga_index as usize)
        .copied()
        .ok_or(VedicError::Lookup {
            table: "yoga",
            index: yoga_index as usize,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_sum_is_vishkambha() {
        let y = yoga_from_sum(0.0);
        assert_eq!(y.yoga_index, 0);
        assert_eq!(yoga_name(0), Ok("Vishkambha"));
    }

    #[test]
    fn sum_wraps_past_360() {
        // 380 -> 20 -> index 1
        assert_eq!(yoga_from_sum(380.0).yoga_index, 1);
        assert_eq!(yoga_from_sum(359.99).yoga_index, 26);
    }

    #[test]
    fn name_lookup_bounds() {
        assert!(yoga_name(27).is_err());
        assert_eq!(yoga_name(26), Ok("Vaidhriti"));
    }
}
