//! Const data for the Vimshottari (120-year) dasha system.

use crate::error::VedicError;
use crate::graha::Graha;

/// Graha sequence: Ketu, Shukra, Surya, Chandra, Mangal, Rahu, Guru, Shani, Buddh.
pub const VIMSHOTTARI_GRAHAS: [Graha; 9] = [
    Graha::Ketu,
    Graha::Shukra,
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Rahu,
    Graha::Guru,
    Graha::Shani,
    Graha::Buddh,
];

/// Mahadasha lengths in years, aligned with [`VIMSHOTTARI_GRAHAS`].
pub const VIMSHOTTARI_YEARS: [f64; 9] = [7.0, 20.0, 6.0, 10.0, 7.0, 18.0, 16.0, 19.0, 17.0];

/// Length of the full cycle in years.
pub const VIMSHOTTARI_TOTAL_YEARS: f64 = 120.0;

/// Ruling graha of each nakshatra (0 = Ashwini): the nine-graha sequence
/// laid over the 27 nakshatras three times.
pub const VIMSHOTTARI_NAKSHATRA_LORDS: [Graha; 27] = nakshatra_lords();

const fn nakshatra_lords() -> [Graha; 27] {
    let mut lords = [Graha::Ketu; 27];
    let mut i = 0;
    while i < 27 {
        lords[i] = VIMSHOTTARI_GRAHAS[i % 9];
        i += 1;
    }
    lords
}

/// Position of a graha in the Vimshottari sequence.
pub fn sequence_position(graha: Graha) -> usize {
    // Every graha appears exactly once in the sequence.
    VIMSHOTTARI_GRAHAS
        .iter()
        .position(|&g| g == graha)
        .unwrap_or_default()
}

/// Mahadasha length of a graha in years.
pub fn dasha_years(graha: Graha) -> f64 {
    VIMSHOTTARI_YEARS[sequence_position(graha)]
}

/// Ruling graha of a nakshatra.
pub fn nakshatra_lord(nakshatra_index: u8) -> Result<Graha, VedicError> {
    VIMSHOTTARI_NAKSHATRA_LORDS
        .get(nakshatra_index as usize)
        .copied()
        .ok_or(VedicError::Lookup {
            table: "vimshottari nakshatra lord",
            index: nakshatra_index as usize,
        })
}

/// The nine grahas in sequence order starting from `first`.
pub fn sequence_from(first: Graha) -> impl Iterator<Item = (Graha, f64)> + Clone {
    let start = sequence_position(first);
    (0..9).map(move |i| {
        let k = (start + i) % 9;
        (VIMSHOTTARI_GRAHAS[k], VIMSHOTTARI_YEARS[k])
    })
}
