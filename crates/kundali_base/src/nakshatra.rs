//! Lunar mansions: 27 arcs of 13°20', each split into four padas of 3°20'.

use crate::util::{floor_index, normalize_360};

/// Span of one nakshatra: 360/27 = 13.3333... degrees.
pub const NAKSHATRA_SPAN_27: f64 = 360.0 / 27.0;

/// Quarter of a nakshatra.
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN_27 / 4.0;

ordered_enum! {
    /// The 27 nakshatras from Ashwini to Revati.
    pub enum Nakshatra, all: ALL_NAKSHATRAS_27 {
        Ashwini => "Ashwini",
        Bharani => "Bharani",
        Krittika => "Krittika",
        Rohini => "Rohini",
        Mrigashira => "Mrigashira",
        Ardra => "Ardra",
        Punarvasu => "Punarvasu",
        Pushya => "Pushya",
        Ashlesha => "Ashlesha",
        Magha => "Magha",
        PurvaPhalguni => "Purva Phalguni",
        UttaraPhalguni => "Uttara Phalguni",
        Hasta => "Hasta",
        Chitra => "Chitra",
        Swati => "Swati",
        Vishakha => "Vishakha",
        Anuradha => "Anuradha",
        Jyeshtha => "Jyeshtha",
        Mula => "Mula",
        PurvaAshadha => "Purva Ashadha",
        UttaraAshadha => "Uttara Ashadha",
        Shravana => "Shravana",
        Dhanishtha => "Dhanishtha",
        Shatabhisha => "Shatabhisha",
        PurvaBhadrapada => "Purva Bhadrapada",
        UttaraBhadrapada => "Uttara Bhadrapada",
        Revati => "Revati",
    }
}

impl Nakshatra {
    /// Longitude where the nakshatra begins.
    pub fn start_deg(self) -> f64 {
        self.index() as f64 * NAKSHATRA_SPAN_27
    }
}

/// Full nakshatra position result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NakshatraInfo {
    pub nakshatra: Nakshatra,
    /// 0 = Ashwini.
    pub nakshatra_index: u8,
    /// Pada (quarter), 1-4.
    pub pada: u8,
    /// Decimal degrees traversed within the nakshatra.
    pub degrees_in_nakshatra: f64,
    /// Decimal degrees traversed within the pada.
    pub degrees_in_pada: f64,
}

/// 0-based nakshatra index of a longitude, clamped to 26.
pub fn nakshatra_index(sidereal_lon_deg: f64) -> u8 {
    floor_index(normalize_360(sidereal_lon_deg), NAKSHATRA_SPAN_27, 26)
}

/// Determine nakshatra and pada from sidereal ecliptic longitude.
pub fn nakshatra_from_longitude(sidereal_lon_deg: f64) -> NakshatraInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let nak_idx = floor_index(lon, NAKSHATRA_SPAN_27, 26);
    let nakshatra = ALL_NAKSHATRAS_27[nak_idx as usize];
    let degrees_in_nakshatra = lon - nakshatra.start_deg();
    let pada_0 = floor_index(degrees_in_nakshatra, PADA_SPAN, 3);
    let degrees_in_pada = degrees_in_nakshatra - (pada_0 as f64) * PADA_SPAN;

    NakshatraInfo {
        nakshatra,
        nakshatra_index: nak_idx,
        pada: pada_0 + 1,
        degrees_in_nakshatra,
        degrees_in_pada,
    }
}
