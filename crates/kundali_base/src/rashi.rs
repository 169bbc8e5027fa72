//! Zodiac signs of 30 degrees and the degrees-minutes-seconds form used
//! to express a position inside one.

use serde::{Deserialize, Serialize};

use crate::util::{floor_index, normalize_360};

/// Span of one rashi in degrees.
pub const RASHI_SPAN: f64 = 30.0;

ordered_enum! {
    /// The 12 rashis (zodiac signs) starting from Mesha (Aries).
    pub enum Rashi, all: ALL_RASHIS {
        Mesha => "Mesha",
        Vrishabha => "Vrishabha",
        Mithuna => "Mithuna",
        Karka => "Karka",
        Simha => "Simha",
        Kanya => "Kanya",
        Tula => "Tula",
        Vrischika => "Vrischika",
        Dhanu => "Dhanu",
        Makara => "Makara",
        Kumbha => "Kumbha",
        Meena => "Meena",
    }
}

const WESTERN_NAMES: [&str; 12] = [
    "Aries", "Taurus", "Gemini", "Cancer", "Leo", "Virgo", "Libra", "Scorpio", "Sagittarius",
    "Capricorn", "Aquarius", "Pisces",
];

/// Modality of a sign, which fixes where its navamsa sequence begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignType {
    /// Movable: Mesha, Karka, Tula, Makara.
    Chara,
    /// Fixed: Vrishabha, Simha, Vrischika, Kumbha.
    Sthira,
    /// Dual: Mithuna, Kanya, Dhanu, Meena.
    Dvisvabhava,
}

/// Modality from a 0-based rashi index.
pub fn sign_type(rashi_index: u8) -> SignType {
    const CYCLE: [SignType; 3] = [SignType::Chara, SignType::Sthira, SignType::Dvisvabhava];
    CYCLE[usize::from(rashi_index % 3)]
}

impl Rashi {
    /// Western (English) name.
    pub const fn western_name(self) -> &'static str {
        WESTERN_NAMES[self as usize]
    }

    pub fn sign_type(self) -> SignType {
        sign_type(self.index())
    }

    pub const fn all() -> &'static [Rashi; 12] {
        &ALL_RASHIS
    }
}

/// An angle split into degrees, arc-minutes and arc-seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    pub degrees: u16,
    /// 0-59.
    pub minutes: u8,
    /// [0, 60), fractional.
    pub seconds: f64,
}

impl std::fmt::Display for Dms {
    /// Seconds are shown to hundredths; a value that rounds to 60 carries
    /// into the minutes, and 60 minutes into the degrees.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut centiseconds = (self.seconds * 100.0).round() as u32;
        let mut minutes = u32::from(self.minutes);
        let mut degrees = u32::from(self.degrees);
        if centiseconds >= 6000 {
            centiseconds -= 6000;
            minutes += 1;
        }
        if minutes >= 60 {
            minutes -= 60;
            degrees += 1;
        }
        write!(
            f,
            "{degrees}°{minutes:02}'{:02}.{:02}\"",
            centiseconds / 100,
            centiseconds % 100
        )
    }
}

/// Sign placement of one longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RashiInfo {
    pub rashi: Rashi,
    /// 0 = Mesha.
    pub rashi_index: u8,
    /// `degrees_in_rashi` as DMS.
    pub dms: Dms,
    /// [0, 30].
    pub degrees_in_rashi: f64,
}

/// Split an angle into DMS. The sign is dropped and magnitudes of a full
/// turn or more are reduced modulo 360.
pub fn deg_to_dms(deg: f64) -> Dms {
    let magnitude = match deg.abs() {
        m if m >= 360.0 => m % 360.0,
        m => m,
    };
    let degrees = magnitude.trunc();
    let arc_minutes = (magnitude - degrees) * 60.0;
    let minutes = arc_minutes.trunc();
    Dms {
        degrees: degrees as u16,
        minutes: minutes as u8,
        seconds: (arc_minutes - minutes) * 60.0,
    }
}

/// 0-based rashi index of a longitude, with the 360.0 edge clamped to 11.
pub fn rashi_index(sidereal_lon_deg: f64) -> u8 {
    floor_index(normalize_360(sidereal_lon_deg), RASHI_SPAN, 11)
}

/// Sign of a sidereal longitude; sign `k` covers `[30k, 30k + 30)`.
pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> RashiInfo {
    let index = rashi_index(sidereal_lon_deg);
    let degrees_in_rashi = normalize_360(sidereal_lon_deg) - index as f64 * RASHI_SPAN;
    RashiInfo {
        rashi: ALL_RASHIS[index as usize],
        rashi_index: index,
        dms: deg_to_dms(degrees_in_rashi),
        degrees_in_rashi,
    }
}
