//! Pure-math core of the kundali engine.
//!
//! This crate provides:
//! - Rashi, nakshatra/pada and navamsa derivation from sidereal longitudes
//! - Panchanga (tithi, yoga, karana) and the Moon-keyed attributes
//! - Vimshottari Mahadasha/Antardasha timelines
//!
//! Everything is a pure function over its inputs; lookup tables are
//! compile-time constants.

#[macro_use]
mod macros;

pub mod dasha;
pub mod error;
pub mod graha;
pub mod lunar_nodes;
pub mod nakshatra;
pub mod navamsa;
pub mod panchanga;
pub mod position;
pub mod rashi;
pub mod util;

pub use error::VedicError;
pub use graha::{ALL_GRAHAS, Graha};
pub use lunar_nodes::ketu_from_rahu;
pub use nakshatra::{
    ALL_NAKSHATRAS_27, NAKSHATRA_SPAN_27, Nakshatra, NakshatraInfo, PADA_SPAN,
    nakshatra_from_longitude, nakshatra_index,
};
pub use navamsa::{NAVAMSA_SPAN, navamsa_rashi, navamsa_rashi_index, navamsa_start};
pub use panchanga::akshar::{BirthSyllable, SyllableScript};
pub use panchanga::attributes::{Gana, Nadi, Varna, Yoni};
pub use panchanga::karana::{KARANA_CYCLE, Karana, KaranaInfo, karana_from_elongation};
pub use panchanga::tithi::{Paksha, TithiInfo, tithi_from_elongation, tithi_name};
pub use panchanga::yoga::{YogaInfo, yoga_from_sum, yoga_name};
pub use panchanga::{MoonIndices, PanchangaRecord, compute_panchanga, panchanga_from_longitudes};
pub use position::{PlanetPosition, ZodiacPosition};
pub use rashi::{
    ALL_RASHIS, Dms, RASHI_SPAN, Rashi, RashiInfo, SignType, deg_to_dms,
    rashi_from_longitude, rashi_index, sign_type,
};
pub use util::normalize_360;
