//! Vedic planet (graha) enum.
//!
//! The 9 grahas are the bodies placed in a kundali: the seven classical
//! planets plus the two lunar nodes. Serialized with their English names,
//! which are the stable codes used at the report boundary.

use serde::{Deserialize, Serialize};

/// Bodies placed in a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Graha {
    #[serde(rename = "Sun")]
    Surya,
    #[serde(rename = "Moon")]
    Chandra,
    #[serde(rename = "Mars")]
    Mangal,
    #[serde(rename = "Mercury")]
    Buddh,
    #[serde(rename = "Jupiter")]
    Guru,
    #[serde(rename = "Venus")]
    Shukra,
    #[serde(rename = "Saturn")]
    Shani,
    Rahu,
    Ketu,
}

/// Weekday order followed by the nodes.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

const SANSKRIT_NAMES: [&str; 9] = [
    "Surya", "Chandra", "Mangal", "Buddh", "Guru", "Shukra", "Shani", "Rahu", "Ketu",
];

const ENGLISH_NAMES: [&str; 9] = [
    "Sun", "Moon", "Mars", "Mercury", "Jupiter", "Venus", "Saturn", "Rahu", "Ketu",
];

impl Graha {
    pub const fn name(self) -> &'static str {
        SANSKRIT_NAMES[self as usize]
    }

    /// Matches the serialized form.
    pub const fn english_name(self) -> &'static str {
        ENGLISH_NAMES[self as usize]
    }

    /// Position in [`ALL_GRAHAS`].
    pub const fn index(self) -> u8 {
        self as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialized_form_is_english() {
        for g in ALL_GRAHAS {
            let json = serde_json::to_string(&g).unwrap();
            assert_eq!(json, format!("\"{}\"", g.english_name()));
            assert_eq!(ALL_GRAHAS[usize::from(g.index())], g);
        }
    }
}
