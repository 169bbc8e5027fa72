//! Karana (half-tithi) from Moon-Sun elongation.
//!
//! A synodic month holds 60 karanas of 6 degrees. Slot 0 is Kimstughna,
//! slots 1-56 repeat the seven movable karanas eight times, and the last
//! three slots are the fixed Shakuni, Chatushpada and Naga.

use serde::{Deserialize, Serialize};

use crate::error::VedicError;
use crate::util::{floor_index, normalize_360};

/// Elongation covered by one karana.
pub const KARANA_SEGMENT_DEG: f64 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Karana {
    Kimstughna,
    Bava,
    Balava,
    Kaulava,
    Taitila,
    Garaja,
    Vanija,
    Vishti,
    Shakuni,
    Chatushpada,
    Naga,
}

/// The seven karanas that cycle through slots 1-56.
pub const MOVABLE_KARANAS: [Karana; 7] = [
    Karana::Bava,
    Karana::Balava,
    Karana::Kaulava,
    Karana::Taitila,
    Karana::Garaja,
    Karana::Vanija,
    Karana::Vishti,
];

/// Karana for each of the 60 slots of the month.
pub const KARANA_CYCLE: [Karana; 60] = build_karana_cycle();

const fn build_karana_cycle() -> [Karana; 60] {
    let mut table = [Karana::Kimstughna; 60];
    let mut i = 0;
    while i < 56 {
        table[i + 1] = MOVABLE_KARANAS[i % 7];
        i += 1;
    }
    table[57] = Karana::Shakuni;
    table[58] = Karana::Chatushpada;
    table[59] = Karana::Naga;
    table
}

impl Karana {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Kimstughna => "Kimstughna",
            Self::Bava => "Bava",
            Self::Balava => "Balava",
            Self::Kaulava => "Kaulava",
            Self::Taitila => "Taitila",
            Self::Garaja => "Garaja",
            Self::Vanija => "Vanija",
            Self::Vishti => "Vishti",
            Self::Shakuni => "Shakuni",
            Self::Chatushpada => "Chatushpada",
            Self::Naga => "Naga",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KaranaInfo {
    /// Slot in the monthly cycle, 0-59.
    pub karana_index: u8,
    pub karana: Karana,
    pub degrees_in_karana: f64,
}

/// Karana at a cycle slot.
pub fn karana_at(karana_index: u8) -> Result<Karana, VedicError> {
    KARANA_CYCLE
        .get(karana_index as usize)
        .copied()
        .ok_or(VedicError::Lookup {
            table: "karana",
            index: karana_index as usize,
        })
}

/// Karana from Moon-Sun elongation in degrees.
pub fn karana_from_elongation(elongation_deg: f64) -> KaranaInfo {
    let e = normalize_360(elongation_deg);
    let karana_index = floor_index(e, KARANA_SEGMENT_DEG, 59);
    KaranaInfo {
        karana_index,
        karana: KARANA_CYCLE[karana_index as usize],
        degrees_in_karana: e - karana_index as f64 * KARANA_SEGMENT_DEG,
    }
}
