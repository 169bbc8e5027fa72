//! Birth syllable (akshar) keyed by the Moon's nakshatra pada.

use serde::{Deserialize, Serialize};

use crate::error::VedicError;

/// Script used to render a birth syllable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyllableScript {
    #[default]
    Latin,
    Devanagari,
}

/// Transliterated syllables, `[nakshatra][pada - 1]`.
pub const SYLLABLES_LATIN: [[&str; 4]; 27] = [
    ["Chu", "Che", "Cho", "La"],
    ["Li", "Lu", "Le", "Lo"],
    ["A", "I", "U", "E"],
    ["O", "Va", "Vi", "Vu"],
    ["Ve", "Vo", "Ka", "Ki"],
    ["Ku", "Gha", "Nga", "Chha"],
    ["Ke", "Ko", "Ha", "Hi"],
    ["Hu", "He", "Ho", "Da"],
    ["Di", "Du", "De", "Do"],
    ["Ma", "Mi", "Mu", "Me"],
    ["Mo", "Ta", "Ti", "Tu"],
    ["Te", "To", "Pa", "Pi"],
    ["Pu", "Sha", "Na", "Tha"],
    ["Pe", "Po", "Ra", "Ri"],
    ["Ru", "Re", "Ro", "Ta"],
    ["Ti", "Tu", "Te", "To"],
    ["Na", "Ni", "Nu", "Ne"],
    ["No", "Ya", "Yi", "Yu"],
    ["Ye", "Yo", "Bha", "Bhi"],
    ["Bhu", "Dha", "Pha", "Dha"],
    ["Bhe", "Bho", "Ja", "Ji"],
    ["Khi", "Khu", "Khe", "Kho"],
    ["Ga", "Gi", "Gu", "Ge"],
    ["Go", "Sa", "Si", "Su"],
    ["Se", "So", "Da", "Di"],
    ["Du", "Tha", "Jha", "Na"],
    ["De", "Do", "Cha", "Chi"],
];

/// Devanagari syllables, same layout as [`SYLLABLES_LATIN`].
pub const SYLLABLES_DEVANAGARI: [[&str; 4]; 27] = [
    ["चु", "चे", "चो", "ला"],
    ["ली", "लू", "ले", "लो"],
    ["अ", "ई", "उ", "ए"],
    ["ओ", "वा", "वी", "वू"],
    ["वे", "वो", "का", "की"],
    ["कु", "घ", "ङ", "छ"],
    ["के", "को", "हा", "ही"],
    ["हु", "हे", "हो", "डा"],
    ["डी", "डू", "डे", "डो"],
    ["मा", "मी", "मू", "मे"],
    ["मो", "टा", "टी", "टू"],
    ["टे", "टो", "पा", "पी"],
    ["पू", "ष", "ण", "ठ"],
    ["पे", "पो", "रा", "री"],
    ["रू", "रे", "रो", "ता"],
    ["ती", "तू", "ते", "तो"],
    ["ना", "नी", "नू", "ने"],
    ["नो", "या", "यी", "यू"],
    ["ये", "यो", "भा", "भी"],
    ["भू", "ध", "फ", "ढ"],
    ["भे", "भो", "जा", "जी"],
    ["खी", "खू", "खे", "खो"],
    ["गा", "गी", "गू", "गे"],
    ["गो", "सा", "सी", "सू"],
    ["से", "सो", "दा", "दी"],
    ["दू", "थ", "झ", "ञ"],
    ["दे", "दो", "चा", "ची"],
];

/// A validated (nakshatra, pada) key into the syllable tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BirthSyllable {
    nakshatra_index: u8,
    pada: u8,
}

impl BirthSyllable {
    /// `pada` is 1-based.
    pub fn new(nakshatra_index: u8, pada: u8) -> Result<Self, VedicError> {
        if nakshatra_index >= 27 {
            return Err(VedicError::Lookup {
                table: "birth syllable",
                index: nakshatra_index as usize,
            });
        }
        if !(1..=4).contains(&pada) {
            return Err(VedicError::Lookup {
                table: "birth syllable pada",
                index: pada as usize,
            });
        }
        Ok(Self {
            nakshatra_index,
            pada,
        })
    }

    pub fn nakshatra_index(&self) -> u8 {
        self.nakshatra_index
    }

    pub fn pada(&self) -> u8 {
        self.pada
    }

    pub fn text(&self, script: SyllableScript) -> &'static str {
        let table = match script {
            SyllableScript::Latin => &SYLLABLES_LATIN,
            SyllableScript::Devanagari => &SYLLABLES_DEVANAGARI,
        };
        table[self.nakshatra_index as usize][(self.pada - 1) as usize]
    }
}
