//! Classification attributes keyed by the Moon's nakshatra and rashi:
//! Gana (temperament), Yoni (animal symbol), Nadi (constitution) and Varna.

use crate::error::VedicError;

use Gana::{Deva, Manushya, Rakshasa};
use Nadi::{Adya, Antya, Madhya};

ordered_enum! {
    /// Temperament.
    pub enum Gana, all: ALL_GANAS {
        Deva => "Deva",
        Manushya => "Manushya",
        Rakshasa => "Rakshasa",
    }
}

ordered_enum! {
    /// Animal symbol.
    pub enum Yoni, all: ALL_YONIS {
        Ashwa => "Ashwa",
        Gaja => "Gaja",
        Mesha => "Mesha",
        Sarpa => "Sarpa",
        Shwana => "Shwana",
        Marjara => "Marjara",
        Mushaka => "Mushaka",
        Go => "Go",
        Mahisha => "Mahisha",
        Vyaghra => "Vyaghra",
        Mriga => "Mriga",
        Vanara => "Vanara",
        Nakula => "Nakula",
        Simha => "Simha",
    }
}

ordered_enum! {
    pub enum Nadi, all: ALL_NADIS {
        Adya => "Adya",
        Madhya => "Madhya",
        Antya => "Antya",
    }
}

ordered_enum! {
    pub enum Varna, all: ALL_VARNAS {
        Brahmin => "Brahmin",
        Kshatriya => "Kshatriya",
        Vaishya => "Vaishya",
        Shudra => "Shudra",
    }
}

/// Gana, Yoni and Nadi of one nakshatra.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NakshatraAttributes {
    pub gana: Gana,
    pub yoni: Yoni,
    pub nadi: Nadi,
}

const fn attrs(gana: Gana, yoni: Yoni, nadi: Nadi) -> NakshatraAttributes {
    NakshatraAttributes { gana, yoni, nadi }
}

/// Attributes for each of the 27 nakshatras (0 = Ashwini).
pub const NAKSHATRA_ATTRIBUTES: [NakshatraAttributes; 27] = [
    attrs(Deva, Yoni::Ashwa, Adya),
    attrs(Manushya, Yoni::Gaja, Madhya),
    attrs(Rakshasa, Yoni::Mesha, Antya),
    attrs(Manushya, Yoni::Sarpa, Antya),
    attrs(Deva, Yoni::Sarpa, Madhya),
    attrs(Manushya, Yoni::Shwana, Adya),
    attrs(Deva, Yoni::Marjara, Adya),
    attrs(Deva, Yoni::Mesha, Madhya),
    attrs(Rakshasa, Yoni::Marjara, Antya),
    attrs(Rakshasa, Yoni::Mushaka, Antya),
    attrs(Manushya, Yoni::Mushaka, Madhya),
    attrs(Manushya, Yoni::Go, Adya),
    attrs(Deva, Yoni::Mahisha, Adya),
    attrs(Rakshasa, Yoni::Vyaghra, Madhya),
    attrs(Deva, Yoni::Mahisha, Antya),
    attrs(Rakshasa, Yoni::Vyaghra, Antya),
    attrs(Deva, Yoni::Mriga, Madhya),
    attrs(Rakshasa, Yoni::Mriga, Adya),
    attrs(Rakshasa, Yoni::Shwana, Adya),
    attrs(Manushya, Yoni::Vanara, Madhya),
    attrs(Manushya, Yoni::Nakula, Antya),
    attrs(Deva, Yoni::Vanara, Antya),
    attrs(Rakshasa, Yoni::Simha, Madhya),
    attrs(Rakshasa, Yoni::Ashwa, Adya),
    attrs(Manushya, Yoni::Simha, Adya),
    attrs(Manushya, Yoni::Go, Madhya),
    attrs(Deva, Yoni::Gaja, Antya),
];

/// Varna for each rashi (0 = Mesha): fire, earth, air, water signs map to
/// Kshatriya, Vaishya, Shudra, Brahmin in turn.
pub const VARNA_BY_RASHI: [Varna; 12] = [
    Varna::Kshatriya,
    Varna::Vaishya,
    Varna::Shudra,
    Varna::Brahmin,
    Varna::Kshatriya,
    Varna::Vaishya,
    Varna::Shudra,
    Varna::Brahmin,
    Varna::Kshatriya,
    Varna::Vaishya,
    Varna::Shudra,
    Varna::Brahmin,
];

pub fn nakshatra_attributes(nakshatra_index: u8) -> Result<NakshatraAttributes, VedicError> {
    NAKSHATRA_ATTRIBUTES
        .get(nakshatra_index as usize)
        .copied()
        .ok_or(VedicError::Lookup {
            table: "nakshatra attributes",
            index: nakshatra_index as usize,
        })
}

pub fn varna_for_rashi(rashi_index: u8) -> Result<Varna, VedicError> {
    VARNA_BY_RASHI
        .get(rashi_index as usize)
        .copied()
        .ok_or(VedicError::Lookup {
            table: "varna",
            index: rashi_index as usize,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gana_counts_are_balanced() {
        for g in ALL_GANAS {
            let n = NAKSHATRA_ATTRIBUTES.iter().filter(|a| a.gana == g).count();
            assert_eq!(n, 9, "{g:?}");
        }
    }

    #[test]
    fn nadi_counts_are_balanced() {
        for n in ALL_NADIS {
            let c = NAKSHATRA_ATTRIBUTES.iter().filter(|a| a.nadi == n).count();
            assert_eq!(c, 9, "{n:?}");
        }
    }

    #[test]
    fn every_yoni_is_used() {
        for y in ALL_YONIS {
            assert!(NAKSHATRA_ATTRIBUTES.iter().any(|a| a.yoni == y), "{}", y.name());
        }
    }

    #[test]
    fn known_rows() {
        let ashwini = nakshatra_attributes(0).unwrap();
        assert_eq!(ashwini, attrs(Deva, Yoni::Ashwa, Adya));
        let revati = nakshatra_attributes(26).unwrap();
        assert_eq!(revati, attrs(Deva, Yoni::Gaja, Antya));
        assert!(nakshatra_attributes(27).is_err());
    }

    #[test]
    fn varna_cycle() {
        assert_eq!(varna_for_rashi(0), Ok(Varna::Kshatriya));
        assert_eq!(varna_for_rashi(3), Ok(Varna::Brahmin));
        assert_eq!(varna_for_rashi(10), Ok(Varna::Shudra));
        assert!(varna_for_rashi(12).is_err());
    }
}
