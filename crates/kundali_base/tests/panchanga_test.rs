//! Integration tests for the Panchanga record.

use kundali_base::{
    Gana, Karana, Nadi, Paksha, SyllableScript, Varna, Yoni, panchanga_from_longitudes,
};

/// Moon 15 deg ahead of the Sun: second tithi of the waxing fortnight.
#[test]
fn moon_15_sun_0() {
    let p = panchanga_from_longitudes(15.0, 0.0).unwrap();
    assert_eq!(p.tithi_index, 1);
    assert_eq!(p.paksha, Paksha::Shukla);
    assert_eq!(p.tithi_in_paksha, 1);
}

/// Full attribute row for a Moon in Revati, Meena.
#[test]
fn revati_attributes() {
    let p = panchanga_from_longitudes(358.0, 100.0).unwrap();
    assert_eq!(p.moon.nakshatra_index, 26);
    assert_eq!(p.moon.rashi_index, 11);
    assert_eq!(p.moon.pada, 4);
    assert_eq!(p.gana, Gana::Deva);
    assert_eq!(p.yoni, Yoni::Gaja);
    assert_eq!(p.nadi, Nadi::Antya);
    assert_eq!(p.varna, Varna::Brahmin);
    assert_eq!(p.akshar.text(SyllableScript::Latin), "Chi");
    assert_eq!(p.akshar.text(SyllableScript::Devanagari), "ची");
}

/// Elongation of 258 deg falls in karana slot 43.
#[test]
fn karana_slot_from_elongation() {
    let p = panchanga_from_longitudes(300.0, 42.0).unwrap();
    assert_eq!(p.karana_index, 43);
    // slot 43 -> movable index (43 - 1) % 7 = 0
    assert_eq!(p.karana, Karana::Bava);
    // sum 342 -> yoga 25
    assert_eq!(p.yoga_index, 25);
}
