//! Vimshottari Mahadasha/Antardasha engine.
//!
//! The first Mahadasha runs only for the birth balance; its Antardashas
//! are those of the full period clipped to the part after birth. Later
//! Mahadashas are full length and follow the sequence until 120 years
//! are covered.

use log::{debug, warn};

use crate::error::VedicError;

use super::balance::vimshottari_birth_balance;
use super::subperiod::{antardashas, partial_antardashas, verify_partition};
use super::types::{DAYS_PER_YEAR, DashaLevel, DashaPeriod, Mahadasha};
use super::vimshottari_data::{VIMSHOTTARI_TOTAL_YEARS, sequence_from};

/// Build the full Vimshottari tree, or an error if the birth balance
/// cannot be resolved.
pub fn try_vimshottari(
    birth_jd: f64,
    moon_sidereal_lon: f64,
) -> Result<Vec<Mahadasha>, VedicError> {
    if !birth_jd.is_finite() {
        return Err(VedicError::InvalidInput("birth instant is not finite"));
    }
    let balance = vimshottari_birth_balance(moon_sidereal_lon)?;
    debug!(
        "vimshottari balance: nakshatra={} lord={} remaining={:.9}y",
        balance.nakshatra_index,
        balance.lord.english_name(),
        balance.remaining_years
    );

    let mut dashas = Vec::with_capacity(10);
    let mut cursor = birth_jd;
    let mut covered_years = 0.0;

    let period = DashaPeriod {
        graha: balance.lord,
        start_jd: birth_jd,
        end_jd: birth_jd + balance.remaining_years * DAYS_PER_YEAR,
        level: DashaLevel::Mahadasha,
        order: 1,
    };
    // A balance too small to move the JD yields no first Mahadasha.
    if period.end_jd > period.start_jd {
        let children = partial_antardashas(&period, balance.lord_years, balance.elapsed_years);
        if let Err(e) = verify_partition(
            &children,
            period.start_jd,
            period.end_jd,
            balance.remaining_years,
        ) {
            warn!("first mahadasha antardashas: {e}");
        }
        cursor = period.end_jd;
        covered_years = balance.remaining_years;
        dashas.push(Mahadasha {
            period,
            antardashas: children,
        });
    }

    // Start after the birth lord and keep cycling until the span is covered.
    let mut sequence = sequence_from(balance.lord).cycle().skip(1);
    while covered_years < VIMSHOTTARI_TOTAL_YEARS {
        let Some((graha, years)) = sequence.next() else {
            break;
        };
        let period = DashaPeriod {
            graha,
            start_jd: cursor,
            end_jd: cursor + years * DAYS_PER_YEAR,
            level: DashaLevel::Mahadasha,
            order: dashas.len() as u16 + 1,
        };
        let children = antardashas(&period);
        cursor = period.end_jd;
        covered_years += years;
        dashas.push(Mahadasha {
            period,
            antardashas: children,
        });
    }

    Ok(dashas)
}

/// Build the Vimshottari tree. Returns an empty list when the Moon's
/// nakshatra cannot be resolved to a ruler.
pub fn vimshottari(birth_jd: f64, moon_sidereal_lon: f64) -> Vec<Mahadasha> {
    try_vimshottari(birth_jd, moon_sidereal_lon).unwrap_or_else(|e| {
        warn!("vimshottari dasha unavailable: {e}");
        Vec::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graha::Graha;

    const BIRTH: f64 = 2_451_545.0;

    #[test]
    fn start_of_nakshatra_gives_nine_full_periods() {
        let d = vimshottari(BIRTH, 0.0);
        assert_eq!(d.len(), 9);
        assert_eq!(d[0].period.graha, Graha::Ketu);
        assert_eq!(d[0].antardashas.len(), 9);
        let total: f64 = d.iter().map(|m| m.period.duration_years()).sum();
        assert!((total - 120.0).abs() < 1e-9);
    }

    #[test]
    fn partial_start_gives_ten_periods() {
        let d = vimshottari(BIRTH, 20.0);
        assert_eq!(d.len(), 10);
        assert_eq!(d[0].period.graha, Graha::Shukra);
        assert_eq!(d[9].period.graha, Graha::Shukra);
        assert_eq!(d[1].period.graha, Graha::Surya);
    }

    #[test]
    fn top_level_is_contiguous() {
        let d = vimshottari(BIRTH, 123.456);
        for w in d.windows(2) {
            assert_eq!(w[0].period.end_jd, w[1].period.start_jd);
        }
        for (i, m) in d.iter().enumerate() {
            assert_eq!(m.period.order as usize, i + 1);
            assert!(m.period.end_jd > m.period.start_jd);
        }
    }

    #[test]
    fn moon_just_below_zero_starts_with_full_ketu() {
        for moon in [-1e-18, -1e-15] {
            let d = vimshottari(BIRTH, moon);
            assert_eq!(d.len(), 9, "moon {moon}");
            assert_eq!(d[0].period.graha, Graha::Ketu);
            assert!((d[0].period.duration_years() - 7.0).abs() < 1e-9);
            assert_eq!(d[0].antardashas.len(), 9);
        }
    }

    #[test]
    fn vanishing_balance_is_not_emitted() {
        // Remaining ~7e-14 years, below JD resolution near 2.45e6
        let moon = 360.0 - f64::EPSILON * 256.0;
        let d = vimshottari(BIRTH, moon);
        assert_eq!(d[0].period.graha, Graha::Ketu);
        assert_eq!(d[0].period.start_jd, BIRTH);
        assert_eq!(d[0].period.order, 1);
        for m in &d {
            assert!(m.period.end_jd > m.period.start_jd);
            assert!(!m.antardashas.is_empty());
        }
    }

    #[test]
    fn non_finite_moon_is_empty() {
        assert!(vimshottari(BIRTH, f64::NAN).is_empty());
        assert!(try_vimshottari(BIRTH, f64::NAN).is_err());
        assert!(try_vimshottari(f64::NAN, 10.0).is_err());
    }
}
