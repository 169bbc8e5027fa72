//! Serializable boundary form of a [`KundaliResult`].
//!
//! Keys are stable and values are language-neutral codes; display names
//! and translations belong to the consumer.

use kundali_base::dasha::{DashaPeriod, Mahadasha};
use kundali_base::{
    Gana, Graha, Karana, Nadi, Nakshatra, Paksha, PanchangaRecord, PlanetPosition, Rashi,
    SyllableScript, Varna, Yoni, ZodiacPosition, tithi_name, yoga_name,
};
use kundali_time::{format_iso, jd_to_iso};
use serde::Serialize;

use crate::error::ChartError;
use crate::kundali::KundaliResult;

/// Rendering choices for the report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportOptions {
    pub script: SyllableScript,
    /// Decimal places kept for longitudes.
    pub decimals: u32,
    pub include_antardashas: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            script: SyllableScript::Latin,
            decimals: 4,
            include_antardashas: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KundaliReport {
    pub birth_utc: String,
    pub lagna: LagnaReport,
    pub navamsa_lagna: NavamsaReport,
    pub panchanga: Option<PanchangaReport>,
    pub planets: Vec<PlanetReport>,
    pub dashas: Vec<DashaReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LagnaReport {
    pub longitude_full: f64,
    pub longitude_within_sign: f64,
    pub sign_index: u8,
    pub sign: Rashi,
    pub nakshatra_index: u8,
    pub nakshatra: Nakshatra,
    pub pada: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavamsaReport {
    pub sign_index: u8,
    pub sign: Rashi,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanetReport {
    pub planet: Graha,
    pub longitude_full: f64,
    pub longitude_within_sign: f64,
    pub sign_index: u8,
    pub nakshatra_index: u8,
    pub pada: u8,
    pub navamsa_sign_index: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanchangaReport {
    pub tithi: &'static str,
    pub tithi_index: u8,
    pub tithi_index_in_paksha: u8,
    pub paksha: Paksha,
    pub yoga: &'static str,
    pub yoga_index: u8,
    pub karana: Karana,
    pub karana_index_in_cycle: u8,
    pub gana: Gana,
    pub yoni: Yoni,
    pub nadi: Nadi,
    pub varna: Varna,
    pub akshar: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashaReport {
    pub planet: Graha,
    pub start: String,
    pub end: String,
    /// Always present on a Mahadasha, empty when sub-periods are turned
    /// off; absent on the sub-periods themselves.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub antardashas: Option<Vec<DashaReport>>,
}

fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}

impl LagnaReport {
    fn new(p: &ZodiacPosition, decimals: u32) -> Self {
        Self {
            longitude_full: round_to(p.longitude, decimals),
            longitude_within_sign: round_to(p.longitude_in_rashi, decimals),
            sign_index: p.rashi_index,
            sign: p.rashi,
            nakshatra_index: p.nakshatra_index,
            nakshatra: p.nakshatra,
            pada: p.pada,
        }
    }
}

impl PlanetReport {
    fn new(p: &PlanetPosition, decimals: u32) -> Self {
        Self {
            planet: p.graha,
            longitude_full: round_to(p.position.longitude, decimals),
            longitude_within_sign: round_to(p.position.longitude_in_rashi, decimals),
            sign_index: p.position.rashi_index,
            nakshatra_index: p.position.nakshatra_index,
            pada: p.position.pada,
            navamsa_sign_index: p.position.navamsa_index,
        }
    }
}

impl PanchangaReport {
    pub fn from_record(p: &PanchangaRecord, script: SyllableScript) -> Result<Self, ChartError> {
        Ok(Self {
            tithi: tithi_name(p.tithi_index)?,
            tithi_index: p.tithi_index,
            tithi_index_in_paksha: p.tithi_in_paksha,
            paksha: p.paksha,
            yoga: yoga_name(p.yoga_index)?,
            yoga_index: p.yoga_index,
            karana: p.karana,
            karana_index_in_cycle: p.karana_index,
            gana: p.gana,
            yoni: p.yoni,
            nadi: p.nadi,
            varna: p.varna,
            akshar: p.akshar.text(script),
        })
    }
}

impl DashaReport {
    pub fn from_period(p: &DashaPeriod) -> Result<Self, ChartError> {
        Ok(Self {
            planet: p.graha,
            start: jd_to_iso(p.start_jd)?,
            end: jd_to_iso(p.end_jd)?,
            antardashas: None,
        })
    }

    pub fn from_mahadasha(m: &Mahadasha, include_antardashas: bool) -> Result<Self, ChartError> {
        let mut report = Self::from_period(&m.period)?;
        let children = if include_antardashas {
            m.antardashas
                .iter()
                .map(Self::from_period)
                .collect::<Result<_, _>>()?
        } else {
            Vec::new()
        };
        report.antardashas = Some(children);
        Ok(report)
    }
}

impl KundaliReport {
    pub fn from_result(result: &KundaliResult, options: &ReportOptions) -> Result<Self, ChartError> {
        let panchanga = result
            .panchanga
            .as_ref()
            .map(|p| PanchangaReport::from_record(p, options.script))
            .transpose()?;
        let dashas = result
            .dashas
            .iter()
            .map(|m| DashaReport::from_mahadasha(m, options.include_antardashas))
            .collect::<Result<_, _>>()?;

        Ok(Self {
            birth_utc: format_iso(&result.birth_utc),
            lagna: LagnaReport::new(&result.lagna, options.decimals),
            navamsa_lagna: NavamsaReport {
                sign_index: result.navamsa_lagna.index(),
                sign: result.navamsa_lagna,
            },
            panchanga,
            planets: result
                .planets
                .iter()
                .map(|p| PlanetReport::new(p, options.decimals))
                .collect(),
            dashas,
        })
    }

    pub fn to_json(&self, pretty: bool) -> Result<String, ChartError> {
        let s = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mahadasha_always_carries_antardasha_key() {
        let dashas = kundali_base::dasha::vimshottari(2_451_545.0, 20.0);
        let off = DashaReport::from_mahadasha(&dashas[0], false).unwrap();
        assert_eq!(off.antardashas, Some(Vec::new()));
        let json = serde_json::to_value(&off).unwrap();
        assert_eq!(json["antardashas"], serde_json::json!([]));

        let on = DashaReport::from_mahadasha(&dashas[0], true).unwrap();
        let children = on.antardashas.unwrap();
        assert_eq!(children.len(), 5);
        assert!(children.iter().all(|c| c.antardashas.is_none()));
    }

    #[test]
    fn rounding() {
        assert_eq!(round_to(12.345_67, 4), 12.3457);
        assert_eq!(round_to(12.345_67, 0), 12.0);
    }
}
