//! Core types for Vimshottari dasha (planetary period) calculations.
//!
//! Dashas form a two-level tree here: each Mahadasha carries its ordered
//! Antardashas. Instants are Julian Dates in UTC.

use serde::{Deserialize, Serialize};

use crate::graha::Graha;

/// Year length used to turn dasha years into days (mean Gregorian year).
pub const DAYS_PER_YEAR: f64 = 365.2425;

/// Depth of a period in the dasha tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DashaLevel {
    Mahadasha,
    Antardasha,
}

/// One node of the dasha tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashaPeriod {
    /// The graha ruling this period.
    pub graha: Graha,
    /// Half-open `[start_jd, end_jd)` in JD UTC.
    pub start_jd: f64,
    pub end_jd: f64,
    pub level: DashaLevel,
    /// Position among siblings, from 1.
    pub order: u16,
}

impl DashaPeriod {
    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }

    pub fn duration_years(&self) -> f64 {
        self.duration_days() / DAYS_PER_YEAR
    }

    /// Half-open containment: `start <= jd < end`.
    pub fn contains(&self, jd: f64) -> bool {
        self.start_jd <= jd && jd < self.end_jd
    }
}

/// A top-level period together with its sub-periods.
#[derive(Debug, Clone, PartialEq)]
pub struct Mahadasha {
    pub period: DashaPeriod,
    pub antardashas: Vec<DashaPeriod>,
}

/// Periods active at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashaSnapshot {
    pub query_jd: f64,
    pub mahadasha: DashaPeriod,
    /// Absent only if the Mahadasha has no sub-period covering the instant.
    pub antardasha: Option<DashaPeriod>,
}
