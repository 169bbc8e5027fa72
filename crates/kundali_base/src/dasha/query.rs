//! Lookups of the periods active at a given instant.

use super::types::{DashaPeriod, DashaSnapshot, Mahadasha};
use super::vimshottari::vimshottari;

/// Index of the period containing `jd` in a sorted, contiguous slice.
pub fn find_active_period(periods: &[DashaPeriod], jd: f64) -> Option<usize> {
    let idx = periods.partition_point(|p| p.end_jd <= jd);
    periods.get(idx).filter(|p| p.contains(jd)).map(|_| idx)
}

/// Active Mahadasha and Antardasha at `query_jd`, if it falls inside the tree.
pub fn snapshot_at(dashas: &[Mahadasha], query_jd: f64) -> Option<DashaSnapshot> {
    let idx = dashas.partition_point(|m| m.period.end_jd <= query_jd);
    let maha = dashas.get(idx).filter(|m| m.period.contains(query_jd))?;
    let antardasha = find_active_period(&maha.antardashas, query_jd).map(|i| maha.antardashas[i]);
    Some(DashaSnapshot {
        query_jd,
        mahadasha: maha.period,
        antardasha,
    })
}

/// Build the tree from birth inputs and query it in one step.
pub fn vimshottari_snapshot(
    birth_jd: f64,
    moon_sidereal_lon: f64,
    query_jd: f64,
) -> Option<DashaSnapshot> {
    snapshot_at(&vimshottari(birth_jd, moon_sidereal_lon), query_jd)
}
