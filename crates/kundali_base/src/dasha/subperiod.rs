//! Antardasha generation, clipping and partition checks.
//!
//! A full Mahadasha of length D is split among the nine grahas in sequence
//! order from its own lord, each receiving `D * years / 120`.

use crate::error::VedicError;

use super::types::{DAYS_PER_YEAR, DashaLevel, DashaPeriod};
use super::vimshottari_data::{VIMSHOTTARI_TOTAL_YEARS, sequence_from};

/// Tolerance on partition totals, in years.
pub const PARTITION_TOLERANCE_YEARS: f64 = 1e-6;

/// Snap the last child's end_jd to parent's end_jd to absorb floating-point drift.
pub fn snap_last_child_end(children: &mut [DashaPeriod], parent_end_jd: f64) {
    if let Some(last) = children.last_mut() {
        last.end_jd = parent_end_jd;
    }
}

/// Generate the nine Antardashas of a full Mahadasha, laid end to end from
/// the parent's start. Non-positive durations are skipped.
pub fn antardashas(parent: &DashaPeriod) -> Vec<DashaPeriod> {
    let parent_days = parent.duration_days();
    let mut children = Vec::with_capacity(9);
    let mut cursor = parent.start_jd;

    for (graha, years) in sequence_from(parent.graha) {
        let duration = parent_days * years / VIMSHOTTARI_TOTAL_YEARS;
        if duration <= 0.0 {
            continue;
        }
        let end = cursor + duration;
        children.push(DashaPeriod {
            graha,
            start_jd: cursor,
            end_jd: end,
            level: DashaLevel::Antardasha,
            order: children.len() as u16 + 1,
        });
        cursor = end;
    }

    snap_last_child_end(&mut children, parent.end_jd);
    children
}

/// Clip periods to `[start_jd, end_jd]`, dropping those with no positive
/// overlap and renumbering the survivors.
pub fn clip_to_window(periods: &[DashaPeriod], start_jd: f64, end_jd: f64) -> Vec<DashaPeriod> {
    let mut clipped: Vec<DashaPeriod> = periods
        .iter()
        .filter_map(|p| {
            let s = p.start_jd.max(start_jd);
            let e = p.end_jd.min(end_jd);
            (e > s).then_some(DashaPeriod {
                start_jd: s,
                end_jd: e,
                ..*p
            })
        })
        .collect();
    for (i, p) in clipped.iter_mut().enumerate() {
        p.order = i as u16 + 1;
    }
    snap_last_child_end(&mut clipped, end_jd);
    clipped
}

/// Check that `children` tile `[start_jd, end_jd]` with no gaps and that
/// their total matches `expected_years`.
pub fn verify_partition(
    children: &[DashaPeriod],
    start_jd: f64,
    end_jd: f64,
    expected_years: f64,
) -> Result<(), VedicError> {
    let actual_years: f64 = children.iter().map(DashaPeriod::duration_years).sum();
    let contiguous = children.windows(2).all(|w| w[0].end_jd == w[1].start_jd);
    let anchored = match (children.first(), children.last()) {
        (Some(first), Some(last)) => first.start_jd == start_jd && last.end_jd == end_jd,
        _ => expected_years <= PARTITION_TOLERANCE_YEARS,
    };
    if !contiguous || !anchored || (actual_years - expected_years).abs() > PARTITION_TOLERANCE_YEARS
    {
        return Err(VedicError::PartitionMismatch {
            expected_years,
            actual_years,
        });
    }
    Ok(())
}

/// Sub-periods of a Mahadasha whose full `full_years` span began
/// `elapsed_years` before `parent.start_jd`, clipped to `parent`.
pub fn partial_antardashas(
    parent: &DashaPeriod,
    full_years: f64,
    elapsed_years: f64,
) -> Vec<DashaPeriod> {
    let full_start = parent.start_jd - elapsed_years * DAYS_PER_YEAR;
    let hypothetical = DashaPeriod {
        start_jd: full_start,
        end_jd: full_start + full_years * DAYS_PER_YEAR,
        ..*parent
    };
    clip_to_window(&antardashas(&hypothetical), parent.start_jd, parent.end_jd)
}
