//! Vimshottari dasha (planetary period) calculations.
//!
//! Produces a chronologically ordered list of Mahadashas, each with its
//! Antardashas, covering the 120-year cycle from the birth instant.

pub mod balance;
pub mod query;
pub mod subperiod;
pub mod types;
pub mod vimshottari;
pub mod vimshottari_data;

pub use balance::{BirthBalance, vimshottari_birth_balance};
pub use query::{find_active_period, snapshot_at, vimshottari_snapshot};
pub use subperiod::{
    PARTITION_TOLERANCE_YEARS, antardashas, clip_to_window, partial_antardashas,
    snap_last_child_end, verify_partition,
};
pub use types::{DAYS_PER_YEAR, DashaLevel, DashaPeriod, DashaSnapshot, Mahadasha};
pub use vimshottari::{try_vimshottari, vimshottari};
pub use vimshottari_data::{
    VIMSHOTTARI_GRAHAS, VIMSHOTTARI_NAKSHATRA_LORDS, VIMSHOTTARI_TOTAL_YEARS, VIMSHOTTARI_YEARS,
    dasha_years, nakshatra_lord, sequence_from, sequence_position,
};
