//! Kundali assembly: ephemeris input, the result model and its report form.

pub mod ephemeris;
pub mod error;
pub mod kundali;
pub mod report;

pub use ephemeris::{EphemerisProvider, EphemerisSnapshot, GeoLocation, StaticEphemeris, ZodiacFrame};
pub use error::ChartError;
pub use kundali::{BirthData, KundaliResult, compute_kundali, kundali_from_snapshot};
pub use report::{
    DashaReport, KundaliReport, LagnaReport, NavamsaReport, PanchangaReport, PlanetReport,
    ReportOptions,
};
