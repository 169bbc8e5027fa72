//! Error types for kundali calculations.

use thiserror::Error;

use crate::graha::Graha;

/// Errors from the pure-math kundali layer.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum VedicError {
    /// An index fell outside a fixed lookup table.
    #[error("index {index} out of range for {table} table")]
    Lookup { table: &'static str, index: usize },
    /// A longitude required for the computation was not supplied.
    #[error("missing longitude for {}", .0.english_name())]
    MissingLongitude(Graha),
    /// Input value outside the accepted domain.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    /// Clipped sub-periods do not add up to their parent.
    #[error("dasha partition mismatch: expected {expected_years} years, got {actual_years}")]
    PartitionMismatch {
        expected_years: f64,
        actual_years: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_message_names_table() {
        let e = VedicError::Lookup {
            table: "karana",
            index: 61,
        };
        assert_eq!(e.to_string(), "index 61 out of range for karana table");
    }

    #[test]
    fn missing_longitude_uses_english_name() {
        let e = VedicError::MissingLongitude(Graha::Chandra);
        assert_eq!(e.to_string(), "missing longitude for Moon");
    }
}
