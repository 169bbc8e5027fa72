//! Lunar node axis helpers.
//!
//! Only the ascending node (Rahu) is taken from the ephemeris. Ketu is
//! always exactly opposite.

use crate::util::normalize_360;

/// Ketu longitude from Rahu longitude: `(rahu + 180) mod 360`.
pub fn ketu_from_rahu(rahu_deg: f64) -> f64 {
    normalize_360(rahu_deg + 180.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ketu_opposite() {
        assert!((ketu_from_rahu(10.0) - 190.0).abs() < 1e-12);
        assert!((ketu_from_rahu(270.0) - 90.0).abs() < 1e-12);
    }

    #[test]
    fn ketu_of_node_near_180_stays_below_360() {
        let k = ketu_from_rahu(180.0 - 1e-15);
        assert!((0.0..360.0).contains(&k));
    }
}
