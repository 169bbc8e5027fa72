//! Angle normalization and index flooring shared by the derivations.

/// Normalize an angle to [0, 360) degrees.
///
/// A tiny negative input rounds to exactly 360.0 after the shift; that
/// point is the same as 0.0 and is returned as such.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    let shifted = if r < 0.0 { r + 360.0 } else { r };
    if shifted >= 360.0 { 0.0 } else { shifted }
}

/// Floor of `value / span` as a table index, clamped to `max`.
pub(crate) fn floor_index(value: f64, span: f64, max: u8) -> u8 {
    let raw = (value / span).floor();
    if raw <= 0.0 {
        0
    } else if raw >= max as f64 {
        max
    } else {
        raw as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_table() {
        let cases = [
            (0.0, 0.0),
            (360.0, 0.0),
            (-10.0, 350.0),
            (730.0, 10.0),
            (-370.0, 350.0),
            (-1e-18, 0.0),
            (-1e-15, 0.0),
        ];
        for (input, expected) in cases {
            assert!(
                (normalize_360(input) - expected).abs() < 1e-10,
                "normalize_360({input})"
            );
        }
    }

    #[test]
    fn normalize_is_half_open() {
        for deg in [-1e-18, -1e-15, -f64::MIN_POSITIVE, -f64::EPSILON, -360.0, 720.0] {
            let n = normalize_360(deg);
            assert!((0.0..360.0).contains(&n), "normalize_360({deg}) = {n}");
        }
    }

    #[test]
    fn floor_index_clamps_both_ends() {
        assert_eq!(floor_index(-0.5, 30.0, 11), 0);
        assert_eq!(floor_index(360.0, 30.0, 11), 11);
        assert_eq!(floor_index(45.0, 30.0, 11), 1);
    }
}
