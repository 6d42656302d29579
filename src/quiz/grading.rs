/// Below this magnitude the expected value counts as zero and a relative
/// band would collapse to a single point.
const ZERO_THRESHOLD: f64 = 1e-9;
/// Absolute band used when the expected value is (near) zero.
const ZERO_EPSILON: f64 = 1e-6;

/// Decides whether `user_value` is close enough to `expected`.
///
/// The accepted deviation is `|expected| * tolerance_fraction`, so a single
/// percentage works for velocities, molarities and energies alike. When
/// `expected` is (near) zero a fixed absolute epsilon of `1e-6` is used.
pub fn within_tolerance(expected: f64, user_value: f64, tolerance_fraction: f64) -> bool {
    let allowed = if expected.abs() >= ZERO_THRESHOLD {
        expected.abs() * tolerance_fraction
    } else {
        ZERO_EPSILON
    };
    (user_value - expected).abs() <= allowed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_answer_is_always_accepted() {
        for expected in [-250.0, -1.5, 0.0, 1e-12, 0.3, 42.0, 1e9] {
            for tolerance in [0.001, 0.05, 0.5] {
                assert!(within_tolerance(expected, expected, tolerance));
            }
        }
    }

    #[test]
    fn boundary_is_inclusive() {
        assert!(within_tolerance(100.0, 105.0, 0.05));
        assert!(within_tolerance(100.0, 95.0, 0.05));
        assert!(!within_tolerance(100.0, 105.01, 0.05));
        assert!(!within_tolerance(100.0, 94.99, 0.05));
    }

    #[test]
    fn negative_expected_uses_magnitude() {
        assert!(within_tolerance(-3.0, -3.1, 0.05));
        assert!(!within_tolerance(-3.0, 3.0, 0.5));
    }

    #[test]
    fn zero_expected_uses_absolute_epsilon() {
        for tolerance in [0.001, 0.05, 0.5] {
            assert!(within_tolerance(0.0, 0.000_000_5, tolerance));
            assert!(within_tolerance(0.0, -0.000_001, tolerance));
            assert!(!within_tolerance(0.0, 0.1, tolerance));
        }
    }
}
