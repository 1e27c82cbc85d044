use crate::FfError;

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, FfError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(FfError::NonFinite { what, value: v })
    }
}

/// Round to `dp` decimal places for display boundaries.
///
/// Results keep full precision internally; rounding happens once, when a
/// value is written into a result struct.
pub fn round_dp(v: Real, dp: u32) -> Real {
    let scale = 10f64.powi(dp as i32);
    (v * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn round_dp_display_boundary() {
        assert_eq!(round_dp(3.18433, 2), 3.18);
        assert_eq!(round_dp(0.11976, 4), 0.1198);
        assert_eq!(round_dp(1273.2395, 2), 1273.24);
        assert_eq!(round_dp(5.0, 2), 5.0);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn round_dp_stays_close(v in -1e6_f64..1e6) {
            let rounded = round_dp(v, 2);
            prop_assert!((rounded - v).abs() <= 0.005 + 1e-9);
        }

        #[test]
        fn nearly_equal_is_reflexive(v in -1e9_f64..1e9) {
            prop_assert!(nearly_equal(v, v, Tolerances::default()));
        }
    }
}
