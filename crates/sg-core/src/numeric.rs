use crate::SgError;

/// Floating point type used throughout the generator
pub type Real = f64;

/// 2π, the circulation normalisation constant
pub const TWO_PI: Real = 2.0 * std::f64::consts::PI;

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

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, SgError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(SgError::NonFinite { what, value: v })
    }
}

/// Require a strictly positive, finite value (core radii, side lengths, ranges).
pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, SgError> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(SgError::InvalidArg { what })
    }
}

/// Swirl angles are exchanged in degrees but computed in radians.
pub fn deg_to_rad(deg: Real) -> Real {
    deg.to_radians()
}

pub fn rad_to_deg(rad: Real) -> Real {
    rad.to_degrees()
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
    fn ensure_positive_rejects_zero_and_negative() {
        assert!(ensure_positive(0.25, "core radius").is_ok());
        assert!(ensure_positive(0.0, "core radius").is_err());
        assert!(ensure_positive(-1.0, "core radius").is_err());
        assert!(ensure_positive(Real::INFINITY, "core radius").is_err());
    }

    #[test]
    fn angle_round_trip() {
        let tol = Tolerances::default();
        for deg in [-89.0, -30.0, 0.0, 12.5, 45.0, 89.0] {
            assert!(nearly_equal(rad_to_deg(deg_to_rad(deg)), deg, tol));
        }
    }
}
