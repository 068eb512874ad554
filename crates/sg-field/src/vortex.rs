//! Discrete vortex models.
//!
//! A vortex contributes a purely tangential velocity around its center;
//! positive circulation strength is anti-clockwise rotation. The model set is
//! closed, so evaluation is a single exhaustive match rather than trait
//! dispatch.

use crate::error::{FieldError, FieldResult};
use nalgebra::{Point2, Vector2};
use sg_core::{Real, TWO_PI, ensure_finite, ensure_positive};
use std::fmt;
use std::str::FromStr;

/// Below this fraction of the core radius the Lamb-Oseen profile is replaced
/// by its analytic small-r limit.
const SMALL_R_FRACTION: Real = 1e-6;

/// Radial distance under which a node is considered to sit on the vortex
/// center; the tangential direction is undefined there and the contribution
/// is zero.
pub const CENTER_EPS: Real = 1e-12;

/// Mathematical model of a single vortex.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VortexModel {
    /// Viscous vortex, Gaussian vorticity core (Brandt 2009 form).
    LambOseen,
    /// Rigid-body rotation inside the core, free decay outside.
    Solid,
    /// Potential vortex, evaluation radius clamped to the core radius.
    Isolated,
}

impl VortexModel {
    pub fn name(&self) -> &'static str {
        match self {
            VortexModel::LambOseen => "lo",
            VortexModel::Solid => "solid",
            VortexModel::Isolated => "iso",
        }
    }
}

impl FromStr for VortexModel {
    type Err = FieldError;

    fn from_str(s: &str) -> FieldResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "lo" | "lamb_oseen" | "lamb-oseen" => Ok(VortexModel::LambOseen),
            "solid" | "forced" => Ok(VortexModel::Solid),
            "iso" | "isolated" => Ok(VortexModel::Isolated),
            other => Err(FieldError::UnknownModel {
                tag: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for VortexModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single vortex, immutable once constructed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vortex {
    center: Point2<Real>,
    /// Circulation strength Γ [m²/s], signed; positive is anti-clockwise
    strength: Real,
    /// Core radius [m], where the profile transitions to far-field decay
    core_radius: Real,
    model: VortexModel,
}

impl Vortex {
    /// Construct a vortex, validating its parameters.
    pub fn new(
        model: VortexModel,
        center: Point2<Real>,
        strength: Real,
        core_radius: Real,
    ) -> FieldResult<Self> {
        ensure_finite(center.x, "vortex center x")?;
        ensure_finite(center.y, "vortex center y")?;
        ensure_finite(strength, "vortex strength")?;
        ensure_positive(core_radius, "vortex core radius").map_err(|_| FieldError::Config {
            what: format!("vortex core radius must be positive, got {core_radius}"),
        })?;
        Ok(Self {
            center,
            strength,
            core_radius,
            model,
        })
    }

    pub fn center(&self) -> Point2<Real> {
        self.center
    }

    pub fn strength(&self) -> Real {
        self.strength
    }

    pub fn core_radius(&self) -> Real {
        self.core_radius
    }

    pub fn model(&self) -> VortexModel {
        self.model
    }

    /// Tangential velocity magnitude [m/s] at radial distance `r` [m] from
    /// the center. Sign follows the sign of Γ.
    pub fn tangential_velocity(&self, r: Real) -> Real {
        let gamma = self.strength;
        let rc = self.core_radius;
        match self.model {
            VortexModel::LambOseen => {
                if r < SMALL_R_FRACTION * rc {
                    // Analytic small-r limit; the closed form is 0/0 here
                    gamma * r / (TWO_PI * rc * rc)
                } else {
                    // exp_m1 keeps 1 - exp(-x) cancellation-free for small x
                    let x = (r / rc) * (r / rc);
                    gamma / (TWO_PI * r) * (-(-x).exp_m1())
                }
            }
            VortexModel::Solid => {
                if r <= rc {
                    gamma * r / (TWO_PI * rc * rc)
                } else {
                    gamma / (TWO_PI * r)
                }
            }
            // Bounded plateau inside the nominal core: the potential profile
            // is only physically meaningful outside it
            VortexModel::Isolated => gamma / (TWO_PI * r.max(rc)),
        }
    }

    /// In-plane velocity induced at `at`, right-hand convention: positive Γ
    /// rotates anti-clockwise. A point on the center gets a zero vector.
    pub fn induced_velocity(&self, at: &Point2<Real>) -> Vector2<Real> {
        let d = at - self.center;
        let r = d.norm();
        if r <= CENTER_EPS {
            return Vector2::zeros();
        }
        let vt = self.tangential_velocity(r);
        // unit tangential = radial unit rotated +90 degrees
        Vector2::new(-d.y, d.x) * (vt / r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use sg_core::TWO_PI;

    fn solid(strength: Real, rc: Real) -> Vortex {
        Vortex::new(VortexModel::Solid, Point2::origin(), strength, rc).unwrap()
    }

    #[test]
    fn unknown_model_tag_is_rejected() {
        let err = "rankine".parse::<VortexModel>().unwrap_err();
        assert!(format!("{err}").contains("rankine"));
    }

    #[test]
    fn model_tags_parse_with_aliases() {
        assert_eq!("lo".parse::<VortexModel>().unwrap(), VortexModel::LambOseen);
        assert_eq!(
            "lamb_oseen".parse::<VortexModel>().unwrap(),
            VortexModel::LambOseen
        );
        assert_eq!("forced".parse::<VortexModel>().unwrap(), VortexModel::Solid);
        assert_eq!("ISO".parse::<VortexModel>().unwrap(), VortexModel::Isolated);
    }

    #[test]
    fn non_positive_core_radius_is_a_config_error() {
        for rc in [0.0, -0.25] {
            let err =
                Vortex::new(VortexModel::LambOseen, Point2::origin(), 1.0, rc).unwrap_err();
            assert!(matches!(err, FieldError::Config { .. }));
        }
    }

    #[test]
    fn solid_vortex_concrete_values() {
        // Γ=15, r_c=0.5: inside branch at r=0.25 and outside branch at r=1.0
        // both evaluate to 15/(2π) -- checked against the exact formulas
        let v = solid(15.0, 0.5);
        assert_relative_eq!(
            v.tangential_velocity(0.25),
            15.0 / (TWO_PI * 0.5 * 0.5) * 0.25,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            v.tangential_velocity(1.0),
            15.0 / (TWO_PI * 1.0),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            v.tangential_velocity(0.25),
            15.0 / TWO_PI,
            max_relative = 1e-12
        );
    }

    #[test]
    fn lamb_oseen_far_field_decays_to_potential() {
        let gamma = 4.2;
        let rc = 0.1;
        let v = Vortex::new(VortexModel::LambOseen, Point2::origin(), gamma, rc).unwrap();
        for r in [1.0, 5.0, 20.0] {
            assert_relative_eq!(
                v.tangential_velocity(r),
                gamma / (TWO_PI * r),
                max_relative = 1e-8
            );
        }
    }

    #[test]
    fn lamb_oseen_small_r_limit_is_linear() {
        let gamma = -3.0;
        let rc = 0.5;
        let v = Vortex::new(VortexModel::LambOseen, Point2::origin(), gamma, rc).unwrap();
        let r = 1e-9;
        assert_relative_eq!(
            v.tangential_velocity(r),
            gamma * r / (TWO_PI * rc * rc),
            max_relative = 1e-9
        );
        // and the two branches agree where they meet
        let r = 1e-3 * rc;
        assert_relative_eq!(
            v.tangential_velocity(r),
            gamma * r / (TWO_PI * rc * rc),
            max_relative = 1e-5
        );
    }

    #[test]
    fn isolated_clamps_inside_core() {
        let gamma = 2.0;
        let rc = 0.3;
        let v = Vortex::new(VortexModel::Isolated, Point2::origin(), gamma, rc).unwrap();
        let plateau = gamma / (TWO_PI * rc);
        assert_relative_eq!(v.tangential_velocity(0.0), plateau, max_relative = 1e-12);
        assert_relative_eq!(v.tangential_velocity(0.1), plateau, max_relative = 1e-12);
        assert_relative_eq!(
            v.tangential_velocity(0.6),
            gamma / (TWO_PI * 0.6),
            max_relative = 1e-12
        );
    }

    #[test]
    fn induced_velocity_is_zero_on_center() {
        let v = solid(15.0, 0.5);
        assert_eq!(v.induced_velocity(&Point2::origin()), Vector2::zeros());
    }

    #[test]
    fn positive_strength_rotates_anticlockwise() {
        let v = solid(1.0, 0.1);
        // to the right of the center, anti-clockwise flow points up
        let vel = v.induced_velocity(&Point2::new(1.0, 0.0));
        assert!(vel.y > 0.0);
        assert_relative_eq!(vel.x, 0.0, epsilon = 1e-14);
    }
}
