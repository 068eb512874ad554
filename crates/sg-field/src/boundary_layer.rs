//! Near-wall attenuation of the swirl components.
//!
//! Approximates the no-slip boundary layer with a 1/7th power-law profile;
//! the layer thickness comes from the turbulent flat-plate correlation using
//! the duct reference length.

use crate::error::{FieldError, FieldResult};
use sg_core::Real;

/// Kinematic viscosity of air [m²/s], ISA sea level
const KIN_VISC: Real = 1.81e-5;

/// Boundary-layer correction, built once per run from the duct reference
/// length and the free-stream (axial) velocity.
#[derive(Clone, Copy, Debug)]
pub struct BoundaryLayer {
    thickness: Real,
}

impl BoundaryLayer {
    /// Derive the layer thickness from a reference length [m] and the axial
    /// velocity [m/s] via `δ = 0.37 L / Re_L^(1/5)`.
    pub fn new(ref_length: Real, axial_vel: Real) -> FieldResult<Self> {
        if !ref_length.is_finite() || ref_length <= 0.0 {
            return Err(FieldError::Config {
                what: format!("boundary layer reference length must be positive, got {ref_length}"),
            });
        }
        if !axial_vel.is_finite() || axial_vel <= 0.0 {
            return Err(FieldError::Config {
                what: format!(
                    "boundary layer correction needs a positive axial velocity, got {axial_vel}"
                ),
            });
        }
        let re = axial_vel * ref_length / KIN_VISC;
        Ok(Self {
            thickness: 0.37 * ref_length / re.powf(0.2),
        })
    }

    /// Layer thickness δ [m].
    pub fn thickness(&self) -> Real {
        self.thickness
    }

    /// Swirl attenuation factor at `wall_distance` [m]: `(d/δ)^(1/7)` clipped
    /// to [0, 1]. Zero at the wall, unity beyond the layer.
    pub fn wall_factor(&self, wall_distance: Real) -> Real {
        if wall_distance <= 0.0 {
            return 0.0;
        }
        (wall_distance / self.thickness).powf(1.0 / 7.0).min(1.0)
    }
}
