//! Per-node field containers.
//!
//! Fields are index-aligned with the node slice that produced them; node ids
//! are assigned from indices, so `values[id.index()]` is the record for `id`.

use crate::error::{FieldError, FieldResult};
use nalgebra::Vector3;
use sg_core::{NodeId, Real, rad_to_deg};
use sg_mesh::MeshNode;

/// Radial distance under which a node sits on the duct axis and its polar
/// direction (and swirl angle) is taken as zero.
pub(crate) const AXIS_EPS: Real = 1e-12;

/// Velocity vectors per node: (vx, vy) in the swirl plane, vz axial [m/s].
#[derive(Clone, Debug, PartialEq)]
pub struct VelocityField {
    values: Vec<Vector3<Real>>,
}

impl VelocityField {
    pub fn new(values: Vec<Vector3<Real>>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[Vector3<Real>] {
        &self.values
    }

    pub fn get(&self, id: NodeId) -> Option<&Vector3<Real>> {
        self.values.get(id.index() as usize)
    }

    /// Swirl angle per node [deg]: the angle between the tangential velocity
    /// component and the axial direction, `atan(v_theta / v_axial)`.
    pub fn swirl_angle(&self, nodes: &[MeshNode]) -> FieldResult<ScalarField> {
        self.check_len(nodes, "swirl angle extraction")?;
        let mut angles = Vec::with_capacity(nodes.len());
        for (node, vel) in nodes.iter().zip(&self.values) {
            let p = node.position;
            let r = p.coords.norm();
            let angle = if r <= AXIS_EPS {
                0.0
            } else {
                // v_theta from the in-plane components, then the literature
                // definition of the swirl angle
                let v_theta = (p.x * vel.y - p.y * vel.x) / r;
                rad_to_deg(v_theta.atan2(vel.z))
            };
            if !angle.is_finite() {
                return Err(FieldError::NonFinite {
                    node: node.id,
                    what: format!("swirl angle from velocity {vel:?}"),
                });
            }
            angles.push(angle);
        }
        Ok(ScalarField::new(angles))
    }

    fn check_len(&self, nodes: &[MeshNode], what: &'static str) -> FieldResult<()> {
        if self.values.len() != nodes.len() {
            return Err(FieldError::Mismatch {
                what,
                field_len: self.values.len(),
                nodes_len: nodes.len(),
            });
        }
        Ok(())
    }
}

/// Per-node scalar field: a flow angle in degrees.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarField {
    values: Vec<Real>,
}

impl ScalarField {
    pub fn new(values: Vec<Real>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[Real] {
        &self.values
    }

    pub fn get(&self, id: NodeId) -> Option<Real> {
        self.values.get(id.index() as usize).copied()
    }

    /// Root-mean-square difference against another profile of the same node
    /// set; used to compare a synthesized swirl profile to a reference.
    pub fn rms_error(&self, other: &ScalarField) -> FieldResult<Real> {
        if self.values.len() != other.values.len() {
            return Err(FieldError::Mismatch {
                what: "rms comparison",
                field_len: self.values.len(),
                nodes_len: other.values.len(),
            });
        }
        if self.values.is_empty() {
            return Err(FieldError::MissingInput {
                what: "at least one node for rms comparison",
            });
        }
        let sum_sq: Real = self
            .values
            .iter()
            .zip(&other.values)
            .map(|(a, b)| (a - b) * (a - b))
            .sum();
        Ok((sum_sq / self.values.len() as Real).sqrt())
    }
}
