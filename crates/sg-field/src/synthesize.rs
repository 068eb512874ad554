//! Velocity-field synthesis by vortex superposition.

use crate::boundary_layer::BoundaryLayer;
use crate::error::{FieldError, FieldResult};
use crate::field::VelocityField;
use crate::vortex::Vortex;
use nalgebra::{Vector2, Vector3};
use rayon::prelude::*;
use sg_core::{Real, ensure_finite};
use sg_mesh::MeshNode;

/// Synthesize the inlet velocity field from a set of vortices.
///
/// Per node, the in-plane velocity is the straight vector sum of every
/// vortex's induced tangential velocity; the axial velocity fills the
/// out-of-plane component. With a boundary-layer reference length, the swirl
/// (not axial) components of nodes carrying a wall distance are attenuated by
/// the power-law wall factor.
///
/// Pure function of its inputs; nodes are evaluated in parallel and the
/// result covers exactly the input node set in the same order.
pub fn synthesize(
    vortices: &[Vortex],
    nodes: &[MeshNode],
    axial_vel: Real,
    bl_ref_length: Option<Real>,
) -> FieldResult<VelocityField> {
    if vortices.is_empty() {
        return Err(FieldError::MissingInput {
            what: "at least one vortex",
        });
    }
    if nodes.is_empty() {
        return Err(FieldError::MissingInput {
            what: "at least one mesh node",
        });
    }
    ensure_finite(axial_vel, "axial velocity")?;

    let bl = bl_ref_length
        .map(|len| BoundaryLayer::new(len, axial_vel))
        .transpose()?;

    tracing::debug!(
        vortices = vortices.len(),
        nodes = nodes.len(),
        boundary_layer = bl.is_some(),
        "synthesizing inlet velocity field"
    );

    let computed: Vec<FieldResult<Vector3<Real>>> = nodes
        .par_iter()
        .map(|node| {
            let mut swirl = Vector2::zeros();
            for vortex in vortices {
                swirl += vortex.induced_velocity(&node.position);
            }
            if let (Some(bl), Some(dist)) = (&bl, node.wall_distance) {
                swirl *= bl.wall_factor(dist);
            }
            let vel = Vector3::new(swirl.x, swirl.y, axial_vel);
            if vel.iter().all(|c| c.is_finite()) {
                Ok(vel)
            } else {
                Err(FieldError::NonFinite {
                    node: node.id,
                    what: format!("superposed velocity {vel:?}"),
                })
            }
        })
        .collect();

    // Surface the first failure in node order; no partial results
    let mut values = Vec::with_capacity(computed.len());
    for result in computed {
        values.push(result?);
    }
    Ok(VelocityField::new(values))
}
