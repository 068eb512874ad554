//! Post-synthesis boundary verification.
//!
//! Reports the worst through-flow across the duct wall. Superposed free
//! vortices do not satisfy the wall condition exactly, so this is a report
//! for the caller to judge, not a pass/fail gate on synthesis.

use crate::error::{FieldError, FieldResult};
use crate::field::VelocityField;
use sg_core::{NodeId, Real};
use sg_mesh::{InletShape, MeshNode};

/// Outcome of a wall through-flow check.
#[derive(Clone, Copy, Debug)]
pub struct BoundaryReport {
    /// Largest velocity component normal to the wall among wall nodes [m/s]
    pub max_normal_velocity: Real,
    /// Node where it occurs
    pub worst_node: Option<NodeId>,
    /// Number of wall nodes inspected
    pub wall_nodes: usize,
    /// True when the worst normal velocity is within tolerance
    pub ok: bool,
}

/// Inspect nodes within `wall_tol` of the duct wall and report the largest
/// wall-normal velocity component against `vel_tol`.
pub fn check_boundaries(
    nodes: &[MeshNode],
    field: &VelocityField,
    shape: &InletShape,
    wall_tol: Real,
    vel_tol: Real,
) -> FieldResult<BoundaryReport> {
    if field.len() != nodes.len() {
        return Err(FieldError::Mismatch {
            what: "boundary check",
            field_len: field.len(),
            nodes_len: nodes.len(),
        });
    }

    let mut worst: Real = 0.0;
    let mut worst_node = None;
    let mut wall_nodes = 0;

    for (node, vel) in nodes.iter().zip(field.values()) {
        let Some(dist) = node.wall_distance else {
            continue;
        };
        if dist > wall_tol {
            continue;
        }
        wall_nodes += 1;

        let p = node.position;
        let normal = match *shape {
            InletShape::Circle { .. } => {
                let r = p.coords.norm();
                if r == 0.0 {
                    continue;
                }
                // radial component
                (p.x * vel.x + p.y * vel.y) / r
            }
            InletShape::Rect { x_side, y_side } => {
                // component normal to the nearest wall
                let dx = x_side / 2.0 - p.x.abs();
                let dy = y_side / 2.0 - p.y.abs();
                if dx <= dy { vel.x } else { vel.y }
            }
        };

        if normal.abs() > worst {
            worst = normal.abs();
            worst_node = Some(node.id);
        }
    }

    Ok(BoundaryReport {
        max_normal_velocity: worst,
        worst_node,
        wall_nodes,
        ok: worst <= vel_tol,
    })
}
