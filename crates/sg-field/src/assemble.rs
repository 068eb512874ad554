//! Assembly of velocity vectors from flow-angle fields.
//!
//! The digitized path produces tangential/radial flow angles; this converts
//! them into the same per-node velocity records the synthesizer emits, so
//! both paths feed a common downstream representation.

use crate::error::{FieldError, FieldResult};
use crate::field::{AXIS_EPS, ScalarField, VelocityField};
use nalgebra::Vector3;
use rayon::prelude::*;
use sg_core::{Real, deg_to_rad, ensure_finite};
use sg_mesh::MeshNode;

fn check_len(
    field: Option<&ScalarField>,
    nodes: &[MeshNode],
    what: &'static str,
) -> FieldResult<()> {
    if let Some(f) = field {
        if f.len() != nodes.len() {
            return Err(FieldError::Mismatch {
                what,
                field_len: f.len(),
                nodes_len: nodes.len(),
            });
        }
    }
    Ok(())
}

/// Build a velocity field from flow-angle scalar fields [deg] and the axial
/// velocity. Absent fields contribute zero; angles are measured against the
/// axial direction, so `v_theta = v_ax * tan(alpha_t)` and likewise for the
/// radial component.
pub fn assemble(
    tangential: Option<&ScalarField>,
    radial: Option<&ScalarField>,
    axial_vel: Real,
    nodes: &[MeshNode],
) -> FieldResult<VelocityField> {
    if nodes.is_empty() {
        return Err(FieldError::MissingInput {
            what: "at least one mesh node",
        });
    }
    ensure_finite(axial_vel, "axial velocity")?;
    check_len(tangential, nodes, "tangential angle field")?;
    check_len(radial, nodes, "radial angle field")?;

    let computed: Vec<FieldResult<Vector3<Real>>> = nodes
        .par_iter()
        .enumerate()
        .map(|(i, node)| {
            let alpha_t = tangential.map_or(0.0, |f| f.values()[i]);
            let alpha_r = radial.map_or(0.0, |f| f.values()[i]);
            let v_theta = axial_vel * deg_to_rad(alpha_t).tan();
            let v_radial = axial_vel * deg_to_rad(alpha_r).tan();

            let p = node.position;
            let r = p.coords.norm();
            // polar direction is undefined on the axis; there the in-plane
            // velocity must vanish anyway
            let (sin_th, cos_th) = if r <= AXIS_EPS {
                (0.0, 1.0)
            } else {
                (p.y / r, p.x / r)
            };

            let vel = Vector3::new(
                v_radial * cos_th - v_theta * sin_th,
                v_radial * sin_th + v_theta * cos_th,
                axial_vel,
            );
            if vel.iter().all(|c| c.is_finite()) {
                Ok(vel)
            } else {
                Err(FieldError::NonFinite {
                    node: node.id,
                    what: format!(
                        "assembled velocity {vel:?} from angles ({alpha_t}, {alpha_r}) deg"
                    ),
                })
            }
        })
        .collect();

    let mut values = Vec::with_capacity(computed.len());
    for result in computed {
        values.push(result?);
    }
    Ok(VelocityField::new(values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Point2;
    use sg_core::NodeId;

    fn node(i: u32, x: Real, y: Real) -> MeshNode {
        MeshNode::new(NodeId::from_index(i), Point2::new(x, y), None)
    }

    #[test]
    fn absent_fields_give_pure_axial_flow() {
        let nodes = vec![node(0, 0.3, -0.2), node(1, -0.1, 0.4)];
        let field = assemble(None, None, 2.5, &nodes).unwrap();
        for v in field.values() {
            assert_eq!(*v, Vector3::new(0.0, 0.0, 2.5));
        }
    }

    #[test]
    fn tangential_angles_round_trip_through_swirl_angle() {
        let nodes = vec![node(0, 0.5, 0.0), node(1, 0.0, 0.7), node(2, -0.3, -0.4)];
        let angles = ScalarField::new(vec![10.0, -25.0, 40.0]);
        let field = assemble(Some(&angles), None, 1.0, &nodes).unwrap();
        let recovered = field.swirl_angle(&nodes).unwrap();
        for (a, b) in angles.values().iter().zip(recovered.values()) {
            assert_relative_eq!(a, b, max_relative = 1e-10);
        }
    }

    #[test]
    fn radial_angle_points_outward() {
        // positive radial angle at (1, 0) means flow in +x
        let nodes = vec![node(0, 1.0, 0.0)];
        let angles = ScalarField::new(vec![30.0]);
        let field = assemble(None, Some(&angles), 1.0, &nodes).unwrap();
        let v = field.values()[0];
        assert!(v.x > 0.0);
        assert_relative_eq!(v.y, 0.0, epsilon = 1e-14);
        assert_relative_eq!(v.x, deg_to_rad(30.0).tan(), max_relative = 1e-12);
    }

    #[test]
    fn mismatched_field_length_is_an_error() {
        let nodes = vec![node(0, 1.0, 0.0)];
        let angles = ScalarField::new(vec![10.0, 20.0]);
        assert!(matches!(
            assemble(Some(&angles), None, 1.0, &nodes),
            Err(FieldError::Mismatch { .. })
        ));
    }
}
