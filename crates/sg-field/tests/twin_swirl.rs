//! Integration test: the bulk twin-swirl profile.
//!
//! Two counter-rotating Lamb-Oseen vortices of equal and opposite strength at
//! symmetric positions must produce a field antisymmetric about the midline.

use approx::assert_relative_eq;
use nalgebra::Point2;
use sg_core::NodeId;
use sg_field::{Vortex, VortexModel, synthesize};
use sg_mesh::MeshNode;

fn twin_vortices() -> Vec<Vortex> {
    // the classic twin pair: (0.083, 0, 1.243, 0.25) and (-0.083, 0, -1.243, 0.25)
    vec![
        Vortex::new(
            VortexModel::LambOseen,
            Point2::new(0.083, 0.0),
            1.243,
            0.25,
        )
        .unwrap(),
        Vortex::new(
            VortexModel::LambOseen,
            Point2::new(-0.083, 0.0),
            -1.243,
            0.25,
        )
        .unwrap(),
    ]
}

#[test]
fn twin_swirl_is_antisymmetric_about_the_midline() {
    let vortices = twin_vortices();

    // mirrored node pairs across the x = 0 midline, even ids left of the line
    let probes = [
        (0.15, 0.05),
        (0.3, -0.2),
        (0.45, 0.35),
        (0.083, 0.25),
    ];
    let mut nodes = Vec::new();
    for (i, &(x, y)) in probes.iter().enumerate() {
        nodes.push(MeshNode::new(
            NodeId::from_index(2 * i as u32),
            Point2::new(-x, y),
            None,
        ));
        nodes.push(MeshNode::new(
            NodeId::from_index(2 * i as u32 + 1),
            Point2::new(x, y),
            None,
        ));
    }

    let field = synthesize(&vortices, &nodes, 1.0, None).unwrap();

    for i in 0..probes.len() {
        let left = field.values()[2 * i];
        let right = field.values()[2 * i + 1];
        // mirror antisymmetry of the counter-rotating pair: u flips sign
        // across the midline, v is even, axial is untouched
        assert_relative_eq!(left.x, -right.x, epsilon = 1e-10);
        assert_relative_eq!(left.y, right.y, epsilon = 1e-10);
        assert_relative_eq!(left.z, right.z, epsilon = 1e-12);
    }
}

#[test]
fn midline_swirl_angle_is_antisymmetric() {
    let vortices = twin_vortices();
    let nodes: Vec<MeshNode> = [(-0.4_f64, 0.1_f64), (0.4, 0.1)]
        .iter()
        .enumerate()
        .map(|(i, &(x, y))| MeshNode::new(NodeId::from_index(i as u32), Point2::new(x, y), None))
        .collect();

    let field = synthesize(&vortices, &nodes, 1.0, None).unwrap();
    let swirl = field.swirl_angle(&nodes).unwrap();

    // tangential velocity at mirrored points: equal magnitude, opposite sign
    assert_relative_eq!(
        swirl.values()[0],
        -swirl.values()[1],
        epsilon = 1e-9
    );
}
