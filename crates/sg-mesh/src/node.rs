use nalgebra::Point2;
use sg_core::{NodeId, Real};

/// A single inlet-plane node, read-only to the engines.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshNode {
    pub id: NodeId,
    /// Position in the cross-sectional plane [m]; x positive right, y positive up
    pub position: Point2<Real>,
    /// Distance to the nearest duct wall [m], when known
    pub wall_distance: Option<Real>,
}

impl MeshNode {
    pub fn new(id: NodeId, position: Point2<Real>, wall_distance: Option<Real>) -> Self {
        Self {
            id,
            position,
            wall_distance,
        }
    }
}
