//! Structured test-domain node generation.
//!
//! Produces the node set of a uniform grid over the inlet face, centered on
//! the origin (x positive right, y positive up, rows listed top to bottom).
//! Circular faces keep only nodes inside the duct, with a half-cell buffer so
//! the discretised rim touches the wall.

use crate::error::{MeshError, MeshResult};
use crate::node::MeshNode;
use crate::shape::InletShape;
use nalgebra::Point2;
use sg_core::{NodeId, Real};

/// `n` evenly spaced values from `a` to `b` inclusive.
fn linspace(a: Real, b: Real, n: usize) -> Vec<Real> {
    debug_assert!(n >= 2);
    let step = (b - a) / (n - 1) as Real;
    (0..n).map(|i| a + step * i as Real).collect()
}

/// Generate the node set of a structured `nx` x `ny` cell grid over `shape`.
///
/// Node ids are assigned in traversal order (row-major, top row first), which
/// is also the order every downstream field covers.
pub fn structured_nodes(shape: InletShape, nx: u32, ny: u32) -> MeshResult<Vec<MeshNode>> {
    shape.validate()?;
    if nx == 0 || ny == 0 {
        return Err(MeshError::InvalidGrid {
            what: "cell counts must be at least 1",
        });
    }

    let (sx, sy) = shape.bounding_sides();
    let xs = linspace(-sx / 2.0, sx / 2.0, nx as usize + 1);
    let ys = linspace(sy / 2.0, -sy / 2.0, ny as usize + 1);

    // Half a cell of tolerance keeps rim nodes of circular faces
    let tol = sx / nx as Real / 2.0;

    let mut nodes = Vec::with_capacity(xs.len() * ys.len());
    let mut next = 0_u32;
    for &y in &ys {
        for &x in &xs {
            let p = Point2::new(x, y);
            if !shape.contains(&p, tol) {
                continue;
            }
            nodes.push(MeshNode::new(
                NodeId::from_index(next),
                p,
                Some(shape.wall_distance(&p)),
            ));
            next += 1;
        }
    }

    Ok(nodes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_grid_keeps_all_nodes() {
        let nodes = structured_nodes(
            InletShape::Rect {
                x_side: 2.0,
                y_side: 1.0,
            },
            4,
            2,
        )
        .unwrap();
        assert_eq!(nodes.len(), 5 * 3);
        // ids follow traversal order
        for (i, n) in nodes.iter().enumerate() {
            assert_eq!(n.id.index() as usize, i);
        }
        // first node is the top-left corner
        assert_eq!(nodes[0].position, Point2::new(-1.0, 0.5));
    }

    #[test]
    fn circle_grid_masks_corners() {
        let radius = 0.5;
        let nodes = structured_nodes(InletShape::Circle { radius }, 10, 10).unwrap();
        assert!(nodes.len() < 11 * 11);
        let tol = radius / 10.0; // half-cell buffer plus slack
        for n in &nodes {
            assert!(n.position.coords.norm() <= radius + tol);
        }
    }

    #[test]
    fn wall_distances_are_present_and_bounded() {
        let nodes = structured_nodes(InletShape::Circle { radius: 1.0 }, 8, 8).unwrap();
        for n in &nodes {
            let d = n.wall_distance.unwrap();
            assert!((0.0..=1.0).contains(&d));
        }
    }

    #[test]
    fn zero_cells_is_an_error() {
        let shape = InletShape::Circle { radius: 1.0 };
        assert!(structured_nodes(shape, 0, 4).is_err());
        assert!(structured_nodes(shape, 4, 0).is_err());
    }
}
