use crate::error::{MeshError, MeshResult};
use nalgebra::Point2;
use sg_core::Real;

/// Cross-sectional shape of the inlet face, centered on the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InletShape {
    Circle { radius: Real },
    Rect { x_side: Real, y_side: Real },
}

impl InletShape {
    /// Validate geometric parameters (positive, finite).
    pub fn validate(&self) -> MeshResult<()> {
        match *self {
            InletShape::Circle { radius } => {
                if !radius.is_finite() || radius <= 0.0 {
                    return Err(MeshError::InvalidShape {
                        what: "circle radius must be positive and finite",
                    });
                }
            }
            InletShape::Rect { x_side, y_side } => {
                if !x_side.is_finite() || x_side <= 0.0 || !y_side.is_finite() || y_side <= 0.0 {
                    return Err(MeshError::InvalidShape {
                        what: "rectangle side lengths must be positive and finite",
                    });
                }
            }
        }
        Ok(())
    }

    /// Side lengths of the bounding box that holds the inlet face.
    pub fn bounding_sides(&self) -> (Real, Real) {
        match *self {
            InletShape::Circle { radius } => (2.0 * radius, 2.0 * radius),
            InletShape::Rect { x_side, y_side } => (x_side, y_side),
        }
    }

    /// Whether `p` lies inside the face, with a tolerance so that boundary
    /// nodes of a discretised grid are kept.
    pub fn contains(&self, p: &Point2<Real>, tol: Real) -> bool {
        match *self {
            InletShape::Circle { radius } => p.coords.norm() < radius + tol,
            InletShape::Rect { x_side, y_side } => {
                p.x.abs() <= x_side / 2.0 + tol && p.y.abs() <= y_side / 2.0 + tol
            }
        }
    }

    /// Distance from `p` to the nearest duct wall, clamped to zero for points
    /// on or outside the wall.
    pub fn wall_distance(&self, p: &Point2<Real>) -> Real {
        match *self {
            InletShape::Circle { radius } => (radius - p.coords.norm()).max(0.0),
            InletShape::Rect { x_side, y_side } => {
                let dx = x_side / 2.0 - p.x.abs();
                let dy = y_side / 2.0 - p.y.abs();
                dx.min(dy).max(0.0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sg_core::{Tolerances, nearly_equal};

    #[test]
    fn validate_rejects_degenerate_shapes() {
        assert!(InletShape::Circle { radius: 0.5 }.validate().is_ok());
        assert!(InletShape::Circle { radius: 0.0 }.validate().is_err());
        assert!(InletShape::Circle { radius: -1.0 }.validate().is_err());
        assert!(
            InletShape::Rect {
                x_side: 1.0,
                y_side: 0.0
            }
            .validate()
            .is_err()
        );
    }

    #[test]
    fn circle_wall_distance() {
        let shape = InletShape::Circle { radius: 1.0 };
        let tol = Tolerances::default();
        assert!(nearly_equal(
            shape.wall_distance(&Point2::new(0.0, 0.0)),
            1.0,
            tol
        ));
        assert!(nearly_equal(
            shape.wall_distance(&Point2::new(0.6, 0.0)),
            0.4,
            tol
        ));
        // outside the wall clamps to zero
        assert_eq!(shape.wall_distance(&Point2::new(2.0, 0.0)), 0.0);
    }

    #[test]
    fn rect_wall_distance_is_min_over_sides() {
        let shape = InletShape::Rect {
            x_side: 2.0,
            y_side: 4.0,
        };
        let tol = Tolerances::default();
        // closer to the x walls than the y walls
        assert!(nearly_equal(
            shape.wall_distance(&Point2::new(0.5, 0.0)),
            0.5,
            tol
        ));
        assert!(nearly_equal(
            shape.wall_distance(&Point2::new(0.0, 1.8)),
            0.2,
            tol
        ));
    }
}
