//! Physical-to-pixel coordinate mapping.
//!
//! Derived outside the digitizer from the plot's axis extents and the pixel
//! rectangle those extents cover; the digitizer only ever asks it where a
//! node lands in the image.

use crate::error::{ContourError, ContourResult};
use nalgebra::Point2;
use sg_core::Real;

/// Maps cross-sectional coordinates into a pixel rectangle of the plot image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotAxes {
    x_min: Real,
    x_max: Real,
    y_min: Real,
    y_max: Real,
    left: u32,
    top: u32,
    width: u32,
    height: u32,
}

impl PlotAxes {
    /// Physical extents `(x_min, x_max)`/`(y_min, y_max)` plotted across the
    /// pixel rectangle at `(left, top)` of size `width` x `height`.
    pub fn new(
        x_range: (Real, Real),
        y_range: (Real, Real),
        left: u32,
        top: u32,
        width: u32,
        height: u32,
    ) -> ContourResult<Self> {
        let (x_min, x_max) = x_range;
        let (y_min, y_max) = y_range;
        if !(x_min.is_finite() && x_max.is_finite() && x_min < x_max)
            || !(y_min.is_finite() && y_max.is_finite() && y_min < y_max)
        {
            return Err(ContourError::Config {
                what: format!(
                    "plot axis extents x=[{x_min}, {x_max}] y=[{y_min}, {y_max}] \
                     must be finite and increasing"
                ),
            });
        }
        if width < 2 || height < 2 {
            return Err(ContourError::Config {
                what: format!("plot pixel region {width}x{height} is degenerate"),
            });
        }
        Ok(Self {
            x_min,
            x_max,
            y_min,
            y_max,
            left,
            top,
            width,
            height,
        })
    }

    /// Axes covering a whole image.
    pub fn full_image(
        x_range: (Real, Real),
        y_range: (Real, Real),
        image_width: u32,
        image_height: u32,
    ) -> ContourResult<Self> {
        Self::new(x_range, y_range, 0, 0, image_width, image_height)
    }

    /// Pixel for a physical point, clamped into the plot rectangle. Image
    /// rows grow downward, so `y_max` sits at the top.
    pub fn to_pixel(&self, p: &Point2<Real>) -> (u32, u32) {
        let fx = ((p.x - self.x_min) / (self.x_max - self.x_min)).clamp(0.0, 1.0);
        let fy = ((self.y_max - p.y) / (self.y_max - self.y_min)).clamp(0.0, 1.0);
        let col = self.left + (fx * (self.width - 1) as Real).round() as u32;
        let row = self.top + (fy * (self.height - 1) as Real).round() as u32;
        (col, row)
    }
}
