//! Inverse colour lookup: image + colour map -> per-node flow angles.

use crate::axes::PlotAxes;
use crate::colourmap::{ColourMap, colour_distance, pixel_to_unit};
use crate::error::{ContourError, ContourResult};
use image::RgbImage;
use rayon::prelude::*;
use sg_core::Real;
use sg_field::ScalarField;
use sg_mesh::MeshNode;

/// Knobs of the inverse lookup.
#[derive(Clone, Copy, Debug)]
pub struct DigitizerOptions {
    /// Largest acceptable colour distance to the best-matching sample;
    /// beyond it the pixel is not on the legend (background, annotations)
    pub tolerance: Real,
    /// Half-width of the pixel neighborhood averaged around each node to
    /// suppress anti-aliasing noise (1 means a 3x3 block)
    pub neighborhood: u32,
}

impl Default for DigitizerOptions {
    fn default() -> Self {
        Self {
            tolerance: 0.2,
            neighborhood: 1,
        }
    }
}

/// Digitize a scalar field from a contour-plot image.
///
/// Per node: average the pixel neighborhood at the node's mapped coordinate,
/// find the nearest colour-bar sample by colour distance, and interpolate
/// between the two nearest samples when they are adjacent along the ramp.
/// A best match beyond the tolerance is a [`ContourError::OutOfRange`] so
/// the caller can substitute a default or mark the node invalid; the run
/// emits no partial results, and the first failure in node order wins.
pub fn digitize(
    image: &RgbImage,
    colour_map: &ColourMap,
    axes: &PlotAxes,
    nodes: &[MeshNode],
    opts: &DigitizerOptions,
) -> ContourResult<ScalarField> {
    if nodes.is_empty() {
        return Err(ContourError::MissingInput {
            what: "at least one mesh node",
        });
    }

    tracing::debug!(
        nodes = nodes.len(),
        samples = colour_map.len(),
        tolerance = opts.tolerance,
        "digitizing contour plot"
    );

    let computed: Vec<ContourResult<Real>> = nodes
        .par_iter()
        .map(|node| {
            let (px, py) = axes.to_pixel(&node.position);
            let colour = neighborhood_mean(image, px, py, opts.neighborhood);
            lookup_value(colour_map, colour, opts.tolerance).map_err(|distance| {
                ContourError::OutOfRange {
                    node: node.id,
                    px,
                    py,
                    distance,
                    tolerance: opts.tolerance,
                }
            })
        })
        .collect();

    let mut values = Vec::with_capacity(computed.len());
    for result in computed {
        values.push(result?);
    }
    Ok(ScalarField::new(values))
}

fn neighborhood_mean(image: &RgbImage, px: u32, py: u32, half: u32) -> [Real; 3] {
    let (w, h) = image.dimensions();
    let x0 = px.saturating_sub(half);
    let x1 = (px + half).min(w - 1);
    let y0 = py.saturating_sub(half);
    let y1 = (py + half).min(h - 1);

    let mut acc = [0.0; 3];
    let mut count = 0.0;
    for y in y0..=y1 {
        for x in x0..=x1 {
            let c = pixel_to_unit(image.get_pixel(x, y));
            for k in 0..3 {
                acc[k] += c[k];
            }
            count += 1.0;
        }
    }
    acc.map(|v| v / count)
}

/// Nearest-sample lookup with adjacent-sample interpolation for sub-sample
/// precision. `Err(best_distance)` when even the best match exceeds the
/// tolerance.
fn lookup_value(map: &ColourMap, colour: [Real; 3], tolerance: Real) -> Result<Real, Real> {
    let samples = map.samples();
    let mut best = (0_usize, Real::INFINITY);
    let mut second = (0_usize, Real::INFINITY);
    for (i, s) in samples.iter().enumerate() {
        let d = colour_distance(s.colour, colour);
        if d < best.1 {
            second = best;
            best = (i, d);
        } else if d < second.1 {
            second = (i, d);
        }
    }

    if best.1 > tolerance {
        return Err(best.1);
    }

    // Two nearest samples bracket the pixel colour only when they are
    // neighbours on the ramp; otherwise (diverging ramps, repeated colours)
    // trust the nearest sample alone.
    if second.1.is_finite() && best.0.abs_diff(second.0) == 1 {
        let denom = best.1 + second.1;
        if denom > Real::EPSILON {
            let w = best.1 / denom;
            return Ok(samples[best.0].value * (1.0 - w) + samples[second.0].value * w);
        }
    }
    Ok(samples[best.0].value)
}
