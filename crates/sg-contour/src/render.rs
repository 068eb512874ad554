//! Scalar field -> contour image, the forward direction of the mapping.
//!
//! Exists to validate the inverse: rendering a known field and digitizing it
//! back with the same colour map must recover the field within sampling
//! tolerance. Also handy as a quick visual self-check from the CLI.

use crate::axes::PlotAxes;
use crate::colourmap::{ColourMap, unit_to_pixel};
use crate::error::{ContourError, ContourResult};
use image::{Rgb, RgbImage};
use sg_field::ScalarField;
use sg_mesh::MeshNode;

/// Paint each node's value colour into a block around its mapped pixel.
///
/// `brush` is the painted half-width in pixels; it should cover the node
/// spacing so the digitizer's neighborhood average reads back clean colour.
pub fn render_field(
    nodes: &[MeshNode],
    field: &ScalarField,
    colour_map: &ColourMap,
    axes: &PlotAxes,
    image_width: u32,
    image_height: u32,
    background: Rgb<u8>,
    brush: u32,
) -> ContourResult<RgbImage> {
    if nodes.is_empty() {
        return Err(ContourError::MissingInput {
            what: "at least one mesh node",
        });
    }
    if field.len() != nodes.len() {
        return Err(ContourError::Mismatch {
            what: "field rendering",
            field_len: field.len(),
            nodes_len: nodes.len(),
        });
    }

    let mut image = RgbImage::from_pixel(image_width, image_height, background);
    for (node, &value) in nodes.iter().zip(field.values()) {
        let (px, py) = axes.to_pixel(&node.position);
        let colour = unit_to_pixel(colour_map.colour_for_value(value));
        let x0 = px.saturating_sub(brush);
        let x1 = (px + brush).min(image_width - 1);
        let y0 = py.saturating_sub(brush);
        let y1 = (py + brush).min(image_height - 1);
        for y in y0..=y1 {
            for x in x0..=x1 {
                image.put_pixel(x, y, colour);
            }
        }
    }
    Ok(image)
}
