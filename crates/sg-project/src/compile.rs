//! Compile a validated case into the runtime objects the engines consume.

use crate::error::ProjectResult;
use crate::schema::{CaseDef, ColourBarDef, ContourPlotDef, InletDef, OrientationDef, VortexSectionDef};
use nalgebra::Point2;
use sg_contour::{ColourMap, NamedRamp, PlotAxes, StripOrientation};
use sg_field::{Vortex, VortexModel};
use sg_mesh::{InletShape, MeshNode, structured_nodes};

/// Inlet shape from the case definition.
pub fn inlet_shape(inlet: &InletDef) -> InletShape {
    match *inlet {
        InletDef::Circle { radius, .. } => InletShape::Circle { radius },
        InletDef::Rect { x_side, y_side, .. } => InletShape::Rect { x_side, y_side },
    }
}

/// Structured inlet nodes for the case.
pub fn build_nodes(case: &CaseDef) -> ProjectResult<Vec<MeshNode>> {
    let (x_cells, y_cells) = match case.inlet {
        InletDef::Circle {
            x_cells, y_cells, ..
        }
        | InletDef::Rect {
            x_cells, y_cells, ..
        } => (x_cells, y_cells),
    };
    Ok(structured_nodes(inlet_shape(&case.inlet), x_cells, y_cells)?)
}

/// Vortex list from the vortex section; the single model tag applies to
/// every vortex in the case.
pub fn build_vortices(section: &VortexSectionDef) -> ProjectResult<Vec<Vortex>> {
    let model: VortexModel = section.model.parse()?;
    section
        .vortices
        .iter()
        .map(|def| {
            Ok(Vortex::new(
                model,
                Point2::new(def.center[0], def.center[1]),
                def.strength,
                def.core_radius,
            )?)
        })
        .collect()
}

/// Colour map for a digitization target. A named ramp is evaluated directly;
/// a colour-bar region is cropped out of the plot image and read as a strip.
pub fn build_colour_map(
    plot: &ContourPlotDef,
    image: &image::RgbImage,
    ramp_samples: usize,
) -> ProjectResult<ColourMap> {
    let [vmin, vmax] = plot.value_range;
    if let Some(name) = &plot.ramp {
        let ramp: NamedRamp = name.parse()?;
        return Ok(ColourMap::from_named_ramp(ramp, ramp_samples, vmin, vmax)?);
    }
    let Some(bar) = plot.colour_bar else {
        return Err(crate::ProjectError::Validation {
            what: format!(
                "{}: needs a ramp name or a colour_bar region",
                plot.image.display()
            ),
        });
    };
    let strip = crop(image, &bar);
    let orientation = match bar.orientation {
        OrientationDef::Horizontal => StripOrientation::Horizontal,
        OrientationDef::Vertical => StripOrientation::Vertical,
    };
    Ok(ColourMap::from_image_strip(&strip, orientation, vmin, vmax)?)
}

/// Plot axes for a digitization target; the whole image when no region is
/// declared.
pub fn build_axes(plot: &ContourPlotDef, image: &image::RgbImage) -> ProjectResult<PlotAxes> {
    let x = (plot.x_extent[0], plot.x_extent[1]);
    let y = (plot.y_extent[0], plot.y_extent[1]);
    let axes = match &plot.plot_region {
        Some(r) => PlotAxes::new(x, y, r.left, r.top, r.width, r.height)?,
        None => PlotAxes::full_image(x, y, image.width(), image.height())?,
    };
    Ok(axes)
}

fn crop(image: &image::RgbImage, bar: &ColourBarDef) -> image::RgbImage {
    let r = bar.region;
    image::imageops::crop_imm(image, r.left, r.top, r.width, r.height).to_image()
}
