//! Case schema definitions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaseDef {
    pub version: u32,
    pub name: String,
    pub output: OutputDef,
    pub inlet: InletDef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vortex: Option<VortexSectionDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contour: Option<ContourSectionDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boundary_layer: Option<BoundaryLayerDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputDef {
    /// Boundary-condition file to write
    pub filename: PathBuf,
    /// Solver format; only `su2` is supported
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "su2".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum InletDef {
    Circle {
        radius: f64,
        x_cells: u32,
        y_cells: u32,
    },
    Rect {
        x_side: f64,
        y_side: f64,
        x_cells: u32,
        y_cells: u32,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VortexSectionDef {
    /// Vortex model tag applied to every vortex: lo, solid, or iso
    pub model: String,
    #[serde(default = "default_axial_velocity")]
    pub axial_velocity: f64,
    #[serde(default)]
    pub vortices: Vec<VortexDef>,
}

fn default_axial_velocity() -> f64 {
    1.0
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VortexDef {
    pub center: [f64; 2],
    pub strength: f64,
    pub core_radius: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContourSectionDef {
    pub tangential: ContourPlotDef,
    pub radial: ContourPlotDef,
    #[serde(default = "default_axial_velocity")]
    pub axial_velocity: f64,
}

/// One digitization target: the plot image and how to read it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContourPlotDef {
    pub image: PathBuf,
    /// Declared scalar range of the colour bar [deg]
    pub value_range: [f64; 2],
    /// Named reference ramp; alternative to `colour_bar`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ramp: Option<String>,
    /// Colour-bar legend strip inside the image; alternative to `ramp`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colour_bar: Option<ColourBarDef>,
    /// Physical extents of the plotted axes
    pub x_extent: [f64; 2],
    pub y_extent: [f64; 2],
    /// Pixel rectangle the extents cover; whole image when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plot_region: Option<RegionDef>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegionDef {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ColourBarDef {
    #[serde(flatten)]
    pub region: RegionDef,
    pub orientation: OrientationDef,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OrientationDef {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BoundaryLayerDef {
    /// Duct reference length [m] for the flat-plate thickness correlation
    pub ref_length: f64,
}
