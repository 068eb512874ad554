//! sg-contour: flow-field reconstruction from contour-plot images.
//!
//! When only a plotted reference of the target swirl profile exists, this
//! crate inverts it: a colour map (from a named ramp or the plot's own
//! colour-bar strip) plus a node-to-pixel mapping turn pixel colours back
//! into per-node flow angles. The renderer is the forward direction of the
//! same mapping and exists to validate the inversion.

pub mod axes;
pub mod colourmap;
pub mod digitize;
pub mod error;
pub mod ramp;
pub mod render;

pub use axes::PlotAxes;
pub use colourmap::{ColourMap, ColourSample, StripOrientation};
pub use digitize::{DigitizerOptions, digitize};
pub use error::{ContourError, ContourResult};
pub use ramp::NamedRamp;
pub use render::render_field;
