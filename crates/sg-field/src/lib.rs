//! sg-field: analytic synthesis of swirling inlet velocity fields.
//!
//! The synthesizer superposes discrete vortex models (Lamb-Oseen, solid,
//! isolated) at mesh node coordinates and fills in the axial component; the
//! assembler builds the same per-node velocity records from digitized flow
//! angle fields instead. Both feed the boundary-condition writer.

pub mod assemble;
pub mod boundary_layer;
pub mod check;
pub mod error;
pub mod field;
pub mod synthesize;
pub mod vortex;

pub use assemble::assemble;
pub use boundary_layer::BoundaryLayer;
pub use check::{BoundaryReport, check_boundaries};
pub use error::{FieldError, FieldResult};
pub use field::{ScalarField, VelocityField};
pub use synthesize::synthesize;
pub use vortex::{Vortex, VortexModel};
