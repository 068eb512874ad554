//! sg-bc: boundary-condition output.
//!
//! Writes the per-node velocity records the engines produce: SU2
//! inlet-profile files for the solver, and JSON snapshots for inspection and
//! re-use of a computed field without re-running the engines.

pub mod error;
pub mod snapshot;
pub mod su2;

pub use error::{BcError, BcResult};
pub use snapshot::FieldSnapshot;
pub use su2::{format_su2_inlet, write_su2_inlet};
