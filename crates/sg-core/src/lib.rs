//! sg-core: stable foundation for swirlgen.
//!
//! Contains:
//! - numeric (Real + tolerances + angle/float helpers)
//! - ids (stable compact node IDs)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use error::{SgError, SgResult};
pub use ids::NodeId;
pub use numeric::*;
