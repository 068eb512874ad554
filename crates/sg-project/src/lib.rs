//! sg-project: case-file loading, validation, and compilation.
//!
//! A case file is the single YAML document describing one boundary-condition
//! run: the inlet geometry, either a vortex definition section or a contour
//! reconstruction section (or both, chosen at the CLI), and output metadata.
//! `schema` is the serde surface, `validate` checks it, `compile` turns it
//! into the runtime objects the engines consume.

pub mod compile;
pub mod error;
pub mod schema;
pub mod validate;

use std::path::Path;

pub use error::{ProjectError, ProjectResult};
pub use schema::CaseDef;

/// Load a case file from disk.
pub fn load_case(path: &Path) -> ProjectResult<CaseDef> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&text)?)
}

/// Parse a case from YAML text (tests, embedded cases).
pub fn parse_case(text: &str) -> ProjectResult<CaseDef> {
    Ok(serde_yaml::from_str(text)?)
}
