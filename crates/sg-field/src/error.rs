//! Error types for field synthesis.

use sg_core::{NodeId, SgError};
use thiserror::Error;

/// Errors that can occur while synthesizing or assembling a velocity field.
#[derive(Error, Debug)]
pub enum FieldError {
    #[error("Unsupported vortex model '{tag}' (expected one of: lo, solid, iso)")]
    UnknownModel { tag: String },

    #[error("Configuration error: {what}")]
    Config { what: String },

    #[error("Missing input: {what}")]
    MissingInput { what: &'static str },

    #[error("Field/node mismatch: {what} (field len={field_len}, nodes len={nodes_len})")]
    Mismatch {
        what: &'static str,
        field_len: usize,
        nodes_len: usize,
    },

    #[error("Numerical instability at node {node}: {what}")]
    NonFinite { node: NodeId, what: String },

    #[error(transparent)]
    Core(#[from] SgError),
}

pub type FieldResult<T> = Result<T, FieldError>;
