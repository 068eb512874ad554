//! Error types for contour digitization.

use sg_core::{NodeId, Real};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContourError {
    #[error("Unsupported colour ramp '{name}' (expected one of: viridis, plasma, jet)")]
    UnknownRamp { name: String },

    #[error("Configuration error: {what}")]
    Config { what: String },

    #[error("Colour-bar extraction failed: {what}")]
    Degenerate { what: String },

    #[error(
        "Pixel colour at ({px}, {py}) for node {node} not on the colour bar \
         (distance {distance:.4} exceeds tolerance {tolerance:.4})"
    )]
    OutOfRange {
        node: NodeId,
        px: u32,
        py: u32,
        distance: Real,
        tolerance: Real,
    },

    #[error("Missing input: {what}")]
    MissingInput { what: &'static str },

    #[error("Field/node mismatch: {what} (field len={field_len}, nodes len={nodes_len})")]
    Mismatch {
        what: &'static str,
        field_len: usize,
        nodes_len: usize,
    },
}

pub type ContourResult<T> = Result<T, ContourError>;
