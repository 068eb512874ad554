//! Error types for mesh/node supply.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MeshError {
    #[error("Invalid inlet shape: {what}")]
    InvalidShape { what: &'static str },

    #[error("Invalid grid resolution: {what}")]
    InvalidGrid { what: &'static str },
}

pub type MeshResult<T> = Result<T, MeshError>;
