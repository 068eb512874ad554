//! Error types for case handling.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProjectError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Case file parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Case validation failed: {what}")]
    Validation { what: String },

    #[error(transparent)]
    Field(#[from] sg_field::FieldError),

    #[error(transparent)]
    Mesh(#[from] sg_mesh::MeshError),

    #[error(transparent)]
    Contour(#[from] sg_contour::ContourError),
}

pub type ProjectResult<T> = Result<T, ProjectError>;
