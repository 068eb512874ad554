//! Error types for boundary-condition output.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BcError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Snapshot serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Field/node mismatch: {what} (field len={field_len}, nodes len={nodes_len})")]
    Mismatch {
        what: &'static str,
        field_len: usize,
        nodes_len: usize,
    },

    #[error("Snapshot format invalid: {what}")]
    BadSnapshot { what: String },

    #[error(transparent)]
    Field(#[from] sg_field::FieldError),
}

pub type BcResult<T> = Result<T, BcError>;
