use thiserror::Error;

pub type SgResult<T> = Result<T, SgError>;

#[derive(Error, Debug)]
pub enum SgError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}
