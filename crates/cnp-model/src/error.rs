use thiserror::Error;

/// Errors produced when constructing model values from raw text.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown gender: {0}")]
    UnknownGender(String),
}
