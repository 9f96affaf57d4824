use thiserror::Error;

use super::class::UnknownClass;

/// Failures while rebuilding an instance from a stored dictionary.
#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    #[error("expected an attribute dictionary, found {0}")]
    NotAnObject(String),

    #[error("missing required attribute '{0}'")]
    MissingAttribute(&'static str),

    #[error("attribute '{name}' must be a string")]
    NotAString { name: &'static str },

    #[error("invalid timestamp '{value}' for '{name}'")]
    InvalidTimestamp { name: &'static str, value: String },

    #[error("stored class '{found}' does not match '{expected}'")]
    ClassMismatch { expected: String, found: String },

    #[error(transparent)]
    UnknownClass(#[from] UnknownClass),
}
