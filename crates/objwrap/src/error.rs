//! Error types for proxy operations.

use thiserror::Error;

use crate::target::TargetError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("target must be an object, {given} given")]
    InvalidTarget { given: &'static str },

    #[error("{what} target is not bound")]
    UnboundTarget { what: &'static str },

    #[error("attempted to call {type_name}::{method}")]
    NoSuchMethod { type_name: String, method: String },

    #[error("invalid alias table: {0}")]
    AliasConfig(#[from] toml::de::Error),

    /// Raised by the target itself during a forwarded operation.
    #[error(transparent)]
    Target(TargetError),
}

impl Error {
    /// The target's own error, if this failure came from the target.
    pub fn target_error(&self) -> Option<&TargetError> {
        match self {
            Error::Target(err) => Some(err),
            _ => None,
        }
    }

    pub fn into_target_error(self) -> Option<TargetError> {
        match self {
            Error::Target(err) => Some(err),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
