//! Error types for record construction.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("record source must be a JSON object, {0} given")]
    NotAnObject(&'static str),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RecordError>;
