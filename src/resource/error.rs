// Resource error taxonomy
// Maps handler failures to HTTP statuses; parse and storage failures are
// intentionally conflated into 500 to match the service's contract

use hyper::StatusCode;
use thiserror::Error;

use crate::storage::StorageError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Requested id absent from its collection
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Blob unreadable, unwritable, or not valid JSON on load
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Request body is not a valid JSON object
    #[error("invalid JSON body: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ApiError {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Storage(_) | Self::Parse(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
