use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a call against the listing backend
#[derive(Debug, Error)]
pub enum ApiError {
    /// Backend answered with a non-2xx status
    #[error("backend returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// Connection, TLS or body decoding failure
    #[error("request to backend failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// `GET /api/properties/{id}` found no matching record
    #[error("property {0} not found")]
    NotFound(String),
}

impl ApiError {
    /// HTTP status when the backend produced one
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status(),
            ApiError::NotFound(_) => Some(StatusCode::NOT_FOUND),
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}
