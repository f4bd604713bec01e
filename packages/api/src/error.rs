//! Errors returned by [`crate::ApiClient`].
//!
//! Transport failures and non-2xx statuses are kept apart so callers can pick a retry
//! policy; the list views still collapse them into one message.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The backend could not be reached or the connection broke.
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-2xx status.
    #[error("request failed with status {status}{}", detail_suffix(.detail))]
    Status { status: u16, detail: Option<String> },
    /// The body did not match the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail.as_ref().map(|d| format!(": {d}")).unwrap_or_default()
}

/// Coarse classification of an [`ApiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    ClientError,
    ServerError,
    Decode,
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Network(_) => ErrorKind::Network,
            ApiError::Status { status, .. } if (400..500).contains(status) => ErrorKind::ClientError,
            ApiError::Status { .. } => ErrorKind::ServerError,
            ApiError::Decode(_) => ErrorKind::Decode,
        }
    }

    /// Whether repeating the same request could succeed. 4xx and decode errors won't.
    pub fn is_retryable(&self) -> bool {
        matches!(self.kind(), ErrorKind::Network | ErrorKind::ServerError)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}
