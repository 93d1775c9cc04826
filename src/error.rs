use reqwest::header::HeaderMap;
use reqwest::{StatusCode, Url};

#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Unexpected HTTP response: {status} from {url}")]
    UnexpectedHttpResponse {
        status: StatusCode,
        url: Url,
        headers: HeaderMap,
    },

    #[error("Misc error: {0}")]
    Misc(String),

    #[error("Fetch image error: {0}")]
    FetchImage(String),
}

impl NetworkError {
    /// True when the failure happened below HTTP (DNS, TLS, connect, timeout).
    pub fn is_request(&self) -> bool {
        matches!(self, NetworkError::Request(_))
    }

    /// The HTTP status code, if the server answered with a non-2xx status.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            NetworkError::UnexpectedHttpResponse { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, NetworkError>;
