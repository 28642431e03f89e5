use thiserror::Error;

/// Errors surfaced by the API client.
///
/// Every variant names the resource that failed so the one user-visible
/// message can say which part of the refresh broke.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("failed to load {resource}: HTTP {status}")]
    Status {
        resource: &'static str,
        status: reqwest::StatusCode,
    },

    #[error("failed to load {resource}: {source}")]
    Transport {
        resource: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to decode {resource}: {source}")]
    Decode {
        resource: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("invalid API base url: {0}")]
    BaseUrl(#[from] url::ParseError),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// The resource this error relates to, if any.
    pub fn resource(&self) -> Option<&'static str> {
        match self {
            ApiError::Status { resource, .. }
            | ApiError::Transport { resource, .. }
            | ApiError::Decode { resource, .. } => Some(resource),
            ApiError::BaseUrl(_) => None,
        }
    }
}
