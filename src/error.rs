// Error taxonomy shared by the data source, coordinator and state layers.

use serde::Serialize;

#[derive(Debug)]
pub enum ApiError {
    /// Entity absent upstream (HTTP 404). Soft: callers degrade to
    /// empty or partial results instead of surfacing it.
    NotFound(String),
    /// Transport failure or any non-2xx status other than 404.
    RemoteUnavailable(String),
    /// Payload that cannot be decoded, or decodes without an id.
    MappingDefect(String),
    /// Bad embedded configuration, caught at startup.
    Config(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::NotFound(what) => write!(f, "Not found upstream: {}", what),
            ApiError::RemoteUnavailable(msg) => write!(f, "Upstream unavailable: {}", msg),
            ApiError::MappingDefect(msg) => write!(f, "Malformed payload: {}", msg),
            ApiError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::MappingDefect(err.to_string())
        } else {
            ApiError::RemoteUnavailable(err.to_string())
        }
    }
}

impl From<toml::de::Error> for ApiError {
    fn from(err: toml::de::Error) -> Self {
        ApiError::Config(err.to_string())
    }
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::NotFound(_) => ErrorKind::NotFound,
            ApiError::RemoteUnavailable(_) => ErrorKind::RemoteUnavailable,
            ApiError::MappingDefect(_) => ErrorKind::MappingDefect,
            ApiError::Config(_) => ErrorKind::Config,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound(_))
    }
}

/// Classification of an [`ApiError`] carried in state snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    NotFound,
    RemoteUnavailable,
    MappingDefect,
    Config,
}
