use thiserror::Error;

/// Result type for request log operations.
pub type Result<T> = std::result::Result<T, StorageError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("app id is required")]
    MissingAppId,
    #[error("app id must be numeric: '{0}'")]
    InvalidAppId(String),
    #[error("provider id is invalid: '{0}'")]
    InvalidProviderId(String),
    #[error("fallback url must be an absolute http(s) url: '{0}'")]
    InvalidFallbackUrl(String),
}

#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage operation timed out: {0}")]
    Timeout(String),
    #[error("storage query failed: {0}")]
    Query(String),
    #[error("stored data is invalid: {0}")]
    InvalidData(String),
}
