use applink_core::{ConfigError, StorageError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GatewayError>;

/// Errors that stop the gateway from starting or keep running.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("request log unavailable: {0}")]
    Storage(#[from] StorageError),
    #[error("server io failed: {0}")]
    Io(#[from] std::io::Error),
}
