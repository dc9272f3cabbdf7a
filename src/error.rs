use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error code reported to the sink when the location source lacks permission
pub const PERMISSION_DENIED: i32 = 2;

/// Location core error types
#[derive(Error, Debug)]
pub enum LocationError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to read configuration: {0}")]
    ConfigIo(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("Filter worker is not running")]
    WorkerStopped,

    #[error("No event bus attached")]
    NoEventBus,

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type for fallible location core operations
pub type LResult<T> = Result<T, LocationError>;

/// Error record forwarded to the sink on behalf of the location source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderError {
    pub code: i32,
    pub message: String,
}

impl ProviderError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn permission_denied(message: impl Into<String>) -> Self {
        Self::new(PERMISSION_DENIED, message)
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
