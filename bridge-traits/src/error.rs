use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(String),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("JSON serialization failed: {0}")]
    Encode(String),

    #[error("JSON deserialization failed: {0}")]
    Decode(String),
}

impl BridgeError {
    /// Status code of a non-2xx response, if this error carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            BridgeError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, BridgeError>;
