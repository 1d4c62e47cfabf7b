//! Error types for the hydrobond client

use bridge_traits::error::BridgeError;
use core_auth::AuthError;
use thiserror::Error;

/// Hydrobond client errors
///
/// Configuration and validation failures are detected locally, before any
/// request is sent. Everything the transport or the server reports arrives
/// as [`HydrobondError::Transport`].
#[derive(Error, Debug)]
pub enum HydrobondError {
    /// A required credential is empty or a base URL cannot carry endpoint
    /// paths
    #[error("{0}")]
    Configuration(String),

    /// A caller-supplied parameter is out of range
    #[error("{0}")]
    Validation(String),

    /// Network failure, non-2xx status or undecodable response body
    #[error(transparent)]
    Transport(#[from] BridgeError),
}

impl HydrobondError {
    /// HTTP status of a rejected request, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            HydrobondError::Transport(err) => err.status(),
            _ => None,
        }
    }
}

impl From<AuthError> for HydrobondError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Configuration(message) => HydrobondError::Configuration(message),
            AuthError::Transport(err) => HydrobondError::Transport(err),
        }
    }
}

pub type Result<T> = std::result::Result<T, HydrobondError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_configuration_keeps_message() {
        let err: HydrobondError = AuthError::Configuration("clientId is empty".to_string()).into();

        assert!(matches!(err, HydrobondError::Configuration(_)));
        assert_eq!(err.to_string(), "clientId is empty");
    }

    #[test]
    fn test_auth_transport_maps_to_transport() {
        let err: HydrobondError = AuthError::Transport(BridgeError::Status {
            status: 401,
            body: "unauthorized".to_string(),
        })
        .into();

        assert!(matches!(err, HydrobondError::Transport(_)));
        assert_eq!(err.status(), Some(401));
    }

    #[test]
    fn test_validation_displays_bare_message() {
        let err = HydrobondError::Validation("count must be less than or equal to 100".to_string());

        assert_eq!(err.to_string(), "count must be less than or equal to 100");
        assert_eq!(err.status(), None);
    }
}
