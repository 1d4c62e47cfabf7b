use bridge_traits::error::BridgeError;
use thiserror::Error;

pub(crate) const CLIENT_ID_EMPTY: &str = "clientId is empty";
pub(crate) const CLIENT_SECRET_EMPTY: &str = "clientSecret is empty";

#[derive(Error, Debug)]
pub enum AuthError {
    /// A credential needed by the operation is empty, or the OAuth base URL
    /// cannot carry endpoint paths. Raised before any network access.
    #[error("{0}")]
    Configuration(String),

    /// The token endpoint could not be reached, answered with a non-2xx
    /// status, or returned a body that is not a token response.
    #[error(transparent)]
    Transport(#[from] BridgeError),
}

pub type Result<T> = std::result::Result<T, AuthError>;
