//! Authentication error types

use thiserror::Error;

pub type AuthResult<T> = Result<T, AuthError>;

/// Why a request could not be authenticated
///
/// `Display` is the caller-facing message. `InvalidToken` and
/// `ProviderUnavailable` render identically; use [`AuthError::kind`] to tell
/// them apart in logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Authorization header missing or not of the form `Bearer <token>`
    #[error("{0}")]
    Unauthenticated(String),

    /// The verifier rejected the credential (expired, malformed, bad signature)
    #[error("Invalid token or verification failed: {0}")]
    InvalidToken(String),

    /// The verifier could not be reached or did not answer in time
    #[error("Invalid token or verification failed: {0}")]
    ProviderUnavailable(String),
}

impl AuthError {
    /// Stable identifier for logging
    pub fn kind(&self) -> &'static str {
        match self {
            AuthError::Unauthenticated(_) => "unauthenticated",
            AuthError::InvalidToken(_) => "invalid_token",
            AuthError::ProviderUnavailable(_) => "provider_unavailable",
        }
    }
}
