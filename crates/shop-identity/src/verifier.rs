//! Identity verification capability

use async_trait::async_trait;

use crate::error::AuthResult;
use crate::identity::Identity;

/// Validates an opaque bearer credential against an identity provider
///
/// Implementations return `AuthError::InvalidToken` when the provider
/// rejects the credential and `AuthError::ProviderUnavailable` when the
/// provider cannot be reached. Callers may block on network I/O here, so
/// no store lock should be held across a call.
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    /// Verify a token and return the claims it carries
    async fn verify(&self, token: &str) -> AuthResult<Identity>;
}
