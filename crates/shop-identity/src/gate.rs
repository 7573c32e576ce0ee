//! Auth gate: Authorization header -> verified identity

use std::sync::Arc;
use std::time::Duration;

use crate::error::{AuthError, AuthResult};
use crate::identity::Identity;
use crate::verifier::IdentityVerifier;

/// Scheme prefix required on the Authorization header
const BEARER_PREFIX: &str = "Bearer ";

/// Upper bound on a single verification call
pub const DEFAULT_VERIFY_TIMEOUT: Duration = Duration::from_secs(5);

/// Extract the token from a `Bearer <token>` header value
///
/// The scheme is case-sensitive and the token must be non-empty and free of
/// whitespace.
pub fn extract_bearer(header: &str) -> AuthResult<&str> {
    let token = header.strip_prefix(BEARER_PREFIX).ok_or_else(|| {
        AuthError::Unauthenticated("Authorization header must be of the form 'Bearer <token>'".into())
    })?;

    if token.is_empty() || token.chars().any(char::is_whitespace) {
        return Err(AuthError::Unauthenticated(
            "Authorization header carries an empty or malformed token".into(),
        ));
    }

    Ok(token)
}

/// Resolves request credentials into an [`Identity`]
///
/// Cheap to clone; the verifier is shared.
#[derive(Clone)]
pub struct AuthGate {
    verifier: Arc<dyn IdentityVerifier>,
    timeout: Duration,
}

impl AuthGate {
    pub fn new(verifier: Arc<dyn IdentityVerifier>) -> Self {
        Self {
            verifier,
            timeout: DEFAULT_VERIFY_TIMEOUT,
        }
    }

    /// Bound the verification call; on expiry the request fails closed
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Authenticate a request from its Authorization header value
    pub async fn authenticate(&self, header: Option<&str>) -> AuthResult<Identity> {
        let result = self.resolve(header).await;
        record(&result);
        result
    }

    /// Same as [`AuthGate::authenticate`], for a header still in wire bytes
    ///
    /// A value that is not UTF-8 is rejected as unauthenticated.
    pub async fn authenticate_bytes(&self, header: Option<&[u8]>) -> AuthResult<Identity> {
        let result = match header.map(std::str::from_utf8).transpose() {
            Ok(header) => self.resolve(header).await,
            Err(_) => Err(AuthError::Unauthenticated(
                "Authorization header is not valid UTF-8".into(),
            )),
        };
        record(&result);
        result
    }

    async fn resolve(&self, header: Option<&str>) -> AuthResult<Identity> {
        let header = header
            .ok_or_else(|| AuthError::Unauthenticated("Authorization header missing".into()))?;
        let token = extract_bearer(header)?;

        match tokio::time::timeout(self.timeout, self.verifier.verify(token)).await {
            Ok(result) => result,
            Err(_) => Err(AuthError::ProviderUnavailable(format!(
                "verification timed out after {}ms",
                self.timeout.as_millis()
            ))),
        }
    }
}

fn record(result: &AuthResult<Identity>) {
    match result {
        Ok(identity) => tracing::debug!(uid = identity.uid(), "request authenticated"),
        Err(e @ AuthError::ProviderUnavailable(_)) => {
            tracing::error!(kind = e.kind(), error = %e, "identity provider unavailable")
        }
        Err(e) => tracing::warn!(kind = e.kind(), error = %e, "authentication rejected"),
    }
}
