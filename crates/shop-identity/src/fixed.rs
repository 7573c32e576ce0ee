//! Fixed token table verifier

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::{AuthError, AuthResult};
use crate::identity::Identity;
use crate::verifier::IdentityVerifier;

/// Verifier backed by a static token -> identity table
///
/// Deterministic; used by tests and local development setups where no
/// identity provider is reachable.
#[derive(Debug, Clone, Default)]
pub struct FixedTokenVerifier {
    tokens: HashMap<String, Identity>,
}

impl FixedTokenVerifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(mut self, token: impl Into<String>, identity: Identity) -> Self {
        self.insert(token, identity);
        self
    }

    pub fn insert(&mut self, token: impl Into<String>, identity: Identity) {
        self.tokens.insert(token.into(), identity);
    }

    /// Number of accepted tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[async_trait]
impl IdentityVerifier for FixedTokenVerifier {
    async fn verify(&self, token: &str) -> AuthResult<Identity> {
        self.tokens
            .get(token)
            .cloned()
            .ok_or_else(|| AuthError::InvalidToken("token not recognised".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_known_and_unknown_tokens() {
        let verifier = FixedTokenVerifier::new()
            .with_token("a", Identity::new("uid-a", "a@example.com"))
            .with_token("b", Identity::new("uid-b", "b@example.com"));

        assert_eq!(verifier.len(), 2);
        assert_eq!(verifier.verify("b").await.unwrap().uid(), "uid-b");
        assert!(matches!(
            verifier.verify("c").await,
            Err(AuthError::InvalidToken(_))
        ));
    }
}
