//! Verified caller identity

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{AuthError, AuthResult};

/// Decoded token claims, as reported by the verifier
pub type Claims = Map<String, Value>;

/// Claim names that may carry the caller's uid, in order of preference
const UID_CLAIMS: [&str; 3] = ["uid", "user_id", "sub"];

/// Verified claims about the caller
///
/// Built fresh for every authenticated request and never persisted. Fields
/// are private so an identity cannot be altered after verification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Identity {
    uid: String,
    email: String,
    claims: Claims,
}

impl Identity {
    pub fn new(uid: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            email: email.into(),
            claims: Claims::new(),
        }
    }

    /// Attach the raw claim set
    pub fn with_claims(mut self, claims: Claims) -> Self {
        self.claims = claims;
        self
    }

    /// Build an identity from a decoded claim set
    ///
    /// The uid comes from the first non-empty string among `uid`, `user_id`
    /// and `sub`. A missing `email` yields an empty string.
    pub fn from_claims(claims: Claims) -> AuthResult<Self> {
        let uid = UID_CLAIMS
            .iter()
            .filter_map(|key| claims.get(*key).and_then(Value::as_str))
            .find(|v| !v.is_empty())
            .map(str::to_owned)
            .ok_or_else(|| AuthError::InvalidToken("token claims carry no uid".into()))?;

        let email = claims
            .get("email")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_owned();

        Ok(Self { uid, email, claims })
    }

    pub fn uid(&self) -> &str {
        &self.uid
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn claims(&self) -> &Claims {
        &self.claims
    }
}
