//! Remote identity verification over HTTP

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::Value;

use crate::error::{AuthError, AuthResult};
use crate::identity::{Claims, Identity};
use crate::verifier::IdentityVerifier;

#[derive(Serialize)]
struct VerifyRequest<'a> {
    id_token: &'a str,
}

/// Delegates token checks to an external verification endpoint
///
/// Protocol: `POST {url}` with `{"id_token": "<token>"}`. A 2xx answer
/// carries the decoded claims as a JSON object; 400/401/403 mean the token
/// was rejected; anything else means the provider is unavailable.
pub struct RemoteVerifier {
    client: Client,
    url: String,
}

impl RemoteVerifier {
    /// Create a verifier whose requests are bounded by `timeout`
    pub fn new(url: impl Into<String>, timeout: Duration) -> AuthResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AuthError::ProviderUnavailable(format!("http client: {e}")))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl IdentityVerifier for RemoteVerifier {
    async fn verify(&self, token: &str) -> AuthResult<Identity> {
        let response = self
            .client
            .post(&self.url)
            .json(&VerifyRequest { id_token: token })
            .send()
            .await
            .map_err(|e| AuthError::ProviderUnavailable(e.to_string()))?;

        let status = response.status();

        if status.is_success() {
            let claims: Claims = response.json().await.map_err(|e| {
                AuthError::ProviderUnavailable(format!("undecodable verification response: {e}"))
            })?;
            return Identity::from_claims(claims);
        }

        if matches!(
            status,
            StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN
        ) {
            let body: Option<Value> = response.json().await.ok();
            return Err(AuthError::InvalidToken(rejection_cause(status, body.as_ref())));
        }

        Err(AuthError::ProviderUnavailable(format!(
            "identity provider returned {status}"
        )))
    }
}

/// Provider-reported reason for a rejection, falling back to the status text
fn rejection_cause(status: StatusCode, body: Option<&Value>) -> String {
    body.and_then(|b| b.get("error").or_else(|| b.get("message")))
        .and_then(Value::as_str)
        .map(str::to_owned)
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("token rejected")
                .to_owned()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rejection_cause_prefers_error_field() {
        let body = json!({ "error": "Token expired", "message": "ignored" });
        assert_eq!(
            rejection_cause(StatusCode::UNAUTHORIZED, Some(&body)),
            "Token expired"
        );

        let body = json!({ "message": "Signature invalid" });
        assert_eq!(
            rejection_cause(StatusCode::BAD_REQUEST, Some(&body)),
            "Signature invalid"
        );
    }

    #[test]
    fn test_rejection_cause_falls_back_to_status() {
        assert_eq!(rejection_cause(StatusCode::FORBIDDEN, None), "Forbidden");
        let body = json!({ "error": 42 });
        assert_eq!(
            rejection_cause(StatusCode::UNAUTHORIZED, Some(&body)),
            "Unauthorized"
        );
    }
}
