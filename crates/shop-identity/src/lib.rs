//! shop-identity: Bearer-token authentication for the shop API
//!
//! Resolves an `Authorization` header into a verified [`Identity`] by
//! delegating the credential to an [`IdentityVerifier`]. The verifier is an
//! injected capability, so the gate never knows how tokens are checked.
//!
//! ## Verifiers
//!
//! | Verifier             | Use Case                                  |
//! |----------------------|-------------------------------------------|
//! | `FixedTokenVerifier` | Tests and local development               |
//! | `RemoteVerifier`     | External identity verification endpoint   |
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use shop_identity::{AuthGate, FixedTokenVerifier, Identity};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let verifier = FixedTokenVerifier::new()
//!         .with_token("dev-token", Identity::new("uid-1", "dev@example.com"));
//!     let gate = AuthGate::new(Arc::new(verifier));
//!
//!     let identity = gate.authenticate(Some("Bearer dev-token")).await?;
//!     assert_eq!(identity.uid(), "uid-1");
//!
//!     Ok(())
//! }
//! ```

mod error;
mod fixed;
mod gate;
mod identity;
mod remote;
mod verifier;

// Re-exports
pub use error::{AuthError, AuthResult};
pub use fixed::FixedTokenVerifier;
pub use gate::{AuthGate, DEFAULT_VERIFY_TIMEOUT, extract_bearer};
pub use identity::{Claims, Identity};
pub use remote::RemoteVerifier;
pub use verifier::IdentityVerifier;
