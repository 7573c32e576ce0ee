//! shop-server: HTTP API for shop items and per-user documents
//!
//! Every route except `/`, `/hello`, `/health` and `/openapi.json` requires
//! an `Authorization: Bearer <token>` header, checked by
//! [`middleware::require_identity`] before the handler runs.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;
