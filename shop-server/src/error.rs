use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use shop_identity::AuthError;
use shop_storage::{StorageError, StoreError};
use thiserror::Error;

/// Request failures and their HTTP mapping
///
/// | Variant        | Status |
/// |----------------|--------|
/// | `Unauthorized` | 401    |
/// | `NotFound`     | 404    |
/// | `BadRequest`   | 400    |
/// | `Internal`     | 500    |
///
/// Bodies are `{"error": "<message>"}`; internal causes are logged, not
/// returned.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Unauthorized: {0}")]
    Unauthorized(#[from] AuthError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for ServerError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::ItemNotFound(_) => ServerError::NotFound(e.to_string()),
        }
    }
}

impl From<StorageError> for ServerError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::InvalidKey(_) => ServerError::BadRequest(e.to_string()),
            other => ServerError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ServerError::Unauthorized(e) => {
                let body = Json(json!({ "error": e.to_string() }));
                return (
                    StatusCode::UNAUTHORIZED,
                    [(header::WWW_AUTHENTICATE, "Bearer")],
                    body,
                )
                    .into_response();
            }
            ServerError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            ServerError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ServerError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".into(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

pub type ServerResult<T> = Result<T, ServerError>;
