use crate::error::ServerResult;
use crate::state::AppState;
use axum::{Extension, Json, extract::State};
use serde::Serialize;
use shop_identity::Identity;
use shop_storage::Document;

#[derive(Serialize)]
pub struct StoredResponse {
    pub status: &'static str,
    pub user_id: String,
    pub data: Document,
}

/// Fetch outcome; a missing document is reported in the body, not the status
#[derive(Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum FetchResponse {
    Success { data: Document },
    Error { message: &'static str },
}

/// POST /users
/// Replaces the caller's document with the request body
pub async fn put_user_data(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Json(payload): Json<Document>,
) -> ServerResult<Json<StoredResponse>> {
    state.documents.put(identity.uid(), &payload).await?;

    Ok(Json(StoredResponse {
        status: "success",
        user_id: identity.uid().to_owned(),
        data: payload,
    }))
}

/// GET /users
pub async fn get_user_data(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
) -> ServerResult<Json<FetchResponse>> {
    let response = match state.documents.get(identity.uid()).await? {
        Some(data) => FetchResponse::Success { data },
        None => FetchResponse::Error {
            message: "User data not found",
        },
    };

    Ok(Json(response))
}
