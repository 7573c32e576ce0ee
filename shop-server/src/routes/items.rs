use crate::error::ServerResult;
use crate::state::AppState;
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use shop_identity::Identity;
use shop_storage::Item;

#[derive(Deserialize)]
pub struct ItemRequest {
    pub name: String,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// GET /items
pub async fn list_items(State(state): State<AppState>) -> Json<Vec<Item>> {
    Json(state.items.list())
}

/// POST /items
pub async fn create_item(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Json(body): Json<ItemRequest>,
) -> (StatusCode, Json<Item>) {
    let item = state.items.create(body.name);
    tracing::info!(uid = identity.uid(), id = item.id, "item created");

    (StatusCode::CREATED, Json(item))
}

/// PUT /items/{id}
/// Unknown ids answer 404 `{"error": "Item not found"}`
pub async fn update_item(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<i64>,
    Json(body): Json<ItemRequest>,
) -> ServerResult<Json<Item>> {
    let item = state.items.update(id, body.name)?;
    tracing::info!(uid = identity.uid(), id, "item renamed");

    Ok(Json(item))
}

/// DELETE /items/{id}
/// Always acknowledged, whether or not the item existed
pub async fn delete_item(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<i64>,
) -> Json<MessageResponse> {
    let removed = state.items.delete(id);
    tracing::info!(uid = identity.uid(), id, removed, "item delete");

    Json(MessageResponse {
        message: "Item deleted",
    })
}
