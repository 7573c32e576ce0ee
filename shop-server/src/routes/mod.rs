use crate::middleware::require_identity;
use crate::state::AppState;
use axum::{
    Router, middleware as axum_middleware,
    routing::{get, put},
};
use tower_http::trace::TraceLayer;

mod docs;
mod health;
mod items;
mod users;

pub fn router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/items", get(items::list_items).post(items::create_item))
        .route(
            "/items/{id}",
            put(items::update_item).delete(items::delete_item),
        )
        .route(
            "/users",
            get(users::get_user_data).post(users::put_user_data),
        )
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            require_identity,
        ));

    let public = Router::new()
        .route("/", get(docs::root_redirect))
        .route("/hello", get(docs::hello_world))
        .route("/health", get(health::health_check))
        .route("/openapi.json", get(docs::openapi));

    Router::new()
        .merge(protected)
        .merge(public)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
