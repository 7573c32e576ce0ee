use crate::error::ServerError;
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

/// Middleware that authenticates the bearer token and inserts the verified
/// `Identity` into request extensions
pub async fn require_identity(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ServerError> {
    let identity = {
        let header = request
            .headers()
            .get(header::AUTHORIZATION)
            .map(|value| value.as_bytes());
        state.gate.authenticate_bytes(header).await?
    };
    request.extensions_mut().insert(identity);

    Ok(next.run(request).await)
}
