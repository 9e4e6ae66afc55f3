//! REST API handlers for storefront path resolution

use crate::cart::state::SharedState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

/// Query parameters for the resolve endpoint
#[derive(Debug, Deserialize)]
pub struct ResolveQuery {
    /// Path to resolve, `/` when omitted
    pub path: Option<String>,
}

/// Creates routes for page-table operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/pages", get(list_pages))
        .route("/pages/resolve", get(resolve_page))
}

/// Endpoint: GET /pages
/// Lists the route table in match order.
async fn list_pages(State(state): State<SharedState>) -> impl IntoResponse {
    Json(json!({ "routes": state.pages.routes() }))
}

/// Endpoint: GET /pages/resolve?path=...
/// Resolves a storefront path to its route.
async fn resolve_page(
    State(state): State<SharedState>,
    Query(query): Query<ResolveQuery>,
) -> impl IntoResponse {
    let path = query.path.as_deref().unwrap_or("/");

    match state.pages.resolve(path) {
        Some(matched) => Json(json!(matched)).into_response(),
        None => {
            warn!(path, "no route matched");
            (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": format!("No route matches {path}") })),
            )
                .into_response()
        }
    }
}
