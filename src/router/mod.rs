//! Routing module for the storefront cart application

use crate::cart::state::SharedState;
use axum::{body::Body, extract::Request, middleware::Next, Router};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

/// Creates and configures the application router with all routes and middleware
pub fn create_app_router(state: SharedState) -> Router {
    // Middleware: Log requests under a per-request span
    let log_layer = axum::middleware::from_fn(|req: Request<Body>, next: Next| async move {
        let request_id = Uuid::new_v4();
        let span = info_span!(
            "request",
            %request_id,
            method = %req.method(),
            uri = %req.uri(),
        );

        async move {
            let res = next.run(req).await;
            if res.status().is_success() {
                info!(status = %res.status(), "request completed");
            } else {
                warn!(status = %res.status(), "request failed");
            }
            res
        }
        .instrument(span)
        .await
    });

    // Middleware: CORS (Permissive for local dev)
    let cors_layer = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Routes
    Router::new()
        .merge(crate::cart::routes())
        .merge(crate::pages::routes())
        .layer(log_layer)
        .layer(cors_layer)
        .with_state(state)
}
