//! REST API handlers for shopping cart operations
//!
//! Views read the cart and dispatch actions against it over these endpoints.

use super::{models::*, state::SharedState};
use axum::{
    extract::State,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use tracing::info;

/// Creates routes for cart-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/cart", get(get_cart))
        .route("/cart/dispatch", post(dispatch))
}

/// Endpoint: GET /cart
/// Returns the current cart contents.
async fn get_cart(State(state): State<SharedState>) -> impl IntoResponse {
    let cart = state.cart.lock().await;
    Json(CartView::from_items(cart.get_cart()))
}

/// Endpoint: POST /cart/dispatch
/// Applies one cart action and returns the resulting cart.
async fn dispatch(
    State(state): State<SharedState>,
    Json(action): Json<CartAction>,
) -> impl IntoResponse {
    info!(action = action.name(), id = %action.product_id(), "dispatching cart action");

    let mut cart = state.cart.lock().await;
    cart.dispatch(action);

    Json(CartView::from_items(cart.get_cart()))
}
