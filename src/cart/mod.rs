//! Shopping Cart Domain Module
//!
//! This module contains all shopping cart logic, including:
//! - Domain models (ProductId, LineItem, CartAction, CartView)
//! - The cart store and its transitions
//! - Read-side helpers (totals, summaries)
//! - Application state management
//! - REST API handlers

pub mod handlers;
pub mod helpers;
pub mod models;
pub mod state;
pub mod store;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use models::{CartAction, CartView, LineItem, ProductId, ProductPayload};
pub use state::{AppState, SharedState};
pub use store::CartStore;
