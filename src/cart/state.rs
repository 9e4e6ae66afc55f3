//! Shopping Cart State Management
//!
//! This module holds the application state shared by the HTTP handlers:
//! the cart store and the storefront route table.

use super::store::CartStore;
use crate::pages::RouteTable;
use std::sync::Arc;
use tokio::sync::Mutex;

// =============================================================================
// Application State
// =============================================================================

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state containing the cart and the page routes
#[derive(Debug)]
pub struct AppState {
    /// The session's cart. Each dispatched action holds the lock for its
    /// whole transition.
    pub cart: Mutex<CartStore>,

    /// Storefront route table used for path resolution.
    pub pages: RouteTable,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates state with an empty cart and the storefront routes
    pub fn new() -> Self {
        Self::with_pages(RouteTable::storefront())
    }

    /// Creates state with an empty cart and a custom route table
    pub fn with_pages(pages: RouteTable) -> Self {
        Self {
            cart: Mutex::new(CartStore::new()),
            pages,
        }
    }
}
