//! Storefront Pages Module
//!
//! The storefront's route table:
//! - Route models (Route, RoutePattern, View)
//! - The ordered table and its first-match-wins resolution
//! - REST API handlers exposing the table

pub mod handlers;
pub mod models;
pub mod table;

pub use handlers::routes;
pub use models::{Route, RouteMatch, RoutePattern, View};
pub use table::RouteTable;
