//! Storefront Cart Library
//!
//! This library provides the cart store of a storefront web app, its static
//! route table, and a small HTTP surface views use to dispatch cart actions.

// Domain modules
pub mod cart;
pub mod pages;

// Infrastructure
pub mod config;
pub mod error;
pub mod logging;
pub mod router;
pub mod shutdown;
