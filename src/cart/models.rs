//! Shopping Cart Domain Models
//!
//! This module contains the data structures the cart store works with:
//! product identifiers, the payload a view sends to add a product, the line
//! items held in the cart and the actions a view can dispatch.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use super::helpers::{format_item_summary, total_quantity};

// =============================================================================
// Identifiers
// =============================================================================

/// Opaque product identifier.
///
/// Storefront payloads carry either numeric or string ids; both are accepted
/// and compared as-is, so `1` and `"1"` are different products.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    /// Numeric identifier (e.g. `42`)
    Number(i64),
    /// String identifier (e.g. `"sku-42"`)
    Text(String),
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Number(n) => write!(f, "{n}"),
            ProductId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        ProductId::Number(id)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        ProductId::Text(id.to_string())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        ProductId::Text(id)
    }
}

// =============================================================================
// Cart Domain Models
// =============================================================================

/// Product data sent by a view when adding to the cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPayload {
    /// Product identifier
    pub id: ProductId,

    /// Captures the remaining product fields (e.g., name, price) dynamically
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl ProductPayload {
    /// Creates a payload with no attributes besides the id.
    pub fn new(id: impl Into<ProductId>) -> Self {
        Self {
            id: id.into(),
            attributes: Map::new(),
        }
    }

    /// Adds one product attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}

/// One product entry in the cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product identifier, unique within a cart
    pub id: ProductId,

    /// Quantity, always at least 1 while the item is in the cart
    pub count: u32,

    /// Product attributes carried over from the payload that added the item
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl LineItem {
    /// Builds a fresh line item with a count of 1.
    ///
    /// A `count` key in the payload is dropped; quantity is owned by the cart.
    pub fn from_payload(payload: ProductPayload) -> Self {
        let ProductPayload { id, mut attributes } = payload;
        attributes.remove("count");

        Self {
            id,
            count: 1,
            attributes,
        }
    }

    /// Returns the `name` attribute when the payload provided a string one.
    pub fn name(&self) -> Option<&str> {
        self.attributes.get("name").and_then(Value::as_str)
    }
}

// =============================================================================
// Actions
// =============================================================================

/// A cart operation as dispatched by a view.
///
/// Serialized as `{"action": "cartIncrement", "payload": 1}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", content = "payload", rename_all = "camelCase")]
pub enum CartAction {
    /// Add a product, or bump its count if it is already present
    AddToCart(ProductPayload),
    /// Drop a product from the cart
    RemoveFromCart(ProductId),
    /// Raise a product's count by one
    CartIncrement(ProductId),
    /// Lower a product's count by one, removing it at zero
    CartDecrement(ProductId),
}

impl CartAction {
    /// Action name as it appears on the wire.
    pub fn name(&self) -> &'static str {
        match self {
            CartAction::AddToCart(_) => "addToCart",
            CartAction::RemoveFromCart(_) => "removeFromCart",
            CartAction::CartIncrement(_) => "cartIncrement",
            CartAction::CartDecrement(_) => "cartDecrement",
        }
    }

    /// Product the action targets.
    pub fn product_id(&self) -> &ProductId {
        match self {
            CartAction::AddToCart(payload) => &payload.id,
            CartAction::RemoveFromCart(id)
            | CartAction::CartIncrement(id)
            | CartAction::CartDecrement(id) => id,
        }
    }
}

// =============================================================================
// Responses
// =============================================================================

/// Snapshot of the cart returned to views
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    /// Line items in insertion order
    pub items: Vec<LineItem>,

    /// Sum of all item counts
    pub total_quantity: u64,

    /// One-line summary, e.g. `"2x Apple, 1x Banana"`
    pub summary: String,
}

impl CartView {
    /// Captures the given items.
    pub fn from_items(items: &[LineItem]) -> Self {
        Self {
            items: items.to_vec(),
            total_quantity: total_quantity(items),
            summary: format_item_summary(items),
        }
    }
}
