//! Cart Store
//!
//! Owns the ordered list of line items and applies every cart transition.
//! Items are unique by id and always hold a count of at least 1.

use super::models::{CartAction, LineItem, ProductId, ProductPayload};
use tracing::debug;

/// In-memory cart, mutated only through its operations
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartStore {
    items: Vec<LineItem>,
}

impl CartStore {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a product to the cart.
    ///
    /// A product already in the cart gets its count raised by one and keeps
    /// its existing attributes. Otherwise a new item with a count of 1 is
    /// appended.
    pub fn add_to_cart(&mut self, payload: ProductPayload) {
        if self.get(&payload.id).is_some() {
            self.cart_increment(&payload.id);
        } else {
            self.items.push(LineItem::from_payload(payload));
        }
    }

    /// Removes the item with `id`. Absent ids are ignored.
    pub fn remove_from_cart(&mut self, id: &ProductId) {
        self.items.retain(|i| &i.id != id);
    }

    /// Raises the count of `id` by one. Absent ids are ignored.
    pub fn cart_increment(&mut self, id: &ProductId) {
        if let Some(item) = self.items.iter_mut().find(|i| &i.id == id) {
            item.count = item.count.saturating_add(1);
            debug!(%id, count = item.count, "incremented item count");
        }
    }

    /// Lowers the count of `id` by one, removing the item once it would drop
    /// below 1. Absent ids are ignored.
    pub fn cart_decrement(&mut self, id: &ProductId) {
        let Some(item) = self.items.iter_mut().find(|i| &i.id == id) else {
            return;
        };

        if item.count > 1 {
            item.count -= 1;
            debug!(%id, count = item.count, "decremented item count");
        } else {
            self.remove_from_cart(id);
        }
    }

    /// Current items in insertion order.
    pub fn get_cart(&self) -> &[LineItem] {
        &self.items
    }

    /// Applies a dispatched action.
    pub fn dispatch(&mut self, action: CartAction) {
        match action {
            CartAction::AddToCart(payload) => self.add_to_cart(payload),
            CartAction::RemoveFromCart(id) => self.remove_from_cart(&id),
            CartAction::CartIncrement(id) => self.cart_increment(&id),
            CartAction::CartDecrement(id) => self.cart_decrement(&id),
        }
    }

    /// Looks up the item with `id`.
    pub fn get(&self, id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.id == id)
    }

    /// Number of distinct products in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn product(id: i64, name: &str) -> ProductPayload {
        ProductPayload::new(id).with_attribute("name", name)
    }

    fn counts(store: &CartStore) -> Vec<(ProductId, u32)> {
        store
            .get_cart()
            .iter()
            .map(|i| (i.id.clone(), i.count))
            .collect()
    }

    #[test]
    fn add_fresh_product_starts_at_one() {
        let mut store = CartStore::new();
        store.add_to_cart(product(1, "A").with_attribute("price", 9.99));

        assert_eq!(store.len(), 1);
        let item = store.get(&ProductId::from(1)).unwrap();
        assert_eq!(item.count, 1);
        assert_eq!(item.attributes["name"], json!("A"));
        assert_eq!(item.attributes["price"], json!(9.99));
    }

    #[test]
    fn adding_twice_matches_add_then_increment() {
        let mut twice = CartStore::new();
        twice.add_to_cart(product(1, "A"));
        twice.add_to_cart(product(1, "A"));

        let mut incremented = CartStore::new();
        incremented.add_to_cart(product(1, "A"));
        incremented.cart_increment(&ProductId::from(1));

        assert_eq!(twice, incremented);
        assert_eq!(counts(&twice), vec![(ProductId::from(1), 2)]);
    }

    #[test]
    fn re_adding_keeps_existing_attributes() {
        let mut store = CartStore::new();
        store.add_to_cart(product(1, "Original"));
        store.add_to_cart(product(1, "Renamed"));

        assert_eq!(store.get(&ProductId::from(1)).unwrap().name(), Some("Original"));
    }

    #[test]
    fn decrement_at_one_removes_item() {
        let mut store = CartStore::new();
        store.add_to_cart(product(1, "A"));
        store.cart_decrement(&ProductId::from(1));

        assert!(store.is_empty());
        assert!(store.get(&ProductId::from(1)).is_none());
    }

    #[test]
    fn decrement_from_three_leaves_two() {
        let mut store = CartStore::new();
        for _ in 0..3 {
            store.add_to_cart(product(1, "A"));
        }
        store.cart_decrement(&ProductId::from(1));

        assert_eq!(counts(&store), vec![(ProductId::from(1), 2)]);
    }

    #[test]
    fn absent_ids_are_no_ops() {
        let mut store = CartStore::new();
        store.add_to_cart(product(1, "A"));
        let before = store.clone();

        store.remove_from_cart(&ProductId::from(2));
        store.remove_from_cart(&ProductId::from(2));
        store.cart_increment(&ProductId::from(2));
        store.cart_decrement(&ProductId::from("1"));

        assert_eq!(store, before);
    }

    #[test]
    fn mutations_preserve_insertion_order() {
        let mut store = CartStore::new();
        store.add_to_cart(product(1, "A"));
        store.add_to_cart(product(2, "B"));
        store.add_to_cart(product(3, "C"));
        store.cart_increment(&ProductId::from(1));
        store.add_to_cart(product(3, "C"));
        store.cart_decrement(&ProductId::from(3));
        store.remove_from_cart(&ProductId::from(2));

        assert_eq!(
            counts(&store),
            vec![(ProductId::from(1), 2), (ProductId::from(3), 1)]
        );
    }

    #[test]
    fn increment_saturates() {
        let mut store = CartStore::new();
        store.add_to_cart(product(1, "A"));
        store.items[0].count = u32::MAX;
        store.cart_increment(&ProductId::from(1));

        assert_eq!(store.get_cart()[0].count, u32::MAX);
    }

    #[test]
    fn dispatch_walkthrough() {
        let mut store = CartStore::new();
        let one = ProductId::from(1);

        store.dispatch(CartAction::AddToCart(product(1, "A")));
        assert_eq!(counts(&store), vec![(one.clone(), 1)]);

        store.dispatch(CartAction::AddToCart(product(1, "A")));
        assert_eq!(counts(&store), vec![(one.clone(), 2)]);

        store.dispatch(CartAction::CartDecrement(one.clone()));
        assert_eq!(counts(&store), vec![(one.clone(), 1)]);

        store.dispatch(CartAction::CartDecrement(one.clone()));
        assert!(store.get_cart().is_empty());

        store.dispatch(CartAction::AddToCart(product(2, "B")));
        store.dispatch(CartAction::CartIncrement(ProductId::from(2)));
        store.dispatch(CartAction::RemoveFromCart(ProductId::from(2)));
        assert!(store.is_empty());
    }
}
