//! Shopping Cart Read-Side Helpers
//!
//! Small, pure functions over a slice of line items.

use super::models::LineItem;

/// Sums the counts of all items.
pub fn total_quantity(items: &[LineItem]) -> u64 {
    items.iter().map(|i| u64::from(i.count)).sum()
}

/// Produces a human-readable one-line summary for a list of cart items.
///
/// Example output: `"2x Apple, 1x Banana"`. Items without a string `name`
/// attribute are listed by id.
pub fn format_item_summary(items: &[LineItem]) -> String {
    items
        .iter()
        .map(|i| match i.name() {
            Some(name) => format!("{}x {}", i.count, name),
            None => format!("{}x {}", i.count, i.id),
        })
        .collect::<Vec<_>>()
        .join(", ")
}
