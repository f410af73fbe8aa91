//! Price Sorting

use std::cmp::Ordering;

use crate::models::Item;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceOrder {
    /// Low to high
    Ascending,
    /// High to low
    Descending,
}

impl PriceOrder {
    pub fn compare(self, a: &Item, b: &Item) -> Ordering {
        match self {
            PriceOrder::Ascending => a.price.total_cmp(&b.price),
            PriceOrder::Descending => b.price.total_cmp(&a.price),
        }
    }
}

/// Sort in place by price. Ties keep no particular order.
pub fn sort_by_price(items: &mut [Item], order: PriceOrder) {
    items.sort_unstable_by(|a, b| order.compare(a, b));
}
