//! Catalog Session
//!
//! The category and item list currently on screen. Each catalog request
//! gets a generation number; only a response for the latest generation is
//! accepted, so overlapping fetches cannot render out of order.

use crate::models::{Category, Item};
use crate::sort::{sort_by_price, PriceOrder};

/// Handle for one in-flight catalog request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    pub category: Category,
    generation: u64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogSession {
    generation: u64,
    category: Option<Category>,
    items: Vec<Item>,
}

impl CatalogSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start showing `category`: clears the current list and supersedes
    /// any earlier request
    pub fn begin(&mut self, category: Category) -> RequestTicket {
        self.generation += 1;
        self.category = Some(category);
        self.items.clear();
        RequestTicket {
            category,
            generation: self.generation,
        }
    }

    pub fn is_current(&self, ticket: &RequestTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Accept a response. Returns false (and changes nothing) when the ticket
    /// has been superseded.
    pub fn complete(&mut self, ticket: &RequestTicket, items: Vec<Item>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.items = items;
        true
    }

    pub fn sort(&mut self, order: PriceOrder) {
        sort_by_price(&mut self.items, order);
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }
}
