//! Client Storage
//!
//! Key-value storage interface the page persists state through.
//! The browser implementation lives in the UI crate; `MemoryStore` backs tests.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::CatalogError;

/// Key holding the comma-joined recently viewed item ids
pub const RECENTLY_VIEWED_KEY: &str = "recentlyViewed";
/// Key holding a category to show after navigating home
pub const PENDING_CATEGORY_KEY: &str = "showItems";

/// String key-value store with `localStorage` semantics
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, CatalogError>;
    fn set(&self, key: &str, value: &str) -> Result<(), CatalogError>;
    fn delete(&self, key: &str) -> Result<(), CatalogError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, CatalogError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CatalogError> {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) -> Result<(), CatalogError> {
        (**self).delete(key)
    }
}

/// In-memory store
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, CatalogError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CatalogError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), CatalogError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
