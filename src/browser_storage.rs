//! Browser Storage
//!
//! `KeyValueStore` backed by `window.localStorage`.

use catalog_core::{CatalogError, KeyValueStore};

use crate::dom::js_message;

/// Looks `localStorage` up on every call, so it can be captured anywhere
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage(&self) -> Result<web_sys::Storage, CatalogError> {
        web_sys::window()
            .ok_or_else(|| CatalogError::Storage("no window".to_string()))?
            .local_storage()
            .map_err(|e| CatalogError::Storage(js_message(&e)))?
            .ok_or_else(|| CatalogError::Storage("localStorage is unavailable".to_string()))
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, CatalogError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| CatalogError::Storage(js_message(&e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CatalogError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| CatalogError::Storage(js_message(&e)))
    }

    fn delete(&self, key: &str) -> Result<(), CatalogError> {
        self.storage()?
            .remove_item(key)
            .map_err(|e| CatalogError::Storage(js_message(&e)))
    }
}
