//! Category Navigation
//!
//! A category button either shows the catalog in place (on the home route)
//! or stages the category in storage and sends the browser home, where
//! boot picks it up again.

use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::models::Category;
use crate::storage::{KeyValueStore, PENDING_CATEGORY_KEY};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// Already home: show the catalog now
    ShowCatalog(Category),
    /// Navigate to this route; the category is pending in storage
    Redirect(String),
}

pub fn route_category_click(
    category: Category,
    current_path: &str,
    config: &CatalogConfig,
    store: &impl KeyValueStore,
) -> Result<NavigationOutcome, CatalogError> {
    if config.is_home(current_path) {
        return Ok(NavigationOutcome::ShowCatalog(category));
    }
    store.set(PENDING_CATEGORY_KEY, category.as_str())?;
    Ok(NavigationOutcome::Redirect(config.home_path.clone()))
}

/// Consume the pending category, if any. The stored value is removed even
/// when it does not name a category.
pub fn take_pending_category(store: &impl KeyValueStore) -> Result<Option<Category>, CatalogError> {
    let Some(raw) = store.get(PENDING_CATEGORY_KEY)? else {
        return Ok(None);
    };
    store.delete(PENDING_CATEGORY_KEY)?;
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse().map(Some)
}
