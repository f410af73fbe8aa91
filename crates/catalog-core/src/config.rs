//! Catalog Configuration
//!
//! Routes, endpoints and display constants. Every field has a default
//! matching the server; a page may override any subset with inline JSON.

use serde::Deserialize;

use crate::error::CatalogError;
use crate::models::Category;
use crate::recent::MAX_RECENT;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Route the catalog sections live on
    pub home_path: String,
    pub items_endpoint: String,
    pub add_to_cart_endpoint: String,
    pub remove_from_cart_endpoint: String,
    pub item_route: String,
    pub recent_limit: usize,
    pub success_color: String,
    pub added_message: String,
    pub removed_message: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            home_path: "/".to_string(),
            items_endpoint: "/getitems".to_string(),
            add_to_cart_endpoint: "/addtocart".to_string(),
            remove_from_cart_endpoint: "/removefromcart".to_string(),
            item_route: "/item".to_string(),
            recent_limit: MAX_RECENT,
            success_color: "#00ff00".to_string(),
            added_message: "Added successfully".to_string(),
            removed_message: "Removed successfully".to_string(),
        }
    }
}

impl CatalogConfig {
    /// Parse overrides; fields left out keep their defaults.
    /// `recent_limit` is clamped to `1..=MAX_RECENT`.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let mut config: Self =
            serde_json::from_str(raw).map_err(|e| CatalogError::Config(e.to_string()))?;
        config.recent_limit = config.recent_limit.clamp(1, MAX_RECENT);
        Ok(config)
    }

    pub fn items_url(&self, category: Category) -> String {
        format!("{}/{}", self.items_endpoint.trim_end_matches('/'), category)
    }

    pub fn add_to_cart_url(&self, item_id: u32) -> String {
        format!("{}/{}", self.add_to_cart_endpoint.trim_end_matches('/'), item_id)
    }

    pub fn remove_from_cart_url(&self, item_id: u32) -> String {
        format!("{}/{}", self.remove_from_cart_endpoint.trim_end_matches('/'), item_id)
    }

    pub fn item_url(&self, item_id: u32) -> String {
        format!("{}/{}", self.item_route.trim_end_matches('/'), item_id)
    }

    pub fn is_home(&self, path: &str) -> bool {
        path == self.home_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recent::{load_recent, record_view};
    use crate::storage::MemoryStore;

    #[test]
    fn test_default_urls() {
        let config = CatalogConfig::default();
        assert_eq!(config.items_url(Category::Male), "/getitems/male");
        assert_eq!(config.add_to_cart_url(12), "/addtocart/12");
        assert_eq!(config.remove_from_cart_url(12), "/removefromcart/12");
        assert_eq!(config.item_url(3), "/item/3");
        assert!(config.is_home("/"));
        assert!(!config.is_home("/item/3"));
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = CatalogConfig::from_json(r#"{"items_endpoint": "/api/items/", "recent_limit": 3}"#).unwrap();
        assert_eq!(config.items_url(Category::Both), "/api/items/both");
        assert_eq!(config.recent_limit, 3);
        assert_eq!(config.added_message, "Added successfully");
    }

    #[test]
    fn test_recent_limit_is_clamped() {
        let store = MemoryStore::new();

        let wide = CatalogConfig::from_json(r#"{"recent_limit": 10}"#).unwrap();
        assert_eq!(wide.recent_limit, MAX_RECENT);
        for id in 1..=10 {
            record_view(&store, &id.to_string(), wide.recent_limit).unwrap();
        }
        assert_eq!(load_recent(&store, wide.recent_limit).ids(), ["6", "7", "8", "9", "10"]);

        let zero = CatalogConfig::from_json(r#"{"recent_limit": 0}"#).unwrap();
        assert_eq!(zero.recent_limit, 1);
        let recent = record_view(&store, "11", zero.recent_limit).unwrap();
        assert_eq!(recent.ids(), ["11"]);
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let err = CatalogConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, CatalogError::Config(_)));
    }
}
