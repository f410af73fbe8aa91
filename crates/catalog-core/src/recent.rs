//! Recently Viewed Items
//!
//! Bounded, duplicate-free list of item ids kept in client storage,
//! oldest first.

use crate::error::CatalogError;
use crate::storage::{KeyValueStore, RECENTLY_VIEWED_KEY};

/// Most ids kept in the list
pub const MAX_RECENT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentlyViewed {
    ids: Vec<String>,
    limit: usize,
}

impl RecentlyViewed {
    pub fn new(limit: usize) -> Self {
        Self { ids: Vec::new(), limit }
    }

    /// Parse the stored comma-joined form, skipping empty segments
    pub fn parse(raw: &str, limit: usize) -> Self {
        let mut list = Self::new(limit);
        for id in raw.split(',').filter(|id| !id.is_empty()) {
            list.push(id);
        }
        list
    }

    /// Move `id` to the most recent position, evicting the oldest past the limit
    pub fn push(&mut self, id: &str) {
        self.ids.retain(|existing| existing != id);
        self.ids.push(id.to_string());
        if self.ids.len() > self.limit {
            let overflow = self.ids.len() - self.limit;
            self.ids.drain(..overflow);
        }
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn to_storage_string(&self) -> String {
        self.ids.join(",")
    }
}

/// Read the list; a missing or unreadable entry is an empty list
pub fn load_recent(store: &impl KeyValueStore, limit: usize) -> RecentlyViewed {
    match store.get(RECENTLY_VIEWED_KEY) {
        Ok(Some(raw)) => RecentlyViewed::parse(&raw, limit),
        _ => RecentlyViewed::new(limit),
    }
}

/// Record a view of `item_id` and write the list back
pub fn record_view(
    store: &impl KeyValueStore,
    item_id: &str,
    limit: usize,
) -> Result<RecentlyViewed, CatalogError> {
    let mut recent = load_recent(store, limit);
    recent.push(item_id);
    store.set(RECENTLY_VIEWED_KEY, &recent.to_storage_string())?;
    Ok(recent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn stored(store: &MemoryStore) -> String {
        store.get(RECENTLY_VIEWED_KEY).unwrap().unwrap_or_default()
    }

    #[test]
    fn test_record_view_on_empty_storage() {
        let store = MemoryStore::new();
        let recent = record_view(&store, "7", MAX_RECENT).unwrap();

        assert_eq!(recent.ids(), ["7"]);
        assert_eq!(stored(&store), "7");
    }

    #[test]
    fn test_reviewing_moves_to_end_and_new_id_evicts_oldest() {
        let store = MemoryStore::new();
        store.set(RECENTLY_VIEWED_KEY, "a,b,c,d,e").unwrap();

        record_view(&store, "b", MAX_RECENT).unwrap();
        assert_eq!(stored(&store), "a,c,d,e,b");

        record_view(&store, "f", MAX_RECENT).unwrap();
        assert_eq!(stored(&store), "c,d,e,b,f");
    }

    #[test]
    fn test_list_never_exceeds_limit_or_duplicates() {
        let store = MemoryStore::new();
        for id in ["1", "2", "3", "2", "4", "5", "6", "7", "1", "7"] {
            let recent = record_view(&store, id, MAX_RECENT).unwrap();
            assert!(recent.ids().len() <= MAX_RECENT);

            let mut unique = recent.ids().to_vec();
            unique.sort();
            unique.dedup();
            assert_eq!(unique.len(), recent.ids().len());
        }
        assert_eq!(stored(&store), "4,5,6,1,7");
    }

    #[test]
    fn test_parse_skips_empty_segments() {
        let recent = RecentlyViewed::parse(",3,,4,", MAX_RECENT);
        assert_eq!(recent.ids(), ["3", "4"]);
    }

    #[test]
    fn test_oversized_stored_list_is_trimmed_on_load() {
        let store = MemoryStore::new();
        store.set(RECENTLY_VIEWED_KEY, "1,2,3,4,5,6,7").unwrap();

        let recent = load_recent(&store, MAX_RECENT);
        assert_eq!(recent.ids(), ["3", "4", "5", "6", "7"]);
    }
}
