//! Catalog Context
//!
//! Page-wide state shared by the DOM listeners and the item grid.

use catalog_core::config::CatalogConfig;
use catalog_core::session::CatalogSession;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct CatalogContext {
    /// Category, items and request generation currently on screen
    pub session: RwSignal<CatalogSession>,
    config: StoredValue<CatalogConfig>,
    /// Whether the grid and sort buttons have been wired up
    grid_mounted: StoredValue<bool>,
}

impl CatalogContext {
    pub fn new(config: CatalogConfig) -> Self {
        Self {
            session: RwSignal::new(CatalogSession::new()),
            config: StoredValue::new(config),
            grid_mounted: StoredValue::new(false),
        }
    }

    pub fn with_config<R>(&self, f: impl FnOnce(&CatalogConfig) -> R) -> R {
        self.config.with_value(f)
    }

    /// Returns true only on the first call
    pub fn claim_grid_mount(&self) -> bool {
        if self.grid_mounted.get_value() {
            return false;
        }
        self.grid_mounted.set_value(true);
        true
    }
}

pub fn use_catalog_context() -> CatalogContext {
    expect_context::<CatalogContext>()
}
