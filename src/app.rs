//! Page Boot
//!
//! Binds the page's controls and resumes a catalog request staged by a
//! category click on another page.

use catalog_core::navigation::take_pending_category;
use catalog_core::CatalogError;
use web_sys::console;

use crate::browser_storage::BrowserStorage;
use crate::context::CatalogContext;
use crate::controllers::{cart, catalog, navigation};
use crate::dom;

pub fn boot() -> Result<(), CatalogError> {
    let document = dom::document()?;
    let ctx = CatalogContext::new(dom::load_config(&document));

    navigation::bind_category_buttons(ctx, &document)?;
    cart::bind_cart_controls(ctx, &document);

    match take_pending_category(&BrowserStorage) {
        Ok(Some(category)) => {
            console::log_1(&format!("[BOOT] Resuming pending {} catalog", category).into());
            catalog::show_catalog(ctx, category);
        }
        Ok(None) => {}
        Err(e) => console::error_1(&format!("[BOOT] Pending category dropped: {}", e).into()),
    }
    Ok(())
}
