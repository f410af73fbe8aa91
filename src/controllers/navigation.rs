//! Navigation Handler
//!
//! Category buttons in the page header.

use catalog_core::navigation::{route_category_click, NavigationOutcome};
use catalog_core::{CatalogError, Category};
use web_sys::{console, Document};

use crate::browser_storage::BrowserStorage;
use crate::context::CatalogContext;
use crate::controllers::catalog::show_catalog;
use crate::dom::{self, selectors};

const CATEGORY_BUTTONS: [(&str, Category); 3] = [
    (selectors::MEN_BUTTON, Category::Male),
    (selectors::WOMEN_BUTTON, Category::Female),
    (selectors::BOTH_BUTTON, Category::Both),
];

/// All three buttons must exist; nothing is bound otherwise
pub fn bind_category_buttons(ctx: CatalogContext, document: &Document) -> Result<(), CatalogError> {
    let buttons = CATEGORY_BUTTONS
        .iter()
        .map(|(selector, category)| dom::require(document, selector).map(|button| (button, *category)))
        .collect::<Result<Vec<_>, _>>()?;

    for (button, category) in buttons {
        dom::on_click(&button, move |ev| {
            ev.prevent_default();
            if let Err(e) = on_category_click(ctx, category) {
                console::error_1(&format!("[NAV] {} click failed: {}", category, e).into());
            }
        });
    }
    Ok(())
}

fn on_category_click(ctx: CatalogContext, category: Category) -> Result<(), CatalogError> {
    let window = dom::window()?;
    let path = dom::current_path(&window);
    let outcome = ctx.with_config(|config| route_category_click(category, &path, config, &BrowserStorage))?;

    match outcome {
        NavigationOutcome::ShowCatalog(category) => {
            show_catalog(ctx, category);
            Ok(())
        }
        NavigationOutcome::Redirect(home) => {
            console::log_1(&format!("[NAV] {} pending, leaving {} for {}", category, path, home).into());
            dom::navigate(&window, &home)
        }
    }
}
