//! Catalog Controller
//!
//! Switches the home page from the landing section to the item grid and
//! loads a category into it.

use catalog_core::recent::record_view;
use catalog_core::{CatalogError, Category};
use leptos::mount::mount_to;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::console;

use crate::api;
use crate::browser_storage::BrowserStorage;
use crate::components::ItemGrid;
use crate::context::CatalogContext;
use crate::controllers::sort::bind_sort_buttons;
use crate::dom::{self, CatalogElements};

/// Show `category`, logging instead of failing when the page lacks the catalog
pub fn show_catalog(ctx: CatalogContext, category: Category) {
    if let Err(e) = try_show_catalog(ctx, category) {
        console::error_1(&format!("[CATALOG] Cannot show {}: {}", category, e).into());
    }
}

fn try_show_catalog(ctx: CatalogContext, category: Category) -> Result<(), CatalogError> {
    let window = dom::window()?;
    let page = CatalogElements::query(&dom::document()?)?;

    dom::set_display(&page.landing, "none");
    dom::set_display(&page.catalog, "flex");
    dom::scroll_to_top(&window);
    mount_grid(ctx, &page);

    // Supersedes any request still in flight and empties the grid
    let Some(ticket) = ctx.session.try_update(|session| session.begin(category)) else {
        return Ok(());
    };
    let url = ctx.with_config(|config| config.items_url(category));
    console::log_1(&format!("[CATALOG] Loading {} from {}", category, url).into());

    let heading = page.heading;
    spawn_local(async move {
        match api::get_items(&url).await {
            Ok(items) => {
                let count = items.len();
                let accepted = ctx
                    .session
                    .try_update(|session| session.complete(&ticket, items))
                    .unwrap_or(false);
                if accepted {
                    heading.set_inner_text(&category.heading());
                    console::log_1(&format!("[CATALOG] Loaded {} {} items", count, category).into());
                } else {
                    console::log_1(&format!("[CATALOG] Dropped stale {} response", category).into());
                }
            }
            Err(e) => {
                console::error_1(&format!("[CATALOG] Loading {} failed: {}", category, e).into());
            }
        }
    });
    Ok(())
}

/// Replace the container's server markup with the reactive grid, once
fn mount_grid(ctx: CatalogContext, page: &CatalogElements) {
    if !ctx.claim_grid_mount() {
        return;
    }
    page.container.set_inner_html("");
    bind_sort_buttons(ctx, &page.sort_ascending, &page.sort_descending);

    let on_open = Callback::new(move |item_id: u32| open_item(ctx, item_id));
    mount_to(page.container.clone(), move || {
        provide_context(ctx);
        view! { <ItemGrid on_open=on_open /> }
    })
    .forget();
}

/// Record the view, then go to the item's page
pub fn open_item(ctx: CatalogContext, item_id: u32) {
    let limit = ctx.with_config(|config| config.recent_limit);
    match record_view(&BrowserStorage, &item_id.to_string(), limit) {
        Ok(recent) => {
            console::log_1(&format!("[CATALOG] Recently viewed: {}", recent.to_storage_string()).into());
        }
        Err(e) => {
            console::error_1(&format!("[CATALOG] Could not record view of {}: {}", item_id, e).into());
        }
    }

    let href = ctx.with_config(|config| config.item_url(item_id));
    if let Err(e) = dom::window().and_then(|window| dom::navigate(&window, &href)) {
        console::error_1(&format!("[CATALOG] Could not open {}: {}", href, e).into());
    }
}
