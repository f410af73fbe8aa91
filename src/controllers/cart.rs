//! Cart Submitter
//!
//! Add-to-cart and remove-from-cart controls on the item and cart pages.
//! Every click sends its own request.

use catalog_core::cart::{item_id_from_control, CartAction, CartOutcome, StatusLine};
use catalog_core::CatalogError;
use wasm_bindgen_futures::spawn_local;
use web_sys::{console, Document};

use crate::api;
use crate::context::CatalogContext;
use crate::dom::{self, selectors};

pub fn bind_cart_controls(ctx: CatalogContext, document: &Document) {
    for (selector, action) in [
        (selectors::ADD_TO_CART, CartAction::Add),
        (selectors::REMOVE_FROM_CART, CartAction::Remove),
    ] {
        for control in dom::query_all(document, selector) {
            let control_id = control.id();
            dom::on_click(&control, move |ev| {
                ev.prevent_default();
                submit(ctx, action, &control_id);
            });
        }
    }
}

fn submit(ctx: CatalogContext, action: CartAction, control_id: &str) {
    let item_id = match item_id_from_control(control_id) {
        Ok(id) => id,
        Err(e) => {
            console::error_1(&format!("[CART] {}", e).into());
            return;
        }
    };
    let url = ctx.with_config(|config| action.url(item_id, config));

    spawn_local(async move {
        match api::submit_cart(&url).await {
            Ok(replies) => {
                let outcome = CartOutcome::from_replies(&replies);
                console::log_1(&format!("[CART] {:?} item {}: {:?}", action, item_id, outcome).into());
                let status = ctx.with_config(|config| outcome.status(action, config));
                if let Err(e) = show_status(&status) {
                    console::error_1(&format!("[CART] {}", e).into());
                }
            }
            Err(e) => {
                console::error_1(&format!("[CART] {:?} item {} failed: {}", action, item_id, e).into());
            }
        }
    });
}

fn show_status(status: &StatusLine) -> Result<(), CatalogError> {
    let element = dom::require(&dom::document()?, selectors::CART_STATUS)?;
    let style = element.style();
    let _ = match &status.color {
        Some(color) => style.set_property("color", color),
        None => style.remove_property("color").map(|_| ()),
    };
    dom::set_display(&element, "block");
    element.set_inner_text(&status.text);
    Ok(())
}
