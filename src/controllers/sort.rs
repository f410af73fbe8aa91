//! Sort Controller

use catalog_core::sort::PriceOrder;
use leptos::prelude::*;
use web_sys::{console, HtmlElement};

use crate::context::CatalogContext;
use crate::dom;

/// Bind the low-to-high and high-to-low buttons to the session list.
/// Called once; later loads reuse the same bindings.
pub fn bind_sort_buttons(ctx: CatalogContext, ascending: &HtmlElement, descending: &HtmlElement) {
    for (button, order) in [
        (ascending, PriceOrder::Ascending),
        (descending, PriceOrder::Descending),
    ] {
        dom::on_click(button, move |_| {
            let category = ctx.session.try_update(|session| {
                session.sort(order);
                session.category()
            });
            if let Some(Some(category)) = category {
                console::log_1(&format!("[SORT] Sorted {} by price {:?}", category, order).into());
            }
        });
    }
}
