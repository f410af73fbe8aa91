//! Item Grid Component
//!
//! Renders the session's items as catalog cards. Sorting or replacing the
//! session list re-renders the grid and its click bindings.

use catalog_core::cards::item_cards;
use leptos::prelude::*;

use crate::context::use_catalog_context;

#[component]
pub fn ItemGrid(
    /// Called with the item id when a card is clicked
    #[prop(into)]
    on_open: Callback<u32>,
) -> impl IntoView {
    let ctx = use_catalog_context();

    let cards = move || {
        ctx.session
            .with(|session| ctx.with_config(|config| item_cards(session.items(), config)))
    };

    view! {
        <For
            each=cards
            key=|card| card.clone()
            children=move |card| {
                let item_id = card.item_id;
                view! {
                    <a
                        class="item"
                        href=card.href
                        id=card.element_id
                        on:click=move |ev| {
                            ev.prevent_default();
                            on_open.run(item_id);
                        }
                    >
                        <img src=card.image_src alt="" />
                        <span class="name">{card.name}</span>
                        <span class="price">{card.price_label}</span>
                        <button id=card.cart_control_id class="add-to-cart-button">
                            "Add to cart"
                        </button>
                    </a>
                }
            }
        />
    }
}
