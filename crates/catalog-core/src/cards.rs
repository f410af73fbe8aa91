//! Item Cards
//!
//! Virtual node list for the item grid. The UI renders one anchor per card
//! and binds the card's click to "record view, then open `href`".

use crate::config::CatalogConfig;
use crate::models::Item;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemCard {
    pub item_id: u32,
    /// DOM id of the anchor, `item{id}`
    pub element_id: String,
    pub href: String,
    pub image_src: String,
    pub name: String,
    pub price_label: String,
    /// DOM id of the card's add-to-cart button
    pub cart_control_id: String,
}

impl ItemCard {
    pub fn new(item: &Item, config: &CatalogConfig) -> Self {
        Self {
            item_id: item.id,
            element_id: format!("item{}", item.id),
            href: config.item_url(item.id),
            image_src: item.image_path.clone().unwrap_or_default(),
            name: item.name.clone(),
            price_label: price_label(item.price),
            cart_control_id: format!("addTo-cart{}", item.id),
        }
    }
}

/// `12` renders as `12$`, `9.5` as `9.5$`
pub fn price_label(price: f64) -> String {
    format!("{}$", price)
}

pub fn item_cards(items: &[Item], config: &CatalogConfig) -> Vec<ItemCard> {
    items.iter().map(|item| ItemCard::new(item, config)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: u32, price: f64) -> Item {
        Item {
            id,
            name: format!("Item {}", id),
            price,
            image_path: Some(format!("../static/uploads/{}.png", id)),
            gender: Some("female".to_string()),
            item_type: None,
            description: None,
        }
    }

    #[test]
    fn test_card_fields() {
        let card = ItemCard::new(&make_item(42, 19.5), &CatalogConfig::default());

        assert_eq!(card.item_id, 42);
        assert_eq!(card.element_id, "item42");
        assert_eq!(card.href, "/item/42");
        assert_eq!(card.image_src, "../static/uploads/42.png");
        assert_eq!(card.name, "Item 42");
        assert_eq!(card.price_label, "19.5$");
        assert_eq!(card.cart_control_id, "addTo-cart42");
    }

    #[test]
    fn test_whole_prices_have_no_fraction() {
        assert_eq!(price_label(12.0), "12$");
        assert_eq!(price_label(0.25), "0.25$");
    }

    #[test]
    fn test_cards_follow_item_order() {
        let items = vec![make_item(3, 1.0), make_item(1, 2.0), make_item(2, 3.0)];
        let cards = item_cards(&items, &CatalogConfig::default());
        let ids: Vec<u32> = cards.iter().map(|c| c.item_id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_empty_list_renders_nothing() {
        assert!(item_cards(&[], &CatalogConfig::default()).is_empty());
    }

    #[test]
    fn test_missing_image_renders_empty_src() {
        let mut item = make_item(1, 1.0);
        item.image_path = None;
        assert_eq!(ItemCard::new(&item, &CatalogConfig::default()).image_src, "");
    }
}
