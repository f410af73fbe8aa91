//! Server API
//!
//! HTTP wrappers for the item and cart endpoints.

use catalog_core::cart::CartReply;
use catalog_core::{CatalogError, Item};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, CatalogError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| CatalogError::Network(e.to_string()))?;
    if !response.ok() {
        return Err(CatalogError::Network(format!("{} answered {}", url, response.status())));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| CatalogError::Decode(e.to_string()))
}

/// `GET /getitems/{category}`
pub async fn get_items(url: &str) -> Result<Vec<Item>, CatalogError> {
    get_json(url).await
}

/// `GET /addtocart/{id}` or `GET /removefromcart/{id}`
pub async fn submit_cart(url: &str) -> Result<Vec<CartReply>, CatalogError> {
    get_json(url).await
}
