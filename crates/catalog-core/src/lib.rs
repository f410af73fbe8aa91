//! Catalog Core
//!
//! Browser-independent logic behind the storefront catalog page.
//! Nothing here touches the DOM, so every rule can be tested natively.

pub mod cards;
pub mod cart;
pub mod config;
pub mod error;
pub mod models;
pub mod navigation;
pub mod recent;
pub mod session;
pub mod sort;
pub mod storage;

pub use error::CatalogError;
pub use models::{Category, Item};
pub use storage::{KeyValueStore, MemoryStore};
