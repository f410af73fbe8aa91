//! Page Controllers
//!
//! DOM event bindings, organized by page concern.

pub mod cart;
pub mod catalog;
pub mod navigation;
pub mod sort;
