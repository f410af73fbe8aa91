//! Storefront Catalog Entry Point

mod api;
mod app;
mod browser_storage;
mod components;
mod context;
mod controllers;
mod dom;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = app::boot() {
        web_sys::console::error_1(&format!("[BOOT] {}", e).into());
    }
}
