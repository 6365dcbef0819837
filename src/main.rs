//! Recipe Browser Frontend Entry Point

mod api;
mod app;
mod catalog;
mod components;
mod config;
mod context;
mod format;
mod models;
mod search;
mod session;
mod store;

use app::App;
use config::BrowserConfig;
use leptos::prelude::*;
use session::LocalStore;

fn main() {
    console_error_panic_hook::set_once();

    // Nothing else starts for signed-out visitors, including the fetch
    let config = BrowserConfig::DEFAULT;
    match session::resolve(&LocalStore::open(), &config) {
        Some(user) => {
            mount_to_body(move || view! { <App user=user /> });
        }
        None => session::redirect_to_entry(&config),
    }
}
