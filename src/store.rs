//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::FetchError;
use crate::catalog::{Catalog, RecipeQuery};
use crate::config::BrowserConfig;
use crate::models::Recipe;

/// Page-level display state. Exactly one is visible at a time.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadStatus {
    #[default]
    Loading,
    Error(String),
    Loaded,
}

impl LoadStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadStatus::Loading)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadStatus::Loaded)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            LoadStatus::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Identifies one fetch cycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn seq(&self) -> u64 {
        self.0
    }
}

/// Hands out tickets; only the newest ticket may apply its response
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestTracker {
    latest: u64,
}

impl RequestTracker {
    pub fn issue(&mut self) -> RequestTicket {
        self.latest += 1;
        RequestTicket(self.latest)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.latest
    }
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct BrowserState {
    /// All / filtered / revealed recipes
    pub catalog: Catalog,
    /// Search box and cuisine dropdown
    pub query: RecipeQuery,
    pub status: LoadStatus,
    pub requests: RequestTracker,
    /// Last recipe opened in the modal; kept after the modal closes
    pub active_recipe: Option<Recipe>,
    pub modal_open: bool,
}

impl BrowserState {
    pub fn new(config: &BrowserConfig) -> Self {
        Self {
            catalog: Catalog::new(Vec::new(), config.page_size),
            ..Default::default()
        }
    }

    /// Enter the loading state and issue a ticket for the new request.
    pub fn begin_load(&mut self) -> RequestTicket {
        self.status = LoadStatus::Loading;
        self.requests.issue()
    }

    /// Apply a fetch result. Returns false (and changes nothing) for a superseded request.
    pub fn finish_load(
        &mut self,
        ticket: RequestTicket,
        result: Result<Vec<Recipe>, FetchError>,
        config: &BrowserConfig,
    ) -> bool {
        if !self.requests.is_current(ticket) {
            return false;
        }
        match result {
            Ok(recipes) => {
                self.catalog = Catalog::new(recipes, config.page_size);
                self.catalog.apply_query(&self.query);
                self.status = LoadStatus::Loaded;
            }
            Err(_) => {
                self.status = LoadStatus::Error(config.fetch_error_message.to_string());
            }
        }
        true
    }

    /// Show the modal for a recipe. Unknown ids leave the modal untouched.
    pub fn open_recipe(&mut self, id: u32) -> bool {
        match self.catalog.find(id) {
            Some(recipe) => {
                self.active_recipe = Some(recipe.clone());
                self.modal_open = true;
                true
            }
            None => false,
        }
    }

    pub fn close_recipe(&mut self) {
        self.modal_open = false;
    }
}

/// Type alias for the store
pub type BrowserStore = Store<BrowserState>;

/// Get the browser store from context
pub fn use_browser_store() -> BrowserStore {
    expect_context::<BrowserStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Re-run the filter with the current query. Returns the match count.
pub fn store_apply_query(store: &BrowserStore) -> usize {
    let query = store.query().get_untracked();
    let matches = store.catalog().write().apply_query(&query);
    web_sys::console::log_1(
        &format!("[FILTER] search={:?} cuisine={:?} -> {} recipes", query.search, query.cuisine, matches).into(),
    );
    matches
}

/// Reveal the next page. Returns how many cards were added.
pub fn store_load_more(store: &BrowserStore) -> usize {
    store.catalog().write().load_more().len()
}

pub fn store_open_recipe(store: &BrowserStore, id: u32) {
    store.write().open_recipe(id);
}

pub fn store_close_recipe(store: &BrowserStore) {
    if store.modal_open().get_untracked() {
        store.write().close_recipe();
    }
}
