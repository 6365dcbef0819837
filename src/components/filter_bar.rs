//! Filter Bar Component
//!
//! Search box and cuisine dropdown.

use leptos::prelude::*;
use leptos_debounce::use_debouncer;

use crate::context::use_app_context;
use crate::search::{on_cuisine_change, on_search_input};
use crate::store::{use_browser_store, BrowserStateStoreFields};

#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_browser_store();
    let debouncer = use_debouncer(ctx.config.search_debounce_ms);

    // Options come from the loaded data
    let cuisines = move || store.catalog().with(|c| c.cuisines().to_vec());

    view! {
        <div class="search-filter-section">
            <input
                id="searchInput"
                type="text"
                class="search-input"
                placeholder="Search by name, cuisine, ingredient or tag..."
                autocomplete="off"
                prop:value=move || store.query().with(|q| q.search.clone())
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    debouncer.with_value(|d| on_search_input(d, &store, text));
                }
            />
            <select
                id="cuisineFilter"
                class="cuisine-filter"
                on:change=move |ev| {
                    let cuisine = event_target_value(&ev);
                    debouncer.with_value(|d| on_cuisine_change(d, &store, cuisine));
                }
            >
                <option value="">"All Cuisines"</option>
                <For
                    each=cuisines
                    key=|cuisine| cuisine.clone()
                    children=move |cuisine| {
                        let value = cuisine.clone();
                        view! { <option value=value>{cuisine}</option> }
                    }
                />
            </select>
        </div>
    }
}
