//! Recipe Grid Component
//!
//! Revealed cards plus the "show more" control. Cards are keyed by recipe id,
//! so revealing a page only mounts the new cards.

use leptos::prelude::*;

use crate::components::RecipeCard;
use crate::store::{store_load_more, use_browser_store, BrowserStateStoreFields};

#[component]
pub fn RecipeGrid() -> impl IntoView {
    let store = use_browser_store();

    let displayed = move || store.catalog().with(|c| c.displayed().to_vec());
    let has_more = move || store.catalog().with(|c| c.has_more());
    let summary = move || {
        store.catalog().with(|c| {
            format!("Showing {} of {} recipes", c.displayed().len(), c.filtered().len())
        })
    };

    view! {
        <p class="results-summary">{summary}</p>

        <div id="recipesGrid" class="recipes-grid">
            <For
                each=displayed
                key=|recipe| recipe.id
                children=move |recipe| view! { <RecipeCard recipe=recipe /> }
            />
        </div>

        <Show when=has_more>
            <div id="showMoreContainer" class="show-more-container">
                <button
                    id="showMoreButton"
                    class="show-more-btn"
                    on:click=move |_| {
                        store_load_more(&store);
                    }
                >
                    "Show More Recipes"
                </button>
            </div>
        </Show>
    }
}
