//! Recipe Browser App
//!
//! Root component: provides shared state, drives the fetch cycle and switches
//! between the loading, error and loaded views.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{ErrorState, FilterBar, LoadingState, NavBar, RecipeGrid, RecipeModal};
use crate::config::BrowserConfig;
use crate::context::AppContext;
use crate::session::UserSession;
use crate::store::{BrowserState, BrowserStateStoreFields, LoadStatus};

#[component]
pub fn App(user: UserSession) -> impl IntoView {
    let config = BrowserConfig::DEFAULT;
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    // Provide context to all children
    provide_context(AppContext::new(config, user, (reload_trigger, set_reload_trigger)));
    let store = Store::new(BrowserState::new(&config));
    provide_context(store);

    // Fetch on mount and on every retry
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        let ticket = store.write().begin_load();
        web_sys::console::log_1(
            &format!("[LOADER] Fetching recipes, request #{}, trigger={}", ticket.seq(), trigger).into(),
        );

        spawn_local(async move {
            let result = api::fetch_recipes(config.recipes_url).await;
            match &result {
                Ok(recipes) => {
                    web_sys::console::log_1(&format!("[LOADER] Loaded {} recipes", recipes.len()).into());
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[LOADER] Error fetching recipes: {}", e).into());
                }
            }

            let applied = store
                .try_write()
                .map(|mut state| state.finish_load(ticket, result, &config))
                .unwrap_or(false);
            if !applied {
                web_sys::console::log_1(
                    &format!("[LOADER] Dropped stale response for request #{}", ticket.seq()).into(),
                );
            }
        });
    });

    // Root writes notify every field; only re-render the page body on a real change
    let status = Memo::new(move |_| store.status().get());

    view! {
        <NavBar />

        <main class="main-content">
            <section class="hero">
                <h1>"Discover Delicious Recipes"</h1>
                <p>"Search by name, cuisine, ingredient or tag"</p>
            </section>

            <FilterBar />

            {move || match status.get() {
                LoadStatus::Loading => view! { <LoadingState /> }.into_any(),
                LoadStatus::Error(message) => view! { <ErrorState message=message /> }.into_any(),
                LoadStatus::Loaded => view! { <RecipeGrid /> }.into_any(),
            }}
        </main>

        <RecipeModal />
    }
}
