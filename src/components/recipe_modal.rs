//! Recipe Modal Component
//!
//! Full recipe detail in an overlay. Closed by the × button, a click on the
//! overlay background, or Escape. Closing only hides it.

use leptos::ev;
use leptos::prelude::*;

use crate::components::RatingStars;
use crate::format::{difficulty_class, review_text};
use crate::models::Recipe;
use crate::store::{store_close_recipe, use_browser_store, BrowserStateStoreFields};

#[component]
pub fn RecipeModal() -> impl IntoView {
    let store = use_browser_store();

    let handle = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && store.modal_open().get_untracked() {
            store_close_recipe(&store);
        }
    });
    on_cleanup(move || handle.remove());

    // Only clicks on the overlay itself, not bubbled from the content
    let on_overlay_click = move |ev: web_sys::MouseEvent| {
        if ev.target() == ev.current_target() {
            store_close_recipe(&store);
        }
    };

    let display = move || if store.modal_open().get() { "flex" } else { "none" };

    view! {
        <div id="recipeModal" class="modal" style:display=display on:click=on_overlay_click>
            <div class="modal-content">
                <button class="modal-close" on:click=move |_| store_close_recipe(&store)>
                    "×"
                </button>
                <div id="modalBody" class="modal-body">
                    {move || {
                        store.active_recipe().get().map(|recipe| view! { <RecipeDetail recipe=recipe /> })
                    }}
                </div>
            </div>
        </div>
    }
}

#[component]
fn RecipeDetail(recipe: Recipe) -> impl IntoView {
    let badge_class = difficulty_class(&recipe.difficulty);
    let rating_label = review_text(&recipe);
    let Recipe {
        name,
        image,
        cuisine,
        difficulty,
        prep_time_minutes,
        cook_time_minutes,
        servings,
        calories_per_serving,
        rating,
        ingredients,
        instructions,
        tags,
        ..
    } = recipe;
    let alt = name.clone();

    view! {
        <img src=image alt=alt class="modal-recipe-image" />
        <h2 class="modal-recipe-title">{name}</h2>
        <div class="modal-meta">
            <span class="cuisine-badge">{cuisine}</span>
            <span class=badge_class>{difficulty.label().to_string()}</span>
            <span class="meta-item">{format!("⏱️ Prep: {} min", prep_time_minutes)}</span>
            <span class="meta-item">{format!("🍳 Cook: {} min", cook_time_minutes)}</span>
            <span class="meta-item">{format!("🍽️ Servings: {}", servings)}</span>
            <span class="meta-item">{format!("🔥 {} cal/serving", calories_per_serving)}</span>
        </div>
        <RatingStars rating=rating label=rating_label />

        <div class="modal-section">
            <h3 class="modal-section-title">"Ingredients"</h3>
            <ul class="modal-list">
                {ingredients.into_iter().map(|item| view! { <li>{item}</li> }).collect_view()}
            </ul>
        </div>

        <div class="modal-section">
            <h3 class="modal-section-title">"Instructions"</h3>
            <ol class="instructions-list">
                {instructions.into_iter().map(|step| view! { <li>{step}</li> }).collect_view()}
            </ol>
        </div>

        <div class="modal-section">
            <h3 class="modal-section-title">"Tags"</h3>
            <div class="tags-container">
                {tags.into_iter().map(|tag| view! { <span class="tag">{tag}</span> }).collect_view()}
            </div>
        </div>
    }
}
