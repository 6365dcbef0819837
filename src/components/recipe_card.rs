//! Recipe Card Component
//!
//! Summary card in the grid with a button that opens the detail modal.

use leptos::prelude::*;

use crate::components::RatingStars;
use crate::format::{difficulty_class, ingredient_preview, rating_text, total_time_text};
use crate::models::Recipe;
use crate::store::{store_open_recipe, use_browser_store};

#[component]
pub fn RecipeCard(recipe: Recipe) -> impl IntoView {
    let store = use_browser_store();
    let id = recipe.id;
    let total_time = total_time_text(&recipe);
    let badge_class = difficulty_class(&recipe.difficulty);
    let difficulty = recipe.difficulty.label().to_string();
    let ingredients = ingredient_preview(&recipe.ingredients);
    let rating_label = rating_text(recipe.rating);
    let Recipe { name, image, cuisine, rating, .. } = recipe;
    let alt = name.clone();

    view! {
        <div class="recipe-card">
            <img src=image alt=alt class="recipe-image" />
            <div class="recipe-content">
                <div class="recipe-header">
                    <h3 class="recipe-name">{name}</h3>
                </div>
                <div class="recipe-meta">
                    <span class="meta-item">{total_time}</span>
                    <span class="cuisine-badge">{cuisine}</span>
                    <span class=badge_class>{difficulty}</span>
                </div>
                <RatingStars rating=rating label=rating_label />
                <div class="ingredients-section">
                    <h4 class="ingredients-title">"Ingredients:"</h4>
                    <p class="ingredients-list">{ingredients}</p>
                </div>
                <button
                    class="view-recipe-btn"
                    data-recipe-id=id.to_string()
                    on:click=move |_| store_open_recipe(&store, id)
                >
                    "View Full Recipe"
                </button>
            </div>
        </div>
    }
}
