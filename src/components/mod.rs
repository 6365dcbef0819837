//! UI Components
//!
//! Leptos components for the recipe page.

mod nav_bar;
mod filter_bar;
mod rating_stars;
mod recipe_card;
mod recipe_grid;
mod recipe_modal;
mod status_panel;

pub use nav_bar::NavBar;
pub use filter_bar::FilterBar;
pub use rating_stars::RatingStars;
pub use recipe_card::RecipeCard;
pub use recipe_grid::RecipeGrid;
pub use recipe_modal::RecipeModal;
pub use status_panel::{ErrorState, LoadingState};
