//! Star rating line shared by cards and the detail modal.

use leptos::prelude::*;

use crate::format::star_glyphs;

#[component]
pub fn RatingStars(rating: f64, #[prop(into)] label: String) -> impl IntoView {
    view! {
        <div class="rating">
            <span class="stars">{star_glyphs(rating)}</span>
            <span class="rating-value">{label}</span>
        </div>
    }
}
