//! Display Formatting
//!
//! Pure helpers that turn recipe fields into the text shown on cards and in the modal.

use crate::models::{Difficulty, Recipe};

pub const FULL_STAR: char = '★';
pub const HALF_STAR: char = '⯪';
pub const EMPTY_STAR: char = '☆';

const MAX_STARS: u32 = 5;
const INGREDIENT_PREVIEW_LEN: usize = 5;

/// Star breakdown for a 0-5 rating; always sums to five glyphs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarRating {
    pub full: u32,
    pub half: u32,
    pub empty: u32,
}

impl StarRating {
    pub fn from_rating(rating: f64) -> Self {
        let rating = if rating.is_finite() {
            rating.clamp(0.0, MAX_STARS as f64)
        } else {
            0.0
        };
        let full = rating.floor() as u32;
        let half = u32::from(full < MAX_STARS && rating.fract() >= 0.5);
        Self {
            full,
            half,
            empty: MAX_STARS - full - half,
        }
    }

    pub fn glyphs(&self) -> String {
        let mut stars = String::with_capacity(MAX_STARS as usize * 3);
        stars.extend(std::iter::repeat(FULL_STAR).take(self.full as usize));
        stars.extend(std::iter::repeat(HALF_STAR).take(self.half as usize));
        stars.extend(std::iter::repeat(EMPTY_STAR).take(self.empty as usize));
        stars
    }
}

pub fn star_glyphs(rating: f64) -> String {
    StarRating::from_rating(rating).glyphs()
}

/// Rating to one decimal place
pub fn rating_text(rating: f64) -> String {
    format!("{:.1}", rating)
}

/// First five ingredients, with "..." when more were left out
pub fn ingredient_preview(ingredients: &[String]) -> String {
    let mut preview = ingredients
        .iter()
        .take(INGREDIENT_PREVIEW_LEN)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    if ingredients.len() > INGREDIENT_PREVIEW_LEN {
        preview.push_str("...");
    }
    preview
}

/// CSS class for the difficulty badge, e.g. `difficulty-easy`
pub fn difficulty_class(difficulty: &Difficulty) -> String {
    let slug = difficulty
        .label()
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    format!("difficulty-badge difficulty-{}", slug)
}

pub fn total_time_text(recipe: &Recipe) -> String {
    format!("⏱️ {} min", recipe.total_time_minutes())
}

pub fn review_text(recipe: &Recipe) -> String {
    format!("{} ({} reviews)", rating_text(recipe.rating), recipe.review_count)
}
