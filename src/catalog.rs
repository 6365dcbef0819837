//! Recipe Catalog
//!
//! Full recipe list, the filtered subset and the revealed page prefix.

use std::collections::BTreeSet;

use crate::models::Recipe;

/// Current search box text and cuisine selection
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeQuery {
    pub search: String,
    /// Empty means "all cuisines"
    pub cuisine: String,
}

impl RecipeQuery {
    pub fn matches(&self, recipe: &Recipe) -> bool {
        self.matches_search(recipe) && self.matches_cuisine(recipe)
    }

    fn matches_search(&self, recipe: &Recipe) -> bool {
        let term = self.search.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        let contains = |s: &str| s.to_lowercase().contains(&term);

        contains(&recipe.name)
            || contains(&recipe.cuisine)
            || recipe.ingredients.iter().any(|i| contains(i))
            || recipe.tags.iter().any(|t| contains(t))
    }

    fn matches_cuisine(&self, recipe: &Recipe) -> bool {
        self.cuisine.is_empty() || recipe.cuisine == self.cuisine
    }
}

/// Catalog state.
///
/// The revealed prefix is `filtered[..min(cursor, filtered.len())]`, so the
/// displayed length can never drift from the cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    all: Vec<Recipe>,
    filtered: Vec<Recipe>,
    cuisines: Vec<String>,
    cursor: usize,
    page_size: usize,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(Vec::new(), crate::config::BrowserConfig::DEFAULT.page_size)
    }
}

impl Catalog {
    /// Build from a fetched list. Filtered starts as a full copy; nothing is revealed yet.
    pub fn new(recipes: Vec<Recipe>, page_size: usize) -> Self {
        let cuisines = recipes
            .iter()
            .map(|r| r.cuisine.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        Self {
            filtered: recipes.clone(),
            all: recipes,
            cuisines,
            cursor: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn all(&self) -> &[Recipe] {
        &self.all
    }

    pub fn filtered(&self) -> &[Recipe] {
        &self.filtered
    }

    /// Distinct cuisines, sorted ascending
    pub fn cuisines(&self) -> &[String] {
        &self.cuisines
    }

    pub fn displayed(&self) -> &[Recipe] {
        &self.filtered[..self.cursor.min(self.filtered.len())]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Whether the "show more" control should be visible
    pub fn has_more(&self) -> bool {
        self.cursor < self.filtered.len()
    }

    pub fn find(&self, id: u32) -> Option<&Recipe> {
        self.all.iter().find(|r| r.id == id)
    }

    /// Replace the filtered subset and go back to the first page.
    /// Returns the number of matches.
    pub fn apply_query(&mut self, query: &RecipeQuery) -> usize {
        self.filtered = self
            .all
            .iter()
            .filter(|r| query.matches(r))
            .cloned()
            .collect();
        self.reset_page();
        self.filtered.len()
    }

    /// Clear the revealed cards and reveal the first page again.
    pub fn reset_page(&mut self) {
        self.cursor = 0;
        self.load_more();
    }

    /// Reveal the next page. Returns only the newly revealed recipes.
    pub fn load_more(&mut self) -> &[Recipe] {
        let start = self.cursor.min(self.filtered.len());
        let end = (start + self.page_size).min(self.filtered.len());
        self.cursor += self.page_size;
        &self.filtered[start..end]
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::Difficulty;

    pub(crate) fn make_recipe(id: u32, name: &str, cuisine: &str) -> Recipe {
        Recipe {
            id,
            name: name.to_string(),
            image: format!("https://cdn.dummyjson.com/recipe-images/{}.webp", id),
            cuisine: cuisine.to_string(),
            difficulty: Difficulty::Easy,
            prep_time_minutes: 10,
            cook_time_minutes: 20,
            servings: 2,
            calories_per_serving: 400,
            rating: 4.5,
            review_count: 12,
            ingredients: vec!["Salt".to_string(), "Olive oil".to_string()],
            instructions: vec!["Cook it.".to_string()],
            tags: vec!["Dinner".to_string()],
        }
    }

    fn sample() -> Vec<Recipe> {
        let mut chicken = make_recipe(1, "Chicken Alfredo Pasta", "Italian");
        chicken.ingredients.push("Chicken breast".to_string());
        let mut curry = make_recipe(2, "Vegetable Curry", "Indian");
        curry.tags.push("Spicy".to_string());
        let mut tikka = make_recipe(3, "Tikka Masala", "Indian");
        tikka.ingredients.push("Boneless CHICKEN thighs".to_string());
        let salad = make_recipe(4, "Greek Salad", "Greek");
        vec![chicken, curry, tikka, salad]
    }

    fn many(n: u32, cuisine: &str) -> Vec<Recipe> {
        (1..=n).map(|i| make_recipe(i, &format!("Dish {}", i), cuisine)).collect()
    }

    fn query(search: &str, cuisine: &str) -> RecipeQuery {
        RecipeQuery { search: search.to_string(), cuisine: cuisine.to_string() }
    }

    #[test]
    fn test_cuisines_distinct_sorted() {
        let catalog = Catalog::new(sample(), 9);
        assert_eq!(catalog.cuisines(), &["Greek", "Indian", "Italian"]);
    }

    #[test]
    fn test_empty_query_keeps_everything_in_order() {
        let mut catalog = Catalog::new(sample(), 9);
        catalog.apply_query(&RecipeQuery::default());
        assert_eq!(catalog.filtered(), catalog.all());
    }

    #[test]
    fn test_search_matches_every_field_case_insensitive() {
        let mut catalog = Catalog::new(sample(), 9);

        // Ingredient match on 1, upper-case ingredient on 3
        assert_eq!(catalog.apply_query(&query("chicken", "")), 2);
        let ids: Vec<u32> = catalog.filtered().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);

        // Tag
        catalog.apply_query(&query("SPICY", ""));
        assert_eq!(catalog.filtered()[0].id, 2);

        // Cuisine
        assert_eq!(catalog.apply_query(&query("greek", "")), 1);

        // Surrounding whitespace ignored
        assert_eq!(catalog.apply_query(&query("  curry ", "")), 1);
    }

    #[test]
    fn test_search_and_cuisine_combine() {
        let mut catalog = Catalog::new(sample(), 9);
        let q = query("chicken", "Indian");
        catalog.apply_query(&q);

        assert_eq!(catalog.filtered().len(), 1);
        for recipe in catalog.filtered() {
            assert!(q.matches(recipe));
            assert_eq!(recipe.cuisine, "Indian");
        }
    }

    #[test]
    fn test_cuisine_is_exact_match() {
        let mut catalog = Catalog::new(sample(), 9);
        assert_eq!(catalog.apply_query(&query("", "indian")), 0);
        assert_eq!(catalog.apply_query(&query("", "Indian")), 2);
    }

    #[test]
    fn test_no_matches_hides_show_more() {
        let mut catalog = Catalog::new(sample(), 9);
        assert_eq!(catalog.apply_query(&query("zzz", "")), 0);
        assert!(catalog.displayed().is_empty());
        assert!(!catalog.has_more());
    }

    #[test]
    fn test_load_more_reveals_pages() {
        for n in [0u32, 1, 8, 9, 10, 18, 25] {
            let mut catalog = Catalog::new(many(n, "Thai"), 9);
            catalog.reset_page();
            for k in 1..=4usize {
                assert_eq!(catalog.displayed().len(), (9 * k).min(n as usize));
                assert_eq!(catalog.has_more(), catalog.displayed().len() < n as usize);
                catalog.load_more();
            }
        }
    }

    #[test]
    fn test_load_more_returns_only_new_recipes() {
        let mut catalog = Catalog::new(many(12, "Thai"), 9);
        assert_eq!(catalog.load_more().len(), 9);

        let added: Vec<u32> = catalog.load_more().iter().map(|r| r.id).collect();
        assert_eq!(added, vec![10, 11, 12]);
        assert!(catalog.load_more().is_empty());
    }

    #[test]
    fn test_italian_twelve_shows_nine_then_all() {
        let mut recipes = many(12, "Italian");
        recipes.extend((13..=20).map(|i| make_recipe(i, "Pad Thai", "Thai")));
        let mut catalog = Catalog::new(recipes, 9);

        catalog.apply_query(&query("", "Italian"));
        assert_eq!(catalog.displayed().len(), 9);
        assert!(catalog.has_more());

        catalog.load_more();
        assert_eq!(catalog.displayed().len(), 12);
        assert!(!catalog.has_more());
    }

    #[test]
    fn test_filter_resets_to_first_page() {
        let mut catalog = Catalog::new(many(30, "Thai"), 9);
        catalog.reset_page();
        catalog.load_more();
        catalog.load_more();
        assert_eq!(catalog.displayed().len(), 27);

        catalog.apply_query(&query("dish", ""));
        assert_eq!(catalog.cursor(), 9);
        assert_eq!(catalog.displayed().len(), 9);
    }
}
