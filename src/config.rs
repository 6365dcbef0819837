//! Browser Configuration
//!
//! Fixed tunables for the recipe page. There is no runtime configuration source.

/// Page-wide settings provided through `AppContext`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowserConfig {
    /// Recipe list endpoint (full list, no query parameters)
    pub recipes_url: &'static str,
    /// Cards revealed per "show more" step
    pub page_size: usize,
    /// Quiet period before a search pass runs
    pub search_debounce_ms: u32,
    /// Landing page for signed-out visitors
    pub entry_page: &'static str,
    pub display_name_key: &'static str,
    pub user_id_key: &'static str,
    /// Shown for every kind of fetch failure
    pub fetch_error_message: &'static str,
}

impl BrowserConfig {
    pub const DEFAULT: Self = Self {
        recipes_url: "https://dummyjson.com/recipes",
        page_size: 9,
        search_debounce_ms: 300,
        entry_page: "index.html",
        display_name_key: "userFirstName",
        user_id_key: "userId",
        fetch_error_message: "Failed to load recipes. Please check your connection and try again.",
    };
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
