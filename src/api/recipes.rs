//! Recipe Endpoints

use gloo_net::http::Request;

use super::FetchError;
use crate::models::{Recipe, RecipeList};

/// Fetch the whole recipe list. One request, no caching, no retry.
pub async fn fetch_recipes(url: &str) -> Result<Vec<Recipe>, FetchError> {
    let response = Request::get(url).send().await?;
    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }
    let body = response.text().await?;
    decode_recipes(&body)
}

/// Parse a `{ "recipes": [...] }` body
pub fn decode_recipes(body: &str) -> Result<Vec<Recipe>, FetchError> {
    let list: RecipeList = serde_json::from_str(body)?;
    Ok(list.recipes)
}
