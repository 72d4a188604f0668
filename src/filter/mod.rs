//! Recipe filtering by free-text query and selected tags.
//!
//! A recipe is kept when the lower-cased query occurs in its name, its
//! description or any of its tags, and when it carries every selected tag.
//! Results keep collection order.

pub mod selection;

pub use selection::TagSelection;

use crate::catalog::{Recipe, RecipeRegistry};
use tracing::debug;

/// Both filter inputs, as collected from a search form or the CLI
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub q: String,
    pub tags: TagSelection,
}

impl SearchQuery {
    pub fn new(q: impl Into<String>, tags: TagSelection) -> Self {
        Self { q: q.into(), tags }
    }

    /// Run the filter over every recipe in the registry
    pub fn apply<'a>(&self, registry: &'a RecipeRegistry) -> Vec<&'a Recipe> {
        let results = filter(registry.recipes(), &self.q, &self.tags);
        debug!(
            "Filter q={:?} tags={:?}: {} of {} recipes",
            self.q,
            self.tags.to_query_value(),
            results.len(),
            registry.len()
        );
        results
    }
}

/// Recipes matching both the text and the tag dimension, in original order
pub fn filter<'a>(recipes: &'a [Recipe], query: &str, selected: &TagSelection) -> Vec<&'a Recipe> {
    let query = query.to_lowercase();
    recipes
        .iter()
        .filter(|recipe| matches_text(recipe, &query) && matches_tags(recipe, selected))
        .collect()
}

/// `query` must already be lower-cased
fn matches_text(recipe: &Recipe, query: &str) -> bool {
    recipe.name.to_lowercase().contains(query)
        || recipe.description.to_lowercase().contains(query)
        || recipe.tags.iter().any(|tag| tag.to_lowercase().contains(query))
}

fn matches_tags(recipe: &Recipe, selected: &TagSelection) -> bool {
    selected.iter().all(|label| recipe.has_tag(label))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::bundled;

    fn names(recipes: &[&Recipe]) -> Vec<String> {
        recipes.iter().map(|r| r.name.clone()).collect()
    }

    #[test]
    fn test_empty_inputs_return_everything() {
        let recipes = bundled::recipes();
        let results = filter(&recipes, "", &TagSelection::new());
        assert_eq!(results.len(), recipes.len());
        assert!(results.iter().zip(&recipes).all(|(a, b)| *a == b));
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let recipes = bundled::recipes();
        assert_eq!(
            names(&filter(&recipes, "AVOCADO", &TagSelection::new())),
            vec!["Avocado Toast"]
        );
        assert_eq!(
            names(&filter(&recipes, "tahini", &TagSelection::new())),
            vec!["Quinoa Buddha Bowl"]
        );
    }

    #[test]
    fn test_query_matches_tag_substrings() {
        let recipes = bundled::recipes();
        // "free" only appears through the Gluten-Free tag
        assert_eq!(
            names(&filter(&recipes, "free", &TagSelection::new())),
            vec!["Quinoa Buddha Bowl"]
        );
    }

    #[test]
    fn test_whitespace_query_is_literal() {
        let recipes = bundled::recipes();
        assert_eq!(filter(&recipes, "   ", &TagSelection::new()).len(), 0);
        assert_eq!(filter(&recipes, " ", &TagSelection::new()).len(), 2);
    }

    #[test]
    fn test_tag_selection_is_intersection() {
        let recipes = bundled::recipes();
        assert_eq!(
            names(&filter(&recipes, "", &TagSelection::parse("Vegan"))),
            vec!["Quinoa Buddha Bowl", "Avocado Toast"]
        );
        assert_eq!(
            names(&filter(&recipes, "", &TagSelection::parse("Vegan,Gluten-Free"))),
            vec!["Quinoa Buddha Bowl"]
        );
        assert!(filter(&recipes, "", &TagSelection::parse("Halal")).is_empty());
    }

    #[test]
    fn test_tag_matching_is_exact() {
        let recipes = bundled::recipes();
        assert!(filter(&recipes, "", &TagSelection::parse("vegan")).is_empty());
    }

    #[test]
    fn test_empty_collection() {
        assert!(filter(&[], "anything", &TagSelection::parse("Vegan")).is_empty());
    }

    #[test]
    fn test_search_query_apply() {
        let registry = RecipeRegistry::bundled().unwrap();
        let query = SearchQuery::new("toast", TagSelection::parse("Vegetarian"));
        let results = query.apply(&registry);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, 2);
    }
}
