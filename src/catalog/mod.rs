pub mod bundled;
pub mod file;
pub mod models;

pub use file::CatalogFile;
pub use models::{Ingredient, Recipe, Tag};

use crate::error::{Error, Result};
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

/// Read-only recipe collection and tag catalog.
///
/// Built once at start-up and shared behind an `Arc`; nothing mutates it
/// afterwards.
#[derive(Debug, Clone)]
pub struct RecipeRegistry {
    recipes: Vec<Recipe>,
    tags: Vec<Tag>,
}

impl RecipeRegistry {
    /// Build a registry, rejecting duplicate ids and malformed recipes or tags
    pub fn new(recipes: Vec<Recipe>, tags: Vec<Tag>) -> Result<Self> {
        for tag in &tags {
            Tag::check_label(&tag.label).map_err(Error::Validation)?;
        }

        let mut seen = HashSet::new();
        for recipe in &recipes {
            if !seen.insert(recipe.id) {
                return Err(Error::Validation(format!(
                    "Duplicate recipe id: {}",
                    recipe.id
                )));
            }

            validate_recipe(recipe)
                .map_err(|e| Error::Validation(format!("Recipe {}: {}", recipe.id, e)))?;
        }

        Ok(Self { recipes, tags })
    }

    /// The recipes and tags compiled into the binary
    pub fn bundled() -> Result<Self> {
        Self::new(bundled::recipes(), bundled::tags())
    }

    /// Load from a catalog file, or fall back to the bundled set
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let registry = match path {
            Some(path) => {
                let catalog = CatalogFile::from_file(path)?;
                let registry = Self::new(catalog.recipes, catalog.tags)?;
                info!(
                    "Loaded catalog from {}: {} recipes, {} tags",
                    path.display(),
                    registry.len(),
                    registry.tags().len()
                );
                registry
            }
            None => {
                let registry = Self::bundled()?;
                info!(
                    "Using bundled catalog: {} recipes, {} tags",
                    registry.len(),
                    registry.tags().len()
                );
                registry
            }
        };

        Ok(registry)
    }

    /// Look up a recipe by id
    pub fn find(&self, id: i64) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    /// All recipes in collection order
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

fn validate_recipe(recipe: &Recipe) -> Result<()> {
    if recipe.name.trim().is_empty() {
        return Err(Error::Validation("Recipe name cannot be empty".to_string()));
    }

    if recipe.cooking_time == Some(0) {
        return Err(Error::Validation(
            "Cooking time must be positive".to_string(),
        ));
    }

    if recipe.servings == Some(0) {
        return Err(Error::Validation("Servings must be positive".to_string()));
    }

    for tag in &recipe.tags {
        Tag::check_label(tag).map_err(Error::Validation)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::TagSelection;

    fn recipe(id: i64, name: &str) -> Recipe {
        Recipe {
            id,
            name: name.to_string(),
            description: String::new(),
            tags: vec![],
            image: String::new(),
            ingredients: vec![],
            instructions: vec![],
            cooking_time: None,
            servings: None,
            notes: vec![],
        }
    }

    #[test]
    fn test_bundled_registry() {
        let registry = RecipeRegistry::bundled().unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.tags().len(), 5);
        assert_eq!(registry.find(1).unwrap().name, "Quinoa Buddha Bowl");
        assert_eq!(registry.find(2).unwrap().name, "Avocado Toast");
    }

    #[test]
    fn test_find_missing_returns_none() {
        let registry = RecipeRegistry::bundled().unwrap();
        assert!(registry.find(999).is_none());
        assert!(registry.find(-1).is_none());
    }

    #[test]
    fn test_reject_duplicate_ids() {
        let result = RecipeRegistry::new(vec![recipe(1, "A"), recipe(1, "B")], vec![]);
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[test]
    fn test_reject_malformed_recipes() {
        assert!(RecipeRegistry::new(vec![recipe(1, "  ")], vec![]).is_err());

        let mut zero_time = recipe(2, "Toast");
        zero_time.cooking_time = Some(0);
        assert!(RecipeRegistry::new(vec![zero_time], vec![]).is_err());

        let mut zero_servings = recipe(3, "Toast");
        zero_servings.servings = Some(0);
        assert!(RecipeRegistry::new(vec![zero_servings], vec![]).is_err());
    }

    #[test]
    fn test_reject_tags_that_cannot_be_selected() {
        let mut comma = recipe(1, "Kettle Corn");
        comma.tags = vec!["Sweet, Savory".to_string()];
        assert!(matches!(
            RecipeRegistry::new(vec![comma], vec![]),
            Err(Error::Validation(_))
        ));

        let mut padded = recipe(2, "Toast");
        padded.tags = vec!["Vegan ".to_string()];
        assert!(RecipeRegistry::new(vec![padded], vec![]).is_err());

        let catalog_tag = vec![Tag::new("Sweet, Savory", "")];
        assert!(RecipeRegistry::new(vec![], catalog_tag).is_err());
    }

    #[test]
    fn test_every_catalog_tag_survives_selection() {
        let registry = RecipeRegistry::bundled().unwrap();
        for tag in registry.tags() {
            let selection = TagSelection::parse(&TagSelection::parse(&tag.label).to_query_value());
            assert_eq!(selection.iter().collect::<Vec<_>>(), vec![tag.label.as_str()]);

            let kept = crate::filter::filter(registry.recipes(), "", &selection);
            let carrying = registry.recipes().iter().filter(|r| r.has_tag(&tag.label)).count();
            assert_eq!(kept.len(), carrying, "{}", tag.label);
        }
    }

    #[test]
    fn test_load_rejects_duplicate_ids_in_file() {
        use std::io::Write;

        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        file.write_all(
            b"version: 1\nrecipes:\n  - {id: 5, name: Soup, description: A}\n  - {id: 5, name: Stew, description: B}\n",
        )
        .unwrap();
        file.flush().unwrap();

        let result = RecipeRegistry::load(Some(file.path()));
        assert!(matches!(result, Err(Error::Validation(msg)) if msg.contains("Duplicate recipe id: 5")));
    }

    #[test]
    fn test_empty_registry() {
        let registry = RecipeRegistry::new(vec![], vec![]).unwrap();
        assert!(registry.is_empty());
        assert!(registry.find(1).is_none());
    }
}
