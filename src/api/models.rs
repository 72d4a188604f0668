use serde::{Deserialize, Serialize};

use crate::catalog::{Ingredient, Recipe, Tag};
use crate::filter::TagSelection;

/// Recipe list request parameters
#[derive(Debug, Clone, Deserialize)]
pub struct RecipeListParams {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub tags: TagSelection,
}

/// Filtered recipe list response
#[derive(Debug, Clone, Serialize)]
pub struct RecipeListResponse {
    pub results: Vec<RecipeCard>,
    pub total: usize,
    pub query: String,
    pub tags: Vec<String>,
}

/// Recipe card for list results
#[derive(Debug, Clone, Serialize)]
pub struct RecipeCard {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
    pub image: String,
    pub cooking_time: Option<u32>,
    pub servings: Option<u32>,
}

impl From<&Recipe> for RecipeCard {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id,
            name: recipe.name.clone(),
            description: recipe.description.clone(),
            tags: recipe.tags.clone(),
            image: recipe.image.clone(),
            cooking_time: recipe.cooking_time,
            servings: recipe.servings,
        }
    }
}

/// Full recipe details
#[derive(Debug, Clone, Serialize)]
pub struct RecipeDetail {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
    pub image: String,
    pub ingredients: Vec<IngredientDetail>,
    pub instructions: Vec<String>,
    pub cooking_time: Option<u32>,
    pub servings: Option<u32>,
    pub notes: Vec<String>,
    pub download_url: String,
}

impl From<&Recipe> for RecipeDetail {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id,
            name: recipe.name.clone(),
            description: recipe.description.clone(),
            tags: recipe.tags.clone(),
            image: recipe.image.clone(),
            ingredients: recipe.ingredients.iter().map(IngredientDetail::from).collect(),
            instructions: recipe.instructions.clone(),
            cooking_time: recipe.cooking_time,
            servings: recipe.servings,
            notes: recipe.notes.clone(),
            download_url: format!("/api/recipes/{}/download", recipe.id),
        }
    }
}

/// Ingredient with quantity
#[derive(Debug, Clone, Serialize)]
pub struct IngredientDetail {
    pub name: String,
    pub quantity: String,
    pub unit: Option<String>,
    pub amount: String,
}

impl From<&Ingredient> for IngredientDetail {
    fn from(ingredient: &Ingredient) -> Self {
        Self {
            name: ingredient.name.clone(),
            quantity: ingredient.quantity.clone(),
            unit: ingredient.unit.clone(),
            amount: ingredient.amount(),
        }
    }
}

/// Tag catalog response
#[derive(Debug, Clone, Serialize)]
pub struct TagsResponse {
    pub tags: Vec<Tag>,
}

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub recipes: usize,
}
