use askama::Template;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;

use crate::{
    api::handlers::{attachment, AppState},
    catalog::Recipe,
    error::Error,
    export,
    filter::{SearchQuery, TagSelection},
    utils::{grid_filler, sanitize::truncate},
    Result,
};

const CARD_SUMMARY_LEN: usize = 120;

/// Landing page template
#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    query: String,
    selected_tags: String,
    tags: Vec<TagToggle>,
    recipes: Vec<RecipeCardData>,
    filler: usize,
    total: usize,
    has_filters: bool,
}

#[allow(dead_code)] // Fields are used by Askama templates
struct TagToggle {
    label: String,
    image: String,
    selected: bool,
    href: String,
}

#[allow(dead_code)] // Fields are used by Askama templates
struct RecipeCardData {
    id: i64,
    name: String,
    summary: String,
    tags: Vec<String>,
    image: String,
    cooking_time: String,
    servings: String,
}

impl From<&Recipe> for RecipeCardData {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id,
            name: recipe.name.clone(),
            summary: truncate(&recipe.description, CARD_SUMMARY_LEN),
            tags: recipe.tags.clone(),
            image: recipe.image.clone(),
            cooking_time: optional_number(recipe.cooking_time),
            servings: optional_number(recipe.servings),
        }
    }
}

#[derive(Deserialize)]
pub struct IndexParams {
    #[serde(default)]
    q: String,
    #[serde(default)]
    tags: TagSelection,
}

/// Link back to the landing page with the given filters
fn index_href(query: &str, tags: &TagSelection) -> String {
    let mut params = vec![];
    if !query.is_empty() {
        params.push(format!("q={}", urlencoding::encode(query)));
    }
    if !tags.is_empty() {
        params.push(format!(
            "tags={}",
            urlencoding::encode(&tags.to_query_value())
        ));
    }

    if params.is_empty() {
        "/".to_string()
    } else {
        format!("/?{}", params.join("&"))
    }
}

fn optional_number(value: Option<u32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn render(template: &impl Template) -> Result<Html<String>> {
    Ok(Html(template.render().map_err(|e| {
        Error::Internal(format!("Template render failed: {e}"))
    })?))
}

/// GET / - Search, tag filters and recipe grid
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<IndexParams>,
) -> Result<impl IntoResponse> {
    let query = params.q.trim().to_string();
    let search = SearchQuery::new(query.clone(), params.tags);

    let recipes: Vec<RecipeCardData> = search
        .apply(&state.registry)
        .into_iter()
        .map(RecipeCardData::from)
        .collect();

    let tags = state
        .registry
        .tags()
        .iter()
        .map(|tag| TagToggle {
            label: tag.label.clone(),
            image: tag.image.clone(),
            selected: search.tags.contains(&tag.label),
            href: index_href(&query, &search.tags.toggled(&tag.label)),
        })
        .collect();

    let template = IndexTemplate {
        filler: grid_filler(recipes.len(), state.settings.web.grid_columns),
        total: recipes.len(),
        has_filters: !query.is_empty() || !search.tags.is_empty(),
        selected_tags: search.tags.to_query_value(),
        query,
        tags,
        recipes,
    };

    render(&template)
}

/// Recipe detail page template
#[derive(Template)]
#[template(path = "recipe.html")]
struct RecipeTemplate {
    recipe: RecipeData,
}

#[allow(dead_code)] // Fields are used by Askama templates
struct RecipeData {
    id: i64,
    name: String,
    description: String,
    image: String,
    tags: Vec<String>,
    ingredients: Vec<IngredientData>,
    instructions: Vec<String>,
    notes: Vec<String>,
    cooking_time: String,
    servings: String,
}

#[allow(dead_code)] // Fields are used by Askama templates
struct IngredientData {
    amount: String,
    name: String,
}

impl From<&Recipe> for RecipeData {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id,
            name: recipe.name.clone(),
            description: recipe.description.clone(),
            image: recipe.image.clone(),
            tags: recipe.tags.clone(),
            ingredients: recipe
                .ingredients
                .iter()
                .map(|i| IngredientData {
                    amount: i.amount(),
                    name: i.name.clone(),
                })
                .collect(),
            instructions: recipe.instructions.clone(),
            notes: recipe.notes.clone(),
            cooking_time: optional_number(recipe.cooking_time),
            servings: optional_number(recipe.servings),
        }
    }
}

/// Not found page template
#[derive(Template)]
#[template(path = "not_found.html")]
struct NotFoundTemplate {
    message: String,
}

fn not_found(message: &str) -> Result<Response> {
    let page = render(&NotFoundTemplate {
        message: message.to_string(),
    })?;
    Ok((StatusCode::NOT_FOUND, page).into_response())
}

/// Resolve a path segment to a recipe; non-numeric ids are misses too
fn lookup<'a>(state: &'a AppState, id: &str) -> Option<&'a Recipe> {
    id.parse::<i64>().ok().and_then(|id| state.registry.find(id))
}

/// GET /recipes/:id - Recipe detail page
pub async fn recipe_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response> {
    let Some(recipe) = lookup(&state, &id) else {
        return not_found("Recipe not found");
    };

    let template = RecipeTemplate {
        recipe: RecipeData::from(recipe),
    };
    Ok(render(&template)?.into_response())
}

/// GET /recipes/:id/download - Download button target
pub async fn download(State(state): State<AppState>, Path(id): Path<String>) -> Result<Response> {
    let Some(recipe) = lookup(&state, &id) else {
        return not_found("Recipe not found");
    };

    let artifact = export::export_recipe(recipe).await?;
    Ok(attachment(artifact))
}

/// Fallback for unknown paths
pub async fn not_found_page() -> Result<Response> {
    not_found("Page not found")
}
