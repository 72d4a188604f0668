use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use tracing::debug;

use crate::{
    api::models::*,
    catalog::{Recipe, RecipeRegistry},
    export::{self, DocumentArtifact},
    filter::SearchQuery,
    Error, Result,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<RecipeRegistry>,
    pub settings: crate::config::Settings,
}

impl AppState {
    /// Resolve a recipe id, turning a miss into `Error::NotFound`
    pub fn recipe(&self, id: i64) -> Result<&Recipe> {
        self.registry
            .find(id)
            .ok_or_else(|| Error::NotFound(format!("Recipe {id} not found")))
    }
}

/// GET /api/recipes - Filter recipes by query and tags
pub async fn list_recipes(
    State(state): State<AppState>,
    Query(params): Query<RecipeListParams>,
) -> Result<Json<RecipeListResponse>> {
    debug!("Recipe list request: {:?}", params);

    let query = SearchQuery::new(params.q.trim(), params.tags);
    let results: Vec<RecipeCard> = query
        .apply(&state.registry)
        .into_iter()
        .map(RecipeCard::from)
        .collect();

    Ok(Json(RecipeListResponse {
        total: results.len(),
        results,
        query: query.q,
        tags: query.tags.iter().map(str::to_string).collect(),
    }))
}

/// GET /api/recipes/:id - Get recipe details
pub async fn get_recipe(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<RecipeDetail>> {
    debug!("Get recipe request: {}", id);

    let recipe = state.recipe(id)?;
    Ok(Json(RecipeDetail::from(recipe)))
}

/// GET /api/recipes/:id/download - Download the recipe as .docx
pub async fn download_recipe(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response> {
    debug!("Download recipe request: {}", id);

    let recipe = state.recipe(id)?;
    let artifact = export::export_recipe(recipe).await?;

    Ok(attachment(artifact))
}

/// GET /api/tags - Tag catalog
pub async fn list_tags(State(state): State<AppState>) -> Result<Json<TagsResponse>> {
    Ok(Json(TagsResponse {
        tags: state.registry.tags().to_vec(),
    }))
}

/// GET /health - Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Result<Json<HealthResponse>> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        recipes: state.registry.len(),
    }))
}

/// Serve an artifact as a file download
pub fn attachment(artifact: DocumentArtifact) -> Response {
    let disposition = format!("attachment; filename=\"{}\"", artifact.file_name);
    (
        [
            (header::CONTENT_TYPE, artifact.content_type.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        artifact.bytes,
    )
        .into_response()
}
