use axum::http::{header, HeaderValue, Method};
use axum::{routing::get, Router};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, limit::RequestBodyLimitLayer,
    services::ServeDir, set_header::SetResponseHeaderLayer, trace::TraceLayer,
};

use crate::api::handlers::{self as api_handlers, AppState};
use crate::config::Settings;
use crate::web::handlers as web_handlers;

/// Create the router with all endpoints (API + Web UI)
pub fn create_router(state: AppState, settings: &Settings) -> Router {
    // Public API routes - read-only
    let api_routes = Router::new()
        .route("/recipes", get(api_handlers::list_recipes))
        .route("/recipes/:id", get(api_handlers::get_recipe))
        .route("/recipes/:id/download", get(api_handlers::download_recipe))
        .route("/tags", get(api_handlers::list_tags))
        .with_state(state.clone());

    // Web UI routes
    let web_routes = Router::new()
        .route("/", get(web_handlers::index))
        .route("/recipes/:id", get(web_handlers::recipe_detail))
        .route("/recipe/:id", get(web_handlers::recipe_detail))
        .route("/recipes/:id/download", get(web_handlers::download))
        .fallback(web_handlers::not_found_page)
        .with_state(state.clone());

    let health_routes = Router::new()
        .route("/health", get(api_handlers::health_check))
        .with_state(state);

    // Static file serving
    let static_routes =
        Router::new().nest_service("/static", ServeDir::new(&settings.web.static_dir));

    // Main router with middleware
    Router::new()
        .merge(web_routes)
        .merge(health_routes)
        .merge(static_routes)
        .nest("/api", api_routes)
        .layer(
            // Request body size limit - every route is read-only
            RequestBodyLimitLayer::new(settings.server.max_request_body_size),
        )
        .layer(
            CorsLayer::new()
                .allow_methods([Method::GET, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
                .expose_headers([header::CONTENT_DISPOSITION])
                .allow_origin(tower_http::cors::Any)
                .max_age(Duration::from_secs(3600)),
        )
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CONTENT_SECURITY_POLICY,
            HeaderValue::from_static(
                "default-src 'self'; style-src 'self' 'unsafe-inline'; img-src 'self' data:; object-src 'none'; base-uri 'self'",
            ),
        ))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RecipeRegistry;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use std::sync::Arc;
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        AppState {
            registry: Arc::new(RecipeRegistry::bundled().unwrap()),
            settings: Settings::default(),
        }
    }

    async fn get(uri: &str) -> axum::response::Response {
        let state = create_test_state();
        let app = create_router(state.clone(), &state.settings);
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_route() {
        let response = get("/health").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["recipes"], 2);
    }

    #[tokio::test]
    async fn test_list_recipes_with_filters() {
        let response = get("/api/recipes?q=avocado").await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["total"], 1);
        assert_eq!(json["results"][0]["name"], "Avocado Toast");

        let json = body_json(get("/api/recipes?tags=Vegan,Gluten-Free").await).await;
        assert_eq!(json["total"], 1);
        assert_eq!(json["results"][0]["id"], 1);

        let json = body_json(get("/api/recipes").await).await;
        assert_eq!(json["total"], 2);
    }

    #[tokio::test]
    async fn test_get_recipe_and_miss() {
        let json = body_json(get("/api/recipes/1").await).await;
        assert_eq!(json["name"], "Quinoa Buddha Bowl");
        assert_eq!(json["ingredients"][0]["amount"], "1 cup");

        let response = get("/api/recipes/404").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"], "Recipe 404 not found");
    }

    #[tokio::test]
    async fn test_download_sets_attachment_headers() {
        let response = get("/api/recipes/2/download").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"Avocado_Toast.docx\""
        );
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            crate::export::docx::CONTENT_TYPE
        );
    }

    #[tokio::test]
    async fn test_multi_word_tag_selection() {
        use crate::catalog::{Recipe, Tag};

        let recipe = Recipe {
            id: 30,
            name: "Kettle Corn".to_string(),
            description: "Popcorn".to_string(),
            tags: vec!["Sweet & Savory".to_string(), "Vegan".to_string()],
            image: String::new(),
            ingredients: vec![],
            instructions: vec![],
            cooking_time: None,
            servings: None,
            notes: vec![],
        };
        let registry =
            RecipeRegistry::new(vec![recipe], vec![Tag::new("Sweet & Savory", "")]).unwrap();
        let state = AppState {
            registry: Arc::new(registry),
            settings: Settings::default(),
        };
        let app = create_router(state.clone(), &state.settings);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/recipes?tags=Sweet%20%26%20Savory%2CVegan")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let json = body_json(response).await;
        assert_eq!(json["total"], 1);
        assert_eq!(json["tags"][0], "Sweet & Savory");
    }

    #[tokio::test]
    async fn test_singular_recipe_path() {
        let response = get("/recipe/1").await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = get("/recipe/999").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_tags_route() {
        let json = body_json(get("/api/tags").await).await;
        assert_eq!(json["tags"].as_array().unwrap().len(), 5);
        assert_eq!(json["tags"][0]["label"], "Vegan");
    }
}
