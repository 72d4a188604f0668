use clap::Parser;
use recipe_box::{
    api::{handlers::AppState, routes},
    cli::{commands, Cli, Commands},
    config::{CatalogConfig, ExportConfig, Settings},
    Error, RecipeRegistry, Result,
};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,recipe_box=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    // Server and web settings are parsed only for `serve`
    let catalog = cli.catalog.clone().or(CatalogConfig::from_env().path);

    match cli.command {
        Commands::Serve { port, host } => {
            let mut settings = Settings::from_env()?;
            settings.catalog.path = catalog;
            settings.validate()?;
            serve(settings, port, host).await?;
        }
        Commands::Search { query, tags } => {
            let registry = RecipeRegistry::load(catalog.as_deref())?;
            commands::search(&registry, &query, tags)?;
        }
        Commands::Show { recipe_id } => {
            let registry = RecipeRegistry::load(catalog.as_deref())?;
            commands::show(&registry, recipe_id)?;
        }
        Commands::Export { recipe_id, output } => {
            let registry = RecipeRegistry::load(catalog.as_deref())?;
            let output = output.or(Some(ExportConfig::from_env().output_dir));
            commands::export(&registry, recipe_id, output).await?;
        }
        Commands::Tags => {
            let registry = RecipeRegistry::load(catalog.as_deref())?;
            commands::tags(&registry)?;
        }
        Commands::Validate { file } => {
            commands::validate(&file)?;
        }
    }

    Ok(())
}

async fn serve(mut settings: Settings, port: Option<u16>, host: Option<String>) -> Result<()> {
    // Override settings with CLI arguments
    if let Some(port) = port {
        settings.server.port = port;
    }
    if let Some(host) = host {
        settings.server.host = host;
    }

    info!("Starting Recipe Box server");

    let registry = Arc::new(RecipeRegistry::load(settings.catalog.path.as_deref())?);

    let state = AppState {
        registry,
        settings: settings.clone(),
    };

    let app = routes::create_router(state, &settings);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| Error::Internal(format!("Failed to bind to {addr}: {e}")))?;

    println!("\n========================================");
    println!("Recipe Box");
    println!("========================================");
    println!("Address: http://{addr}");
    println!("\nAPI Endpoints:");
    println!("  GET  /api/recipes?q=&tags=");
    println!("  GET  /api/recipes/:id");
    println!("  GET  /api/recipes/:id/download");
    println!("  GET  /api/tags");
    println!("\nPress Ctrl+C to stop");
    println!("========================================\n");

    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::Internal(format!("Server error: {e}")))?;

    info!("Shutting down...");
    Ok(())
}
