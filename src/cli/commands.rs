use crate::catalog::{CatalogFile, Recipe, RecipeRegistry};
use crate::export::{self, DocumentArtifact};
use crate::filter::{SearchQuery, TagSelection};
use crate::utils::sanitize::truncate;
use crate::{Error, Result};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Search for recipes and print a table of matches
pub fn search(registry: &RecipeRegistry, query: &str, tags: Option<String>) -> Result<()> {
    let tags = tags.as_deref().map(TagSelection::parse).unwrap_or_default();
    let search = SearchQuery::new(query.trim(), tags);
    let results = search.apply(registry);

    print!("{}", format_search_results(&results));
    Ok(())
}

/// Print one recipe
pub fn show(registry: &RecipeRegistry, recipe_id: i64) -> Result<()> {
    let recipe = find(registry, recipe_id)?;
    print!("{}", format_recipe(recipe));
    Ok(())
}

/// Export a recipe and save it into `output_dir` (current directory by default)
pub async fn export(
    registry: &RecipeRegistry,
    recipe_id: i64,
    output_dir: Option<PathBuf>,
) -> Result<PathBuf> {
    let recipe = find(registry, recipe_id)?;
    let artifact = export::export_recipe(recipe).await?;

    let dir = match output_dir {
        Some(dir) => validate_output_dir(&dir)?,
        None => PathBuf::from("."),
    };

    let path = save_artifact(&dir, &artifact).await?;

    println!("✓ Exported: {}", path.display());
    println!("  Recipe: {}", recipe.name);
    Ok(path)
}

/// Print the tag catalog
pub fn tags(registry: &RecipeRegistry) -> Result<()> {
    if registry.tags().is_empty() {
        println!("No tags defined");
        return Ok(());
    }

    for tag in registry.tags() {
        let count = registry.recipes().iter().filter(|r| r.has_tag(&tag.label)).count();
        println!("{:<20} {} recipe(s)", tag.label, count);
    }
    Ok(())
}

/// Load a catalog file and check it would build a registry
pub fn validate(path: &Path) -> Result<RecipeRegistry> {
    let catalog = CatalogFile::from_file(path)?;
    let registry = RecipeRegistry::new(catalog.recipes, catalog.tags)?;

    println!("✓ Catalog is valid: {}", path.display());
    println!("  Recipes: {}", registry.len());
    println!("  Tags: {}", registry.tags().len());

    // Recipe tags are free-form; flag ones the catalog does not list
    for recipe in registry.recipes() {
        for tag in &recipe.tags {
            if !registry.tags().iter().any(|t| &t.label == tag) {
                warn!("Recipe {} uses tag '{}' missing from the tag catalog", recipe.id, tag);
            }
        }
    }

    Ok(registry)
}

fn find(registry: &RecipeRegistry, recipe_id: i64) -> Result<&Recipe> {
    registry
        .find(recipe_id)
        .ok_or_else(|| Error::NotFound(format!("Recipe {recipe_id} not found")))
}

/// Write the artifact into `dir` under its suggested name.
/// Bytes land in a temporary file first so a failed write leaves no partial document.
async fn save_artifact(dir: &Path, artifact: &DocumentArtifact) -> Result<PathBuf> {
    tokio::fs::create_dir_all(dir).await?;

    let path = dir.join(&artifact.file_name);
    let partial = dir.join(format!(".{}.part", artifact.file_name));

    tokio::fs::write(&partial, &artifact.bytes).await?;
    if let Err(e) = tokio::fs::rename(&partial, &path).await {
        let _ = tokio::fs::remove_file(&partial).await;
        return Err(e.into());
    }

    info!("Saved {} ({} bytes)", path.display(), artifact.bytes.len());
    Ok(path)
}

/// Reject output directories that climb out of the working tree
fn validate_output_dir(dir: &Path) -> Result<PathBuf> {
    if dir
        .components()
        .any(|c| matches!(c, std::path::Component::ParentDir))
    {
        warn!(
            "Security: Blocked path traversal attempt in directory: {}",
            dir.display()
        );
        return Err(Error::Validation("Path traversal not allowed".to_string()));
    }

    Ok(dir.to_path_buf())
}

fn format_search_results(results: &[&Recipe]) -> String {
    let mut out = String::new();

    if results.is_empty() {
        out.push_str("No recipes found\n");
        return out;
    }

    let _ = writeln!(out, "\nFound {} recipes:\n", results.len());
    let _ = writeln!(out, "{:<5} {:<40} {:<30}", "ID", "Name", "Tags");
    let _ = writeln!(out, "{}", "-".repeat(75));

    for recipe in results {
        let _ = writeln!(
            out,
            "{:<5} {:<40} {:<30}",
            recipe.id,
            truncate(&recipe.name, 38),
            truncate(&recipe.tags.join(", "), 28)
        );
    }

    let _ = writeln!(out, "\nTo export a recipe: recipe-box export <ID>");
    out
}

fn format_recipe(recipe: &Recipe) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", recipe.name);
    let _ = writeln!(out, "{}", "=".repeat(recipe.name.chars().count()));
    let _ = writeln!(out, "{}\n", recipe.description);
    let _ = writeln!(out, "Tags: {}", recipe.tags.join(", "));
    if let Some(time) = recipe.cooking_time {
        let _ = writeln!(out, "Cooking Time: {time} mins");
    }
    if let Some(servings) = recipe.servings {
        let _ = writeln!(out, "Servings: {servings}");
    }

    let _ = writeln!(out, "\nIngredients:");
    for ingredient in &recipe.ingredients {
        let _ = writeln!(out, "  {:<12} {}", ingredient.amount(), ingredient.name);
    }

    let _ = writeln!(out, "\nInstructions:");
    for (i, step) in recipe.instructions.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", i + 1, step);
    }

    if !recipe.notes.is_empty() {
        let _ = writeln!(out, "\nNotes & Tips:");
        for note in &recipe.notes {
            let _ = writeln!(out, "  \u{2022} {note}");
        }
    }

    out
}
