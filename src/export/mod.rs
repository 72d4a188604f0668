pub mod document;
pub mod docx;

pub use document::{Block, Document, DocumentBuilder, List, ListStyle, Spacing, Table};

use crate::catalog::Recipe;
use crate::error::{Error, Result};
use crate::utils::sanitize::file_stem;
use chrono::Utc;
use tracing::{debug, info};

/// Ingredient table column widths, in percent
pub const INGREDIENT_COLUMNS: [u32; 2] = [40, 60];

const CREATOR: &str = concat!("recipe-box/", env!("CARGO_PKG_VERSION"));

/// A serialized recipe ready to hand to a save/download target
#[derive(Debug, Clone)]
pub struct DocumentArtifact {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Lay out a recipe as a document tree
pub fn build_document(recipe: &Recipe) -> Document {
    let ingredient_rows = recipe
        .ingredients
        .iter()
        .map(|ing| vec![ing.amount(), ing.name.clone()])
        .collect();

    DocumentBuilder::new()
        .title(&recipe.name, Spacing::after(200))
        .paragraph(&recipe.description, Spacing::after(200))
        .paragraph(format!("Tags: {}", recipe.tags.join(", ")), Spacing::after(200))
        .optional_paragraph(
            recipe.cooking_time.map(|t| format!("Cooking Time: {t} mins")),
            Spacing::after(100),
        )
        .optional_paragraph(
            recipe.servings.map(|s| format!("Servings: {s}")),
            Spacing::after(200),
        )
        .heading("Ingredients", Spacing::after(100))
        .table(&INGREDIENT_COLUMNS, ingredient_rows)
        .heading("Instructions", Spacing::around(300, 100))
        .list(
            ListStyle::Numbered,
            recipe.instructions.clone(),
            Spacing::after(80),
        )
        .section_if(!recipe.notes.is_empty(), |b| {
            b.heading("Notes & Tips", Spacing::around(300, 100)).list(
                ListStyle::Bulleted,
                recipe.notes.clone(),
                Spacing::after(60),
            )
        })
        .build()
}

/// Suggested download name, e.g. `Quinoa_Buddha_Bowl.docx`
pub fn file_name_for(recipe: &Recipe) -> String {
    format!("{}.{}", file_stem(&recipe.name), docx::EXTENSION)
}

/// Build and serialize a recipe into a `.docx` artifact.
///
/// Encoding runs on the blocking pool; on failure no artifact is produced.
pub async fn export_recipe(recipe: &Recipe) -> Result<DocumentArtifact> {
    let document = build_document(recipe);
    let file_name = file_name_for(recipe);
    let properties = docx::DocumentProperties {
        title: recipe.name.clone(),
        creator: CREATOR.to_string(),
        created: Utc::now(),
    };

    debug!(
        "Exporting recipe {} ({} blocks) as {}",
        recipe.id,
        document.blocks.len(),
        file_name
    );

    let bytes = tokio::task::spawn_blocking(move || docx::write(&document, &properties))
        .await
        .map_err(|e| Error::Export(format!("Export task failed: {e}")))??;

    info!("Exported recipe {} to {} ({} bytes)", recipe.id, file_name, bytes.len());

    Ok(DocumentArtifact {
        file_name,
        content_type: docx::CONTENT_TYPE,
        bytes,
    })
}
