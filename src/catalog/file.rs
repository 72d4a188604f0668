use super::models::{Recipe, Tag};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// On-disk catalog, YAML or JSON depending on the file extension
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    pub version: u32,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub recipes: Vec<Recipe>,
}

impl CatalogFile {
    /// Load a catalog from a `.yaml`, `.yml` or `.json` file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!(
                "Failed to read catalog from {}: {}",
                path.display(),
                e
            ))
        })?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let catalog = if is_json {
            Self::from_json(&content)
        } else {
            Self::from_yaml(&content)
        }
        .map_err(|e| {
            Error::Config(format!(
                "Failed to parse catalog from {}: {}",
                path.display(),
                e
            ))
        })?;

        catalog.validate()?;
        Ok(catalog)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Check the catalog header; recipe-level checks happen in the registry
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(Error::Config(format!(
                "Unsupported catalog version: {}. Expected version 1",
                self.version
            )));
        }

        for tag in &self.tags {
            Tag::check_label(&tag.label).map_err(Error::Config)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    fn create_catalog(content: &str, suffix: &str) -> tempfile::NamedTempFile {
        let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_yaml_catalog() {
        let file = create_catalog(
            r#"
version: 1
tags:
  - label: Vegan
    image: /static/images/vegan.png
recipes:
  - id: 10
    name: Lentil Soup
    description: Hearty and warming
    tags: [Vegan]
    ingredients:
      - name: Red lentils
        quantity: "1"
        unit: cup
      - name: Salt
        quantity: pinch
    instructions:
      - Simmer everything
    cooking_time: 40
"#,
            ".yaml",
        );

        let catalog = CatalogFile::from_file(file.path()).unwrap();
        assert_eq!(catalog.tags.len(), 1);
        assert_eq!(catalog.recipes.len(), 1);

        let recipe = &catalog.recipes[0];
        assert_eq!(recipe.ingredients[1].unit, None);
        assert_eq!(recipe.cooking_time, Some(40));
        assert!(recipe.notes.is_empty());
    }

    #[test]
    fn test_load_json_catalog() {
        let file = create_catalog(
            r#"{"version": 1, "recipes": [{"id": 3, "name": "Tea", "description": "Hot", "servings": 1}]}"#,
            ".json",
        );

        let catalog = CatalogFile::from_file(file.path()).unwrap();
        assert!(catalog.tags.is_empty());
        assert_eq!(catalog.recipes[0].servings, Some(1));
    }

    #[test]
    fn test_reject_unsupported_version() {
        let file = create_catalog("version: 2\nrecipes: []\n", ".yaml");
        let result = CatalogFile::from_file(file.path());
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_reject_unparseable_file() {
        let file = create_catalog("version: [not, a, number", ".yml");
        assert!(CatalogFile::from_file(file.path()).is_err());
    }

    #[test]
    fn test_reject_unselectable_tag_labels() {
        for label in ["\"Sweet, Savory\"", "\" Vegan\"", "\"\""] {
            let file = create_catalog(
                &format!("version: 1\ntags:\n  - label: {label}\nrecipes: []\n"),
                ".yaml",
            );
            let result = CatalogFile::from_file(file.path());
            assert!(matches!(result, Err(Error::Config(_))), "{label}");
        }
    }

    #[test]
    fn test_missing_file() {
        let result = CatalogFile::from_file("/nonexistent/catalog.yaml");
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
