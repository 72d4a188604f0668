use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: i64,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default, alias = "cookingTime")]
    pub cooking_time: Option<u32>,
    #[serde(default)]
    pub servings: Option<u32>,
    #[serde(default)]
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    /// Kept verbatim so fractions like "1/2" survive
    pub quantity: String,
    #[serde(default)]
    pub unit: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub label: String,
    #[serde(default)]
    pub image: String,
}

impl Recipe {
    pub fn has_tag(&self, label: &str) -> bool {
        self.tags.iter().any(|t| t == label)
    }
}

impl Ingredient {
    pub fn new(name: &str, quantity: &str, unit: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            quantity: quantity.to_string(),
            unit: unit.map(str::to_string),
        }
    }

    /// Quantity and unit as displayed, e.g. "1/4 cup"
    pub fn amount(&self) -> String {
        format!("{} {}", self.quantity, self.unit.as_deref().unwrap_or_default())
            .trim()
            .to_string()
    }
}

impl Tag {
    pub fn new(label: &str, image: &str) -> Self {
        Self {
            label: label.to_string(),
            image: image.to_string(),
        }
    }

    /// Check a label can travel in a comma-separated tag selection.
    ///
    /// Labels must be non-empty, free of commas and without surrounding
    /// whitespace, otherwise the selection would split or trim them.
    pub fn check_label(label: &str) -> Result<(), String> {
        if label.trim().is_empty() {
            return Err("Tag label cannot be empty".to_string());
        }
        if label.contains(',') {
            return Err(format!("Tag label '{label}' cannot contain a comma"));
        }
        if label.trim() != label {
            return Err(format!(
                "Tag label '{label}' cannot have leading or trailing whitespace"
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingredient_amount() {
        assert_eq!(Ingredient::new("Microgreens", "1/4", Some("cup")).amount(), "1/4 cup");
        assert_eq!(Ingredient::new("Egg", "2", None).amount(), "2");
    }

    #[test]
    fn test_check_label() {
        assert!(Tag::check_label("Gluten-Free").is_ok());
        assert!(Tag::check_label("Sweet & Savory").is_ok());

        assert!(Tag::check_label("").is_err());
        assert!(Tag::check_label("   ").is_err());
        assert!(Tag::check_label("Sweet, Savory").is_err());
        assert!(Tag::check_label(" Vegan").is_err());
        assert!(Tag::check_label("Vegan\t").is_err());
    }

    #[test]
    fn test_missing_sequences_default_to_empty() {
        let recipe: Recipe = serde_json::from_str(
            r#"{"id": 7, "name": "Plain Rice", "description": "Just rice", "cookingTime": 20}"#,
        )
        .unwrap();

        assert!(recipe.tags.is_empty());
        assert!(recipe.ingredients.is_empty());
        assert!(recipe.instructions.is_empty());
        assert!(recipe.notes.is_empty());
        assert_eq!(recipe.cooking_time, Some(20));
        assert_eq!(recipe.servings, None);
    }
}
