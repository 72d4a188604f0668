use serde::{Deserialize, Deserializer};

/// Insertion-ordered set of selected tag labels
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSelection {
    labels: Vec<String>,
}

impl TagSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a comma-separated list such as "Vegan,Gluten-Free".
    /// Blank entries are skipped and duplicates collapse.
    pub fn parse(list: &str) -> Self {
        let mut selection = Self::new();
        for label in list.split(',').map(str::trim).filter(|l| !l.is_empty()) {
            selection.insert(label);
        }
        selection
    }

    /// Add the label if absent; returns whether it was added
    pub fn insert(&mut self, label: &str) -> bool {
        if self.contains(label) {
            return false;
        }
        self.labels.push(label.to_string());
        true
    }

    /// Add the label if absent, remove it if present
    pub fn toggle(&mut self, label: &str) {
        if self.contains(label) {
            self.labels.retain(|l| l != label);
        } else {
            self.labels.push(label.to_string());
        }
    }

    /// Copy of this selection with `label` toggled
    pub fn toggled(&self, label: &str) -> Self {
        let mut next = self.clone();
        next.toggle(label);
        next
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    /// Comma-separated form accepted by [`TagSelection::parse`]
    pub fn to_query_value(&self) -> String {
        self.labels.join(",")
    }
}

impl<S: AsRef<str>> FromIterator<S> for TagSelection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut selection = Self::new();
        for label in iter {
            selection.insert(label.as_ref());
        }
        selection
    }
}

impl<'de> Deserialize<'de> for TagSelection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map(Self::parse).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_blanks_and_duplicates() {
        let selection = TagSelection::parse(" Vegan, ,Gluten-Free,Vegan,");
        assert_eq!(selection.iter().collect::<Vec<_>>(), vec!["Vegan", "Gluten-Free"]);
        assert_eq!(selection.to_query_value(), "Vegan,Gluten-Free");

        assert!(TagSelection::parse("").is_empty());
    }

    #[test]
    fn test_toggle() {
        let mut selection = TagSelection::new();
        selection.toggle("Vegan");
        selection.toggle("Halal");
        assert_eq!(selection.len(), 2);

        selection.toggle("Vegan");
        assert!(!selection.contains("Vegan"));
        assert_eq!(selection.iter().collect::<Vec<_>>(), vec!["Halal"]);
    }

    #[test]
    fn test_toggled_leaves_original() {
        let selection = TagSelection::parse("Vegan");
        let next = selection.toggled("Dairy-Free");
        assert_eq!(selection.len(), 1);
        assert_eq!(next.to_query_value(), "Vegan,Dairy-Free");
        assert!(next.toggled("Vegan").toggled("Dairy-Free").is_empty());
    }

    #[test]
    fn test_deserialize_from_optional_string() {
        let selection: TagSelection = serde_json::from_str(r#""Halal,Vegan""#).unwrap();
        assert_eq!(selection.to_query_value(), "Halal,Vegan");

        let missing: TagSelection = serde_json::from_str("null").unwrap();
        assert!(missing.is_empty());
    }

    #[test]
    fn test_labels_are_case_sensitive() {
        let selection = TagSelection::parse("vegan");
        assert!(!selection.contains("Vegan"));
    }
}
