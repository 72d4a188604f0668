// Format-neutral document tree produced from a recipe

/// Vertical spacing around a paragraph, in twentieths of a point
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Spacing {
    pub before: u32,
    pub after: u32,
}

impl Spacing {
    pub const fn after(after: u32) -> Self {
        Self { before: 0, after }
    }

    pub const fn around(before: u32, after: u32) -> Self {
        Self { before, after }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStyle {
    Numbered,
    Bulleted,
}

impl ListStyle {
    /// Text placed in front of the item at `index` (zero-based)
    pub fn marker(self, index: usize) -> String {
        match self {
            ListStyle::Numbered => format!("{}.", index + 1),
            ListStyle::Bulleted => "\u{2022}".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Column widths as percentages of the table width
    pub column_widths: Vec<u32>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct List {
    pub style: ListStyle,
    pub items: Vec<String>,
    pub spacing: Spacing,
}

impl List {
    /// Items with their markers, e.g. "1. Mash avocado"
    pub fn rendered_items(&self) -> impl Iterator<Item = String> + '_ {
        self.items
            .iter()
            .enumerate()
            .map(|(i, item)| format!("{} {}", self.style.marker(i), item))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Title { text: String, spacing: Spacing },
    Heading { text: String, spacing: Spacing },
    Paragraph { text: String, spacing: Spacing },
    Table(Table),
    List(List),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub title: String,
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Table(table) => Some(table),
            _ => None,
        })
    }

    pub fn lists(&self) -> impl Iterator<Item = &List> {
        self.blocks.iter().filter_map(|b| match b {
            Block::List(list) => Some(list),
            _ => None,
        })
    }

    pub fn headings(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Heading { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

/// Accumulates blocks in order; `build` hands back the finished tree
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    document: Document,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, text: impl Into<String>, spacing: Spacing) -> Self {
        let text = text.into();
        if self.document.title.is_empty() {
            self.document.title = text.clone();
        }
        self.document.blocks.push(Block::Title { text, spacing });
        self
    }

    pub fn heading(mut self, text: impl Into<String>, spacing: Spacing) -> Self {
        self.document.blocks.push(Block::Heading {
            text: text.into(),
            spacing,
        });
        self
    }

    pub fn paragraph(mut self, text: impl Into<String>, spacing: Spacing) -> Self {
        self.document.blocks.push(Block::Paragraph {
            text: text.into(),
            spacing,
        });
        self
    }

    /// Paragraph emitted only when `text` is `Some`
    pub fn optional_paragraph(self, text: Option<String>, spacing: Spacing) -> Self {
        match text {
            Some(text) => self.paragraph(text, spacing),
            None => self,
        }
    }

    pub fn table(mut self, column_widths: &[u32], rows: Vec<Vec<String>>) -> Self {
        self.document.blocks.push(Block::Table(Table {
            column_widths: column_widths.to_vec(),
            rows,
        }));
        self
    }

    pub fn list(mut self, style: ListStyle, items: Vec<String>, spacing: Spacing) -> Self {
        self.document.blocks.push(Block::List(List {
            style,
            items,
            spacing,
        }));
        self
    }

    /// Apply `f` only when `condition` holds
    pub fn section_if(self, condition: bool, f: impl FnOnce(Self) -> Self) -> Self {
        if condition {
            f(self)
        } else {
            self
        }
    }

    pub fn build(self) -> Document {
        self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_markers() {
        let list = List {
            style: ListStyle::Numbered,
            items: vec!["Boil".to_string(), "Serve".to_string()],
            spacing: Spacing::default(),
        };
        assert_eq!(
            list.rendered_items().collect::<Vec<_>>(),
            vec!["1. Boil", "2. Serve"]
        );

        let bullets = List {
            style: ListStyle::Bulleted,
            ..list
        };
        assert_eq!(bullets.rendered_items().next().unwrap(), "\u{2022} Boil");
    }

    #[test]
    fn test_builder_keeps_order_and_skips_conditionals() {
        let doc = DocumentBuilder::new()
            .title("Soup", Spacing::after(200))
            .optional_paragraph(None, Spacing::after(100))
            .heading("Ingredients", Spacing::after(100))
            .table(&[40, 60], vec![])
            .section_if(false, |b| b.heading("Never", Spacing::default()))
            .build();

        assert_eq!(doc.title, "Soup");
        assert_eq!(doc.blocks.len(), 3);
        assert_eq!(doc.headings().collect::<Vec<_>>(), vec!["Ingredients"]);
        assert_eq!(doc.tables().next().unwrap().rows.len(), 0);
    }
}
