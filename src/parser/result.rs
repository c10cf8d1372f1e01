use serde::{Deserialize, Serialize};
use std::fmt;

/// Element category labels produced by the parsers
pub mod category {
    pub const TITLE: &str = "Title";
    pub const SECTION_HEADER: &str = "SectionHeader";
    pub const NARRATIVE_TEXT: &str = "NarrativeText";
    pub const LIST_ITEM: &str = "ListItem";
    pub const TABLE: &str = "Table";
    pub const UNCATEGORIZED_TEXT: &str = "UncategorizedText";

    /// Categories that open a new section
    pub const HEADERS: [&str; 2] = [TITLE, SECTION_HEADER];
}

/// Smallest structured unit of a parsed document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    /// Classification tag, e.g. "Title" or "NarrativeText"
    pub category: String,
    /// Text content of this element
    pub text: String,
}

impl Element {
    pub fn new(category: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            text: text.into(),
        }
    }

    /// Whether this element starts a new section (Title or SectionHeader)
    pub fn is_header(&self) -> bool {
        category::HEADERS.contains(&self.category.as_str())
    }
}

impl<C: Into<String>, T: Into<String>> From<(C, T)> for Element {
    fn from((category, text): (C, T)) -> Self {
        Element::new(category, text)
    }
}

/// Outcome of parsing a document in either mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "content", rename_all = "snake_case")]
pub enum ParsedDocument {
    /// Whole-document text
    Flat(String),
    /// Ordered, categorized elements
    Structured(Vec<Element>),
}

impl ParsedDocument {
    pub fn mode(&self) -> ParseMode {
        match self {
            ParsedDocument::Flat(_) => ParseMode::Flat,
            ParsedDocument::Structured(_) => ParseMode::Structured,
        }
    }

    pub fn into_text(self) -> Option<String> {
        match self {
            ParsedDocument::Flat(text) => Some(text),
            ParsedDocument::Structured(_) => None,
        }
    }

    pub fn into_elements(self) -> Option<Vec<Element>> {
        match self {
            ParsedDocument::Flat(_) => None,
            ParsedDocument::Structured(elements) => Some(elements),
        }
    }
}

/// Which representation a parser produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseMode {
    Flat,
    Structured,
}

impl fmt::Display for ParseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseMode::Flat => f.write_str("basic"),
            ParseMode::Structured => f.write_str("structured"),
        }
    }
}
