//! XML data model

use indexmap::IndexMap;

/// XML element
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    /// Attributes in insertion order
    pub attributes: IndexMap<String, String>,
    pub content: Content,
}

/// What sits between an element's open and close tags
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Content {
    /// Nothing at all; renders like an empty child list
    #[default]
    Absent,
    /// Inline character data, escaped on output
    Text(String),
    /// Nested elements in document order
    Children(Vec<Element>),
}

impl Element {
    /// Create an element with no attributes and no content
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: IndexMap::new(),
            content: Content::Absent,
        }
    }

    /// Create an element holding only text, such as `<loc>…</loc>`
    pub fn text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(name).with_text(text)
    }

    /// Add an attribute, replacing the value of an existing one in place
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    pub fn with_children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        self.content = Content::Children(children.into_iter().collect());
        self
    }

    /// Returns the child elements, or an empty slice for text and absent content
    pub fn children(&self) -> &[Self] {
        match &self.content {
            Content::Children(children) => children,
            Content::Absent | Content::Text(_) => &[],
        }
    }

    /// Returns the text if this element holds text, None otherwise
    pub fn as_text(&self) -> Option<&str> {
        match &self.content {
            Content::Text(text) => Some(text),
            _ => None,
        }
    }
}
